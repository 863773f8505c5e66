// 🧑‍💼 Investor Entity - LP capacity + geographic preferences
//
// Primary and secondary location lists are ordered as the source declares
// them. They may overlap; either may be empty.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investor {
    /// Stable identity
    pub id: String,

    /// Display name (e.g. "Harborview Capital")
    pub name: String,

    /// Maximum investable amount (USD)
    pub capital_capacity: f64,

    /// Preferred deal locations, first tier
    #[serde(default)]
    pub primary_locations: Vec<String>,

    /// Acceptable deal locations, second tier
    #[serde(default)]
    pub secondary_locations: Vec<String>,
}

impl Investor {
    pub fn new(id: &str, name: &str, capital_capacity: f64) -> Self {
        Investor {
            id: id.to_string(),
            name: name.to_string(),
            capital_capacity,
            primary_locations: Vec::new(),
            secondary_locations: Vec::new(),
        }
    }

    /// Builder: set primary locations
    pub fn with_primary(mut self, locations: &[&str]) -> Self {
        self.primary_locations = locations.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Builder: set secondary locations
    pub fn with_secondary(mut self, locations: &[&str]) -> Self {
        self.secondary_locations = locations.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Number of declared locations across both tiers (duplicates included)
    pub fn location_count(&self) -> usize {
        self.primary_locations.len() + self.secondary_locations.len()
    }

    pub fn has_preferences(&self) -> bool {
        self.location_count() > 0
    }
}
