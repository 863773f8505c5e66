// 💰 Capital Source Entry - one slice of the raise breakdown
//
// Independent of Commitment: the same dollars may show up in both views.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalSourceEntry {
    /// Source name (e.g. "Family Offices")
    pub name: String,

    /// Committed amount (USD)
    pub amount: f64,

    /// Free-text status label (e.g. "Committed", "In Diligence")
    #[serde(default)]
    pub status: String,
}

impl CapitalSourceEntry {
    pub fn new(name: &str, amount: f64, status: &str) -> Self {
        CapitalSourceEntry {
            name: name.to_string(),
            amount,
            status: status.to_string(),
        }
    }
}
