// 🗺️ Geographic Aggregator - where LP capital wants to go
//
// Each investor's capacity is split into a primary share (default 70%) and a
// secondary share (default 30%). Each share is spread evenly over that tier's
// locations. Locations accumulate contributions across all investors.
// An empty tier contributes nothing and its weight is not moved onto the
// other tier, so a single-tier investor contributes only that tier's share.
//
//   Denver  (primary)            ← 0.7 × capacity / |primary|
//   Austin  (secondary)          ← 0.3 × capacity / |secondary|

use crate::entities::Investor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

// ============================================================================
// LOCATION AGGREGATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAggregate {
    pub location: String,

    /// Estimated capital directed at this location (USD)
    pub aggregated_value: f64,

    /// Investors listing this location as primary (once per investor per entry)
    pub primary_count: usize,
}

// ============================================================================
// GEOGRAPHIC AGGREGATOR
// ============================================================================

#[derive(Debug, Clone)]
pub struct GeographicAggregator {
    /// Share of capacity spread across primary locations
    pub primary_weight: f64,
}

impl GeographicAggregator {
    pub fn new() -> Self {
        GeographicAggregator { primary_weight: 0.7 }
    }

    pub fn with_primary_weight(primary_weight: f64) -> Self {
        GeographicAggregator { primary_weight }
    }

    pub fn secondary_weight(&self) -> f64 {
        1.0 - self.primary_weight
    }

    /// Ranked location table, descending by aggregated value
    ///
    /// Ties keep first-encounter order.
    pub fn aggregate(&self, investors: &[Investor]) -> Vec<LocationAggregate> {
        let mut table: Vec<LocationAggregate> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for investor in investors {
            if !investor.has_preferences() {
                debug!(investor = %investor.id, "investor has no location preferences, skipping");
                continue;
            }

            if !investor.primary_locations.is_empty() {
                let share = investor.capital_capacity * self.primary_weight
                    / investor.primary_locations.len() as f64;

                for location in &investor.primary_locations {
                    let entry = slot(&mut table, &mut index, location);
                    entry.aggregated_value += share;
                    entry.primary_count += 1;
                }
            }

            if !investor.secondary_locations.is_empty() {
                let share = investor.capital_capacity * self.secondary_weight()
                    / investor.secondary_locations.len() as f64;

                for location in &investor.secondary_locations {
                    slot(&mut table, &mut index, location).aggregated_value += share;
                }
            }
        }

        // sort_by is stable, so equal values stay in encounter order
        table.sort_by(|a, b| b.aggregated_value.total_cmp(&a.aggregated_value));
        table
    }

    /// Largest number of declared locations held by a single investor
    pub fn diversity(&self, investors: &[Investor]) -> usize {
        investors
            .iter()
            .fold(0, |max, investor| max.max(investor.location_count()))
    }
}

impl Default for GeographicAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn slot<'a>(
    table: &'a mut Vec<LocationAggregate>,
    index: &mut HashMap<String, usize>,
    location: &str,
) -> &'a mut LocationAggregate {
    let position = *index.entry(location.to_string()).or_insert_with(|| {
        table.push(LocationAggregate {
            location: location.to_string(),
            aggregated_value: 0.0,
            primary_count: 0,
        });
        table.len() - 1
    });
    &mut table[position]
}

/// Ranked location table using the default 70/30 weighting
pub fn aggregate_geography(investors: &[Investor]) -> Vec<LocationAggregate> {
    GeographicAggregator::new().aggregate(investors)
}

/// Maximum primary + secondary location count across investors (0 if none)
pub fn geographic_diversity(investors: &[Investor]) -> usize {
    GeographicAggregator::new().diversity(investors)
}

// ============================================================================
// TESTS
// ============================================================================
