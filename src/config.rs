// ⚙️ Analytics Configuration
// Numeric policies the aggregators apply. Defaults match the dashboard.

use crate::capital::RoundingPolicy;
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Share of an investor's capacity spread over primary locations (0.0 - 1.0)
    pub primary_weight: f64,

    /// Multiplier applied to the largest velocity value for the chart Y-axis
    pub y_axis_headroom: f64,

    /// Lowest confidence that counts as a high-confidence insight
    pub high_confidence_threshold: f64,

    /// Lowest confidence that counts as a medium-confidence insight
    pub medium_confidence_threshold: f64,

    /// How capital-source percentages are rounded
    pub rounding_policy: RoundingPolicy,

    /// Total raise goal the velocity tracker measures against (USD)
    pub target_total: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            primary_weight: 0.7,
            y_axis_headroom: 1.1,
            high_confidence_threshold: 70.0,
            medium_confidence_threshold: 40.0,
            rounding_policy: RoundingPolicy::Independent,
            target_total: 0.0,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: AnalyticsConfig = serde_json::from_str(&content)
            .context("Failed to parse config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the aggregators meaningless
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.primary_weight) {
            anyhow::bail!("primary_weight must be within 0.0..=1.0, got {}", self.primary_weight);
        }
        if self.y_axis_headroom < 1.0 {
            anyhow::bail!("y_axis_headroom must be at least 1.0, got {}", self.y_axis_headroom);
        }
        if self.medium_confidence_threshold > self.high_confidence_threshold {
            anyhow::bail!(
                "medium_confidence_threshold ({}) exceeds high_confidence_threshold ({})",
                self.medium_confidence_threshold,
                self.high_confidence_threshold
            );
        }
        if self.target_total < 0.0 {
            anyhow::bail!("target_total must not be negative, got {}", self.target_total);
        }
        Ok(())
    }
}
