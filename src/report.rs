// 📊 Dashboard Report - every aggregate over one snapshot
//
// Reads the provider once, then runs each aggregator on that same snapshot.
// The aggregators stay independent; this only collects their views.

use crate::capital::{CapitalBreakdown, CapitalSourceAggregator};
use crate::config::AnalyticsConfig;
use crate::geography::{GeographicAggregator, LocationAggregate};
use crate::insights::{BucketCounts, ConfidenceTier, RankedInsights};
use crate::performance::{score_metrics, Scorecard};
use crate::pipeline::{summarize_all, PipelineOverview};
use crate::provider::DataProvider;
use crate::velocity::{VelocityReport, VelocityTracker};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Insight counts per confidence tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightDigest {
    pub ranked: RankedInsights,
    pub buckets: BucketCounts,
    pub tiers: TierCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub locations: Vec<LocationAggregate>,
    pub geographic_diversity: usize,
    pub velocity: VelocityReport,
    pub scorecard: Scorecard,
    pub insights: InsightDigest,
    pub capital: CapitalBreakdown,
    pub pipeline: PipelineOverview,
}

impl DashboardReport {
    pub fn build(provider: &dyn DataProvider, config: &AnalyticsConfig) -> Result<Self> {
        config.validate().context("Invalid analytics config")?;
        let snapshot = provider.snapshot()?;

        info!(records = snapshot.record_count(), "building dashboard report");

        let geography = GeographicAggregator::with_primary_weight(config.primary_weight);
        let velocity = VelocityTracker::with_headroom(config.y_axis_headroom)
            .track(&snapshot.monthly_raises, config.target_total);
        if velocity.progress_ratio.is_none() && !snapshot.monthly_raises.is_empty() {
            warn!("monthly targets sum to zero; velocity progress ratio is undefined");
        }

        let ranked = RankedInsights::with_thresholds(
            &snapshot.insights,
            config.high_confidence_threshold,
            config.medium_confidence_threshold,
        );
        let invalid = snapshot.insights.iter().filter(|i| !i.has_valid_confidence()).count();
        if invalid > 0 {
            warn!(count = invalid, "insights with confidence outside 0-100");
        }
        let tiers = TierCounts {
            high: ranked.in_tier(ConfidenceTier::High).len(),
            medium: ranked.in_tier(ConfidenceTier::Medium).len(),
            low: ranked.in_tier(ConfidenceTier::Low).len(),
        };
        let buckets = ranked.bucket_counts();

        let capital = CapitalSourceAggregator::with_policy(config.rounding_policy)
            .aggregate(&snapshot.capital_sources);
        if let Some(drift) = capital.rounding_drift().filter(|d| *d != 0) {
            info!(drift, "capital source shares do not sum to 100");
        }

        Ok(DashboardReport {
            generated_at: Utc::now(),
            locations: geography.aggregate(&snapshot.investors),
            geographic_diversity: geography.diversity(&snapshot.investors),
            velocity,
            scorecard: score_metrics(&snapshot.metrics),
            insights: InsightDigest { ranked, buckets, tiers },
            capital,
            pipeline: summarize_all(&snapshot.deals, &snapshot.commitments),
        })
    }

    pub fn summary(&self) -> String {
        let top = self
            .locations
            .first()
            .map(|l| format!("{} (${:.0})", l.location, l.aggregated_value))
            .unwrap_or_else(|| "none".to_string());
        format!(
            "{} locations, top {}, diversity {} | {} | {} | {} insights ({} high) | {}",
            self.locations.len(),
            top,
            self.geographic_diversity,
            self.velocity.summary(),
            self.scorecard.summary(),
            self.insights.ranked.len(),
            self.insights.tiers.high,
            self.capital.summary()
        )
    }
}
