// LP Analytics - Core Library
// Investment analytics aggregation for the LP/deal matching dashboard

pub mod error;
pub mod entities;
pub mod config;
pub mod geography;   // Capital concentration by location
pub mod velocity;    // Monthly raise vs target vs forecast
pub mod performance; // Metric progress + change scoring
pub mod insights;    // Insight ordering, buckets, confidence tiers
pub mod capital;     // Capital source shares
pub mod pipeline;    // Commitment totals per deal
pub mod provider;    // Injected datasets (Snapshot, CSV loaders)
pub mod report;      // All aggregates over one snapshot

// Re-export commonly used types
pub use error::{AnalyticsError, AnalyticsResult};
pub use entities::{
    Investor,
    Commitment, CommitmentStatus, Deal,
    MetricSample, MonthlyRaiseSample, StatusTag, ValueFormat,
    Impact, Insight, InsightCategory,
    CapitalSourceEntry,
};
pub use config::AnalyticsConfig;
pub use geography::{
    GeographicAggregator, LocationAggregate, aggregate_geography, geographic_diversity,
};
pub use velocity::{MonthPoint, VelocityReport, VelocityTracker, track_velocity};
pub use performance::{Direction, PerformanceScore, Scorecard, score_metrics, score_performance};
pub use insights::{BucketCounts, ConfidenceTier, ImpactBucket, RankedInsights, rank_insights};
pub use capital::{
    CapitalBreakdown, CapitalSourceAggregator, RoundingPolicy, SourceShare, StatusSubtotal,
    aggregate_capital_sources,
};
pub use pipeline::{PipelineOverview, PipelineSummary, StatusTotal, summarize_all, summarize_pipeline};
pub use provider::{
    DataProvider, Snapshot,
    load_capital_sources_csv, load_capital_sources_path,
    load_monthly_raises_csv, load_monthly_raises_path,
};
pub use report::{DashboardReport, InsightDigest, TierCounts};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
