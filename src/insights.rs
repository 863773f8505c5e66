// 🔮 Insight Ranker - display ordering + classification for insights
//
// Source order is the default. Sorting by confidence happens only when the
// caller asks for it. Impact labels map onto exactly four buckets and an
// unknown label is an error, never a silent "neutral".

use crate::entities::{Impact, Insight, InsightCategory};
use crate::error::AnalyticsResult;
use serde::{Deserialize, Serialize};

// ============================================================================
// BUCKETS + TIERS
// ============================================================================

/// Presentation bucket for an impact tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactBucket {
    Positive,
    Negative,
    Warning,
    Neutral,
}

impl ImpactBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactBucket::Positive => "positive",
            ImpactBucket::Negative => "negative",
            ImpactBucket::Warning => "warning",
            ImpactBucket::Neutral => "neutral",
        }
    }
}

impl From<Impact> for ImpactBucket {
    fn from(impact: Impact) -> Self {
        match impact {
            Impact::Positive => ImpactBucket::Positive,
            Impact::Negative => ImpactBucket::Negative,
            Impact::Warning => ImpactBucket::Warning,
            Impact::Neutral => ImpactBucket::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketCounts {
    pub positive: usize,
    pub negative: usize,
    pub warning: usize,
    pub neutral: usize,
}

// ============================================================================
// RANKED INSIGHTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedInsights {
    ordered: Vec<Insight>,

    /// Lowest confidence counted as High (inclusive)
    high_threshold: f64,

    /// Lowest confidence counted as Medium (inclusive)
    medium_threshold: f64,
}

impl RankedInsights {
    pub fn new(insights: &[Insight]) -> Self {
        RankedInsights::with_thresholds(insights, 70.0, 40.0)
    }

    pub fn with_thresholds(insights: &[Insight], high_threshold: f64, medium_threshold: f64) -> Self {
        RankedInsights {
            ordered: insights.to_vec(),
            high_threshold,
            medium_threshold,
        }
    }

    /// Insights in source order
    pub fn ordered(&self) -> &[Insight] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Insights sorted by confidence, highest first (ties keep source order)
    pub fn by_confidence(&self) -> Vec<&Insight> {
        let mut sorted: Vec<&Insight> = self.ordered.iter().collect();
        sorted.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        sorted
    }

    /// Presentation bucket for a raw impact label
    pub fn bucket_of(&self, impact: &str) -> AnalyticsResult<ImpactBucket> {
        let impact: Impact = impact.parse()?;
        Ok(ImpactBucket::from(impact))
    }

    /// High ≥ high threshold, Medium ≥ medium threshold, otherwise Low
    pub fn tier_of(&self, confidence: f64) -> ConfidenceTier {
        if confidence >= self.high_threshold {
            ConfidenceTier::High
        } else if confidence >= self.medium_threshold {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn in_tier(&self, tier: ConfidenceTier) -> Vec<&Insight> {
        self.ordered
            .iter()
            .filter(|i| self.tier_of(i.confidence) == tier)
            .collect()
    }

    pub fn in_category(&self, category: InsightCategory) -> Vec<&Insight> {
        self.ordered.iter().filter(|i| i.category == category).collect()
    }

    pub fn bucket_counts(&self) -> BucketCounts {
        self.ordered
            .iter()
            .fold(BucketCounts::default(), |mut counts, insight| {
                match ImpactBucket::from(insight.impact) {
                    ImpactBucket::Positive => counts.positive += 1,
                    ImpactBucket::Negative => counts.negative += 1,
                    ImpactBucket::Warning => counts.warning += 1,
                    ImpactBucket::Neutral => counts.neutral += 1,
                }
                counts
            })
    }
}

/// Wrap insights with the default 70 / 40 confidence thresholds
pub fn rank_insights(insights: &[Insight]) -> RankedInsights {
    RankedInsights::new(insights)
}

// ============================================================================
// TESTS
// ============================================================================
