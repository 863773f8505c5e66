// 💡 Insight Entity - generated analytical statements

use crate::error::AnalyticsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// IMPACT + CATEGORY TAGS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Impact {
    Positive,
    Negative,
    Warning,
    Neutral,
}

impl Impact {
    pub const ALL: [Impact; 4] = [Impact::Positive, Impact::Negative, Impact::Warning, Impact::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
            Impact::Warning => "warning",
            Impact::Neutral => "neutral",
        }
    }
}

impl FromStr for Impact {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize_label(s).as_str() {
            "positive" => Ok(Impact::Positive),
            "negative" => Ok(Impact::Negative),
            "warning" => Ok(Impact::Warning),
            "neutral" => Ok(Impact::Neutral),
            _ => Err(AnalyticsError::unrecognized("impact", s)),
        }
    }
}

impl TryFrom<String> for Impact {
    type Error = AnalyticsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum InsightCategory {
    Market,
    Investor,
    Deal,
    Performance,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Market => "market",
            InsightCategory::Investor => "investor",
            InsightCategory::Deal => "deal",
            InsightCategory::Performance => "performance",
        }
    }
}

impl FromStr for InsightCategory {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize_label(s).as_str() {
            "market" => Ok(InsightCategory::Market),
            "investor" => Ok(InsightCategory::Investor),
            "deal" => Ok(InsightCategory::Deal),
            "performance" => Ok(InsightCategory::Performance),
            _ => Err(AnalyticsError::unrecognized("insight category", s)),
        }
    }
}

impl TryFrom<String> for InsightCategory {
    type Error = AnalyticsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// INSIGHT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default = "default_insight_id")]
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub impact: Impact,
    pub category: InsightCategory,
    pub generated_at: DateTime<Utc>,

    /// Confidence score, 0-100
    pub confidence: f64,
}

fn default_insight_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Insight {
    pub fn new(title: &str, impact: Impact, category: InsightCategory, confidence: f64) -> Self {
        Insight {
            id: default_insight_id(),
            title: title.to_string(),
            description: String::new(),
            impact,
            category,
            generated_at: Utc::now(),
            confidence,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn has_valid_confidence(&self) -> bool {
        (0.0..=100.0).contains(&self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_parse_all_four() {
        for impact in Impact::ALL {
            assert_eq!(impact.as_str().parse::<Impact>(), Ok(impact));
        }
        assert!("bullish".parse::<Impact>().is_err());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Market".parse::<InsightCategory>(), Ok(InsightCategory::Market));
        assert_eq!(
            "macro".parse::<InsightCategory>(),
            Err(AnalyticsError::unrecognized("insight category", "macro"))
        );
    }

    #[test]
    fn test_insight_new_generates_id() {
        let a = Insight::new("Denver demand rising", Impact::Positive, InsightCategory::Market, 82.0);
        let b = Insight::new("Denver demand rising", Impact::Positive, InsightCategory::Market, 82.0);

        assert_ne!(a.id, b.id);
        assert!(a.has_valid_confidence());
    }

    #[test]
    fn test_insight_deserialize_without_id() {
        let json = r#"{
            "title": "LP churn risk",
            "impact": "warning",
            "category": "investor",
            "generated_at": "2024-06-01T12:00:00Z",
            "confidence": 64
        }"#;
        let insight: Insight = serde_json::from_str(json).unwrap();

        assert!(!insight.id.is_empty());
        assert_eq!(insight.impact, Impact::Warning);
        assert_eq!(insight.confidence, 64.0);
    }

    #[test]
    fn test_insight_confidence_out_of_range() {
        let insight = Insight::new("Bad score", Impact::Neutral, InsightCategory::Deal, 140.0);
        assert!(!insight.has_valid_confidence());
    }
}
