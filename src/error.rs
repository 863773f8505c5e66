// ⚠️ Analytics Errors
// Undefined ratios and unknown category labels are reported, never coerced.

use thiserror::Error;

// ============================================================================
// ERROR TAXONOMY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// A ratio whose denominator is zero (progress, change, share, velocity)
    #[error("{ratio} is undefined: denominator is zero")]
    DivisionUndefined { ratio: &'static str },

    /// A label outside one of the closed enumerations
    #[error("unrecognized {kind} value: {value:?}")]
    UnrecognizedCategory { kind: &'static str, value: String },
}

impl AnalyticsError {
    pub fn unrecognized(kind: &'static str, value: impl Into<String>) -> Self {
        AnalyticsError::UnrecognizedCategory {
            kind,
            value: value.into(),
        }
    }
}

pub type AnalyticsResult<T> = std::result::Result<T, AnalyticsError>;

// ============================================================================
// RATIO HELPERS
// ============================================================================

/// `numerator / denominator`, or `None` when the denominator is zero.
pub fn checked_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Percentage `100 × numerator / denominator`, `None` when undefined.
pub fn checked_percentage(numerator: f64, denominator: f64) -> Option<f64> {
    checked_ratio(numerator, denominator).map(|r| r * 100.0)
}

/// Round to one decimal place (half away from zero).
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Turn an optional ratio into a `Result`, naming the ratio on failure.
pub fn require_defined(value: Option<f64>, ratio: &'static str) -> AnalyticsResult<f64> {
    value.ok_or(AnalyticsError::DivisionUndefined { ratio })
}
