// 📏 Metric Samples - performance measurements + monthly raise rows

use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// VALUE FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ValueFormat {
    Currency,
    Percentage,
    Count,
}

impl ValueFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueFormat::Currency => "currency",
            ValueFormat::Percentage => "percentage",
            ValueFormat::Count => "count",
        }
    }

    /// Render a value as a dashboard label
    ///
    /// Currency: "$1.2M", "$850K", "$950"
    /// Percentage: "12.5%"
    /// Count: "1,234"
    pub fn display(&self, value: f64) -> String {
        match self {
            ValueFormat::Currency => {
                let sign = if value < 0.0 { "-" } else { "" };
                let abs = value.abs();
                // Thresholds sit where the lower unit would round up to 1000
                if abs >= 999_500.0 {
                    format!("{}${:.1}M", sign, abs / 1_000_000.0)
                } else if abs >= 999.5 {
                    format!("{}${:.0}K", sign, abs / 1_000.0)
                } else {
                    format!("{}${:.0}", sign, abs)
                }
            }
            ValueFormat::Percentage => format!("{:.1}%", value),
            ValueFormat::Count => group_thousands(value.round() as i64),
        }
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

impl FromStr for ValueFormat {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize_label(s).as_str() {
            "currency" => Ok(ValueFormat::Currency),
            "percentage" => Ok(ValueFormat::Percentage),
            "count" => Ok(ValueFormat::Count),
            _ => Err(AnalyticsError::unrecognized("value format", s)),
        }
    }
}

impl TryFrom<String> for ValueFormat {
    type Error = AnalyticsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// STATUS TAG (assigned by the data source, never derived here)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StatusTag {
    Positive,
    Negative,
    Warning,
    Neutral,
}

impl StatusTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTag::Positive => "positive",
            StatusTag::Negative => "negative",
            StatusTag::Warning => "warning",
            StatusTag::Neutral => "neutral",
        }
    }
}

impl FromStr for StatusTag {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize_label(s).as_str() {
            "positive" => Ok(StatusTag::Positive),
            "negative" => Ok(StatusTag::Negative),
            "warning" => Ok(StatusTag::Warning),
            "neutral" => Ok(StatusTag::Neutral),
            _ => Err(AnalyticsError::unrecognized("metric status", s)),
        }
    }
}

impl TryFrom<String> for StatusTag {
    type Error = AnalyticsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// METRIC SAMPLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Metric name (e.g. "Capital Raised", "Avg IRR")
    pub name: String,
    pub value: f64,
    pub target: f64,
    pub previous_period: f64,
    pub format: ValueFormat,
    pub status: StatusTag,
}

impl MetricSample {
    pub fn new(name: &str, value: f64, target: f64, previous_period: f64, format: ValueFormat) -> Self {
        MetricSample {
            name: name.to_string(),
            value,
            target,
            previous_period,
            format,
            status: StatusTag::Neutral,
        }
    }

    pub fn with_status(mut self, status: StatusTag) -> Self {
        self.status = status;
        self
    }
}

// ============================================================================
// MONTHLY RAISE SAMPLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRaiseSample {
    /// Calendar month label (e.g. "Jan", "2024-03")
    pub month: String,
    pub actual: f64,
    pub target: f64,

    /// Projection for months not yet realized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<f64>,
}

impl MonthlyRaiseSample {
    pub fn new(month: &str, actual: f64, target: f64) -> Self {
        MonthlyRaiseSample {
            month: month.to_string(),
            actual,
            target,
            forecast: None,
        }
    }

    pub fn with_forecast(mut self, forecast: f64) -> Self {
        self.forecast = Some(forecast);
        self
    }

    /// A month without a forecast has already happened
    pub fn is_realized(&self) -> bool {
        self.forecast.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_display() {
        assert_eq!(ValueFormat::Currency.display(1_200_000.0), "$1.2M");
        assert_eq!(ValueFormat::Currency.display(850_000.0), "$850K");
        assert_eq!(ValueFormat::Currency.display(950.0), "$950");
        assert_eq!(ValueFormat::Currency.display(-2_500_000.0), "-$2.5M");
    }

    #[test]
    fn test_currency_display_carries_into_next_unit() {
        // Values that would print as "$1000K" or "$1000" move up a unit
        assert_eq!(ValueFormat::Currency.display(999_950.0), "$1.0M");
        assert_eq!(ValueFormat::Currency.display(999_600.0), "$1.0M");
        assert_eq!(ValueFormat::Currency.display(-999_600.0), "-$1.0M");
        assert_eq!(ValueFormat::Currency.display(999.7), "$1K");

        // Just below the carry point the lower unit stays
        assert_eq!(ValueFormat::Currency.display(999_400.0), "$999K");
        assert_eq!(ValueFormat::Currency.display(999.4), "$999");
        println!("✅ Currency labels never show 1000 of a unit");
    }

    #[test]
    fn test_percentage_and_count_display() {
        assert_eq!(ValueFormat::Percentage.display(12.5), "12.5%");
        assert_eq!(ValueFormat::Percentage.display(87.0), "87.0%");
        assert_eq!(ValueFormat::Count.display(1234.0), "1,234");
        assert_eq!(ValueFormat::Count.display(1_000_000.0), "1,000,000");
        assert_eq!(ValueFormat::Count.display(999.0), "999");
        assert_eq!(ValueFormat::Count.display(-4321.0), "-4,321");
    }

    #[test]
    fn test_tags_parse_and_reject() {
        assert_eq!("Currency".parse::<ValueFormat>(), Ok(ValueFormat::Currency));
        assert_eq!("warning".parse::<StatusTag>(), Ok(StatusTag::Warning));
        assert!("ratio".parse::<ValueFormat>().is_err());
        assert!("critical".parse::<StatusTag>().is_err());
    }

    #[test]
    fn test_metric_sample_deserialize() {
        let json = r#"{
            "name": "Capital Raised",
            "value": 42000000.0,
            "target": 50000000.0,
            "previous_period": 35000000.0,
            "format": "currency",
            "status": "positive"
        }"#;
        let metric: MetricSample = serde_json::from_str(json).unwrap();

        assert_eq!(metric.format, ValueFormat::Currency);
        assert_eq!(metric.status, StatusTag::Positive);
    }

    #[test]
    fn test_monthly_sample_realized() {
        let past = MonthlyRaiseSample::new("Jan", 1_000_000.0, 1_200_000.0);
        let future = MonthlyRaiseSample::new("Dec", 0.0, 1_200_000.0).with_forecast(1_100_000.0);

        assert!(past.is_realized());
        assert!(!future.is_realized());
    }
}
