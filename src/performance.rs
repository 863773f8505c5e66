// 🎯 Performance Scorer - metric progress vs target
//
//   progress = value / target × 100
//   change   = (value − previous) / previous × 100
//
// Zero denominators leave the figure as None. The bar-friendly value is
// clamped to [0, 100]; the raw progress stays available for labels.

use crate::entities::{MetricSample, ValueFormat};
use crate::error::{checked_percentage, require_defined, AnalyticsResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// DIRECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Non-negative ⇒ Up
    pub fn from_sign(value: f64) -> Self {
        if value < 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

// ============================================================================
// PERFORMANCE SCORE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceScore {
    pub name: String,
    pub format: ValueFormat,

    /// Raw progress toward target (may exceed 100); None when target is 0
    pub progress: Option<f64>,

    /// Progress clamped to [0, 100] for bounded indicators
    pub clamped_progress: f64,

    /// Period-over-period change (%); None when the previous period is 0
    pub change: Option<f64>,

    pub direction: Direction,

    /// Value rendered with its format (e.g. "$42.0M")
    pub display_value: String,
}

impl PerformanceScore {
    pub fn progress(&self) -> AnalyticsResult<f64> {
        require_defined(self.progress, "metric progress")
    }

    pub fn change(&self) -> AnalyticsResult<f64> {
        require_defined(self.change, "period-over-period change")
    }

    pub fn meets_target(&self) -> bool {
        self.progress.map(|p| p >= 100.0).unwrap_or(false)
    }
}

/// Score a single metric
pub fn score_performance(metric: &MetricSample) -> PerformanceScore {
    let progress = checked_percentage(metric.value, metric.target);
    let change = checked_percentage(metric.value - metric.previous_period, metric.previous_period);

    if progress.is_none() || change.is_none() {
        debug!(metric = %metric.name, "metric has a zero denominator");
    }

    let clamped_progress = progress.map(|p| p.clamp(0.0, 100.0)).unwrap_or(0.0);

    let direction = match change {
        Some(c) => Direction::from_sign(c),
        None => Direction::from_sign(metric.value - metric.previous_period),
    };

    PerformanceScore {
        name: metric.name.clone(),
        format: metric.format,
        progress,
        clamped_progress,
        change,
        direction,
        display_value: metric.format.display(metric.value),
    }
}

// ============================================================================
// SCORECARD (many metrics)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    /// Scores in source order
    pub scores: Vec<PerformanceScore>,
    pub on_target_count: usize,
    pub below_target_count: usize,
    pub undefined_count: usize,
}

impl Scorecard {
    pub fn summary(&self) -> String {
        format!(
            "{} metrics: {} on target, {} below, {} undefined",
            self.scores.len(),
            self.on_target_count,
            self.below_target_count,
            self.undefined_count
        )
    }
}

/// Score every metric, keeping source order
pub fn score_metrics(metrics: &[MetricSample]) -> Scorecard {
    let scores: Vec<PerformanceScore> = metrics.iter().map(score_performance).collect();

    let on_target_count = scores.iter().filter(|s| s.meets_target()).count();
    let undefined_count = scores.iter().filter(|s| s.progress.is_none()).count();
    let below_target_count = scores.len() - on_target_count - undefined_count;

    Scorecard {
        scores,
        on_target_count,
        below_target_count,
        undefined_count,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;

    fn metric(value: f64, target: f64, previous: f64) -> MetricSample {
        MetricSample::new("Capital Raised", value, target, previous, ValueFormat::Currency)
    }

    #[test]
    fn test_progress_and_change() {
        let score = score_performance(&metric(42_000_000.0, 50_000_000.0, 35_000_000.0));

        assert!((score.progress.unwrap() - 84.0).abs() < 1e-9);
        assert!((score.clamped_progress - 84.0).abs() < 1e-9);
        assert!((score.change.unwrap() - 20.0).abs() < 1e-9);
        assert_eq!(score.direction, Direction::Up);
        assert_eq!(score.display_value, "$42.0M");
    }

    #[test]
    fn test_clamped_when_target_exceeded() {
        let score = score_performance(&metric(250.0, 100.0, 200.0));

        assert_eq!(score.progress, Some(250.0));
        assert_eq!(score.clamped_progress, 100.0);
        assert!(score.meets_target());
    }

    #[test]
    fn test_clamped_when_value_negative() {
        let score = score_performance(&metric(-10.0, 100.0, 5.0));

        assert!((score.progress.unwrap() + 10.0).abs() < 1e-9);
        assert_eq!(score.clamped_progress, 0.0);
        assert_eq!(score.direction, Direction::Down);
    }

    #[test]
    fn test_zero_target_progress_undefined() {
        let score = score_performance(&metric(10.0, 0.0, 5.0));

        assert_eq!(score.progress, None);
        assert_eq!(score.clamped_progress, 0.0);
        assert_eq!(
            score.progress().unwrap_err(),
            AnalyticsError::DivisionUndefined { ratio: "metric progress" }
        );
        assert!(score.change().is_ok());
    }

    #[test]
    fn test_zero_previous_change_undefined() {
        let score = score_performance(&metric(10.0, 20.0, 0.0));

        assert_eq!(score.change, None);
        assert!(score.change().is_err());
        // Falls back to the sign of value − previous
        assert_eq!(score.direction, Direction::Up);
    }

    #[test]
    fn test_flat_change_is_up() {
        let score = score_performance(&metric(50.0, 100.0, 50.0));

        assert_eq!(score.change, Some(0.0));
        assert_eq!(score.direction, Direction::Up);
    }

    #[test]
    fn test_negative_change_is_down() {
        let score = score_performance(&metric(40.0, 100.0, 50.0));

        assert!((score.change.unwrap() + 20.0).abs() < 1e-9);
        assert_eq!(score.direction, Direction::Down);
    }

    #[test]
    fn test_scorecard_counts() {
        let metrics = vec![
            metric(120.0, 100.0, 100.0),
            metric(80.0, 100.0, 100.0),
            metric(5.0, 0.0, 1.0),
            MetricSample::new("Active LPs", 148.0, 150.0, 131.0, ValueFormat::Count),
        ];

        let card = score_metrics(&metrics);

        assert_eq!(card.scores.len(), 4);
        assert_eq!(card.on_target_count, 1);
        assert_eq!(card.below_target_count, 2);
        assert_eq!(card.undefined_count, 1);
        assert_eq!(card.scores[3].name, "Active LPs");
        assert_eq!(card.scores[3].display_value, "148");

        println!("✅ {}", card.summary());
    }

    #[test]
    fn test_scorecard_empty() {
        let card = score_metrics(&[]);
        assert!(card.scores.is_empty());
        assert_eq!(card.on_target_count, 0);
    }
}
