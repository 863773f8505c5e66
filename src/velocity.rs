// 📈 Velocity Tracker - monthly capital raised vs target vs forecast
//
//   progress_ratio = 100 × Σ actual / Σ target      (one decimal)
//   y_axis_max     = 1.1 × max(actual, target, forecast) over all months
//
// A zero denominator leaves the ratio as None. Callers decide how to show it.

use crate::entities::MonthlyRaiseSample;
use crate::error::{checked_percentage, require_defined, round_one_decimal, AnalyticsResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// VELOCITY REPORT
// ============================================================================

/// One chart row, passed through unmodified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPoint {
    pub month: String,
    pub actual: f64,
    pub target: f64,
    pub forecast: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityReport {
    pub cumulative_actual: f64,
    pub cumulative_target: f64,

    /// Σ actual / Σ target as a percentage; None when Σ target is 0
    pub progress_ratio: Option<f64>,

    pub per_month: Vec<MonthPoint>,

    /// Chart upper bound with headroom
    pub y_axis_max: f64,

    // ========================================================================
    // GOAL TRACKING (against the overall raise target)
    // ========================================================================
    pub target_total: f64,

    /// Σ actual / target_total as a percentage; None when target_total is 0
    pub goal_progress: Option<f64>,

    /// Amount still needed to reach target_total (never negative)
    pub remaining_to_goal: f64,

    /// Mean actual over realized months (those without a forecast)
    pub average_monthly_actual: Option<f64>,

    /// Months needed at the average pace; 0 once the goal is met, None
    /// without a positive goal
    pub months_to_goal: Option<u32>,

    /// Σ forecast over months that carry one
    pub forecast_total: f64,
}

impl VelocityReport {
    pub fn progress_ratio(&self) -> AnalyticsResult<f64> {
        require_defined(self.progress_ratio, "velocity progress ratio")
    }

    pub fn goal_progress(&self) -> AnalyticsResult<f64> {
        require_defined(self.goal_progress, "goal progress")
    }

    pub fn is_on_pace(&self) -> bool {
        self.progress_ratio.map(|r| r >= 100.0).unwrap_or(false)
    }

    pub fn summary(&self) -> String {
        let ratio = match self.progress_ratio {
            Some(r) => format!("{:.1}%", r),
            None => "n/a".to_string(),
        };
        format!(
            "Raised ${:.0} of ${:.0} targeted ({}) over {} months, ${:.0} remaining to goal",
            self.cumulative_actual,
            self.cumulative_target,
            ratio,
            self.per_month.len(),
            self.remaining_to_goal
        )
    }
}

// ============================================================================
// VELOCITY TRACKER
// ============================================================================

#[derive(Debug, Clone)]
pub struct VelocityTracker {
    /// Multiplier over the largest observed value for the chart Y-axis
    pub y_axis_headroom: f64,
}

impl VelocityTracker {
    pub fn new() -> Self {
        VelocityTracker { y_axis_headroom: 1.1 }
    }

    pub fn with_headroom(y_axis_headroom: f64) -> Self {
        VelocityTracker { y_axis_headroom }
    }

    pub fn track(&self, samples: &[MonthlyRaiseSample], target_total: f64) -> VelocityReport {
        let cumulative_actual: f64 = samples.iter().map(|s| s.actual).sum();
        let cumulative_target: f64 = samples.iter().map(|s| s.target).sum();
        let forecast_total: f64 = samples.iter().filter_map(|s| s.forecast).sum();

        let progress_ratio = checked_percentage(cumulative_actual, cumulative_target).map(round_one_decimal);
        if progress_ratio.is_none() {
            debug!(months = samples.len(), "cumulative target is zero, progress ratio undefined");
        }

        let per_month = samples
            .iter()
            .map(|s| MonthPoint {
                month: s.month.clone(),
                actual: s.actual,
                target: s.target,
                forecast: s.forecast,
            })
            .collect();

        let max_value = samples
            .iter()
            .flat_map(|s| [Some(s.actual), Some(s.target), s.forecast])
            .flatten()
            .fold(0.0_f64, f64::max);

        let goal_progress = checked_percentage(cumulative_actual, target_total).map(round_one_decimal);
        let remaining_to_goal = (target_total - cumulative_actual).max(0.0);

        let realized: Vec<f64> = samples
            .iter()
            .filter(|s| s.is_realized())
            .map(|s| s.actual)
            .collect();
        let average_monthly_actual = if realized.is_empty() {
            None
        } else {
            Some(realized.iter().sum::<f64>() / realized.len() as f64)
        };

        let months_to_goal = if target_total <= 0.0 {
            None
        } else if remaining_to_goal == 0.0 {
            Some(0)
        } else {
            average_monthly_actual
                .filter(|avg| *avg > 0.0)
                .map(|avg| (remaining_to_goal / avg).ceil() as u32)
        };

        VelocityReport {
            cumulative_actual,
            cumulative_target,
            progress_ratio,
            per_month,
            y_axis_max: max_value * self.y_axis_headroom,
            target_total,
            goal_progress,
            remaining_to_goal,
            average_monthly_actual,
            months_to_goal,
            forecast_total,
        }
    }
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Track velocity with the default 10% chart headroom
pub fn track_velocity(samples: &[MonthlyRaiseSample], target_total: f64) -> VelocityReport {
    VelocityTracker::new().track(samples, target_total)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_year() -> Vec<MonthlyRaiseSample> {
        vec![
            MonthlyRaiseSample::new("Jan", 2_000_000.0, 2_500_000.0),
            MonthlyRaiseSample::new("Feb", 3_000_000.0, 2_500_000.0),
            MonthlyRaiseSample::new("Mar", 2_500_000.0, 2_500_000.0),
            MonthlyRaiseSample::new("Apr", 0.0, 2_500_000.0).with_forecast(4_000_000.0),
        ]
    }

    #[test]
    fn test_cumulative_totals_and_ratio() {
        let report = track_velocity(&sample_year(), 12_000_000.0);

        assert_eq!(report.cumulative_actual, 7_500_000.0);
        assert_eq!(report.cumulative_target, 10_000_000.0);
        assert_eq!(report.progress_ratio, Some(75.0));
        assert_eq!(report.progress_ratio().unwrap(), 75.0);

        println!("✅ {}", report.summary());
    }

    #[test]
    fn test_ratio_rounded_to_one_decimal() {
        let samples = vec![
            MonthlyRaiseSample::new("Jan", 1.0, 3.0),
            MonthlyRaiseSample::new("Feb", 1.0, 0.0),
        ];

        let report = track_velocity(&samples, 0.0);

        // 2 / 3 = 66.666..%
        assert_eq!(report.progress_ratio, Some(66.7));
    }

    #[test]
    fn test_zero_target_ratio_undefined() {
        let samples = vec![MonthlyRaiseSample::new("Jan", 500_000.0, 0.0)];

        let report = track_velocity(&samples, 0.0);

        assert_eq!(report.progress_ratio, None);
        assert!(report.progress_ratio().is_err());
        assert_eq!(report.goal_progress, None);
        assert!(!report.is_on_pace());
        assert!(report.summary().contains("n/a"));
    }

    #[test]
    fn test_no_goal_means_no_months_to_goal() {
        let samples = sample_year();

        let unset = track_velocity(&samples, 0.0);
        assert_eq!(unset.goal_progress, None);
        assert_eq!(unset.months_to_goal, None);

        let negative = track_velocity(&samples, -1_000_000.0);
        assert_eq!(negative.months_to_goal, None);

        println!("✅ No goal: months_to_goal undefined, not 0");
    }

    #[test]
    fn test_cumulative_actual_independent_of_order() {
        let forward = sample_year();
        let mut reversed = sample_year();
        reversed.reverse();

        let a = track_velocity(&forward, 0.0);
        let b = track_velocity(&reversed, 0.0);

        assert_eq!(a.cumulative_actual, b.cumulative_actual);
        assert_eq!(a.cumulative_target, b.cumulative_target);
    }

    #[test]
    fn test_y_axis_includes_forecast() {
        let report = track_velocity(&sample_year(), 0.0);

        // Largest value is the April forecast
        assert!((report.y_axis_max - 4_400_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_per_month_passthrough() {
        let samples = sample_year();
        let report = track_velocity(&samples, 0.0);

        assert_eq!(report.per_month.len(), 4);
        assert_eq!(report.per_month[3].month, "Apr");
        assert_eq!(report.per_month[3].forecast, Some(4_000_000.0));
        assert_eq!(report.per_month[0].forecast, None);
        assert_eq!(report.per_month[1].actual, 3_000_000.0);
    }

    #[test]
    fn test_goal_tracking() {
        let report = track_velocity(&sample_year(), 12_000_000.0);

        assert_eq!(report.goal_progress, Some(62.5));
        assert_eq!(report.remaining_to_goal, 4_500_000.0);
        assert_eq!(report.average_monthly_actual, Some(2_500_000.0));
        assert_eq!(report.months_to_goal, Some(2));
        assert_eq!(report.forecast_total, 4_000_000.0);
    }

    #[test]
    fn test_goal_already_met() {
        let samples = vec![MonthlyRaiseSample::new("Jan", 5_000_000.0, 4_000_000.0)];
        let report = track_velocity(&samples, 4_000_000.0);

        assert_eq!(report.remaining_to_goal, 0.0);
        assert_eq!(report.months_to_goal, Some(0));
        assert!(report.is_on_pace());
    }

    #[test]
    fn test_empty_samples() {
        let report = track_velocity(&[], 1_000_000.0);

        assert_eq!(report.cumulative_actual, 0.0);
        assert_eq!(report.progress_ratio, None);
        assert!(report.per_month.is_empty());
        assert_eq!(report.y_axis_max, 0.0);
        assert_eq!(report.average_monthly_actual, None);
        assert_eq!(report.months_to_goal, None);
    }
}
