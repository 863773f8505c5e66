// 🥧 Capital Source Aggregator - each source's share of the raise
//
//   percentage = round(amount / total × 100)     (half rounds up)
//
// Each entry is rounded on its own, so shares may sum to 99 or 101. That
// drift is reported, not hidden. LargestRemainder is the only policy that
// changes it and must be chosen explicitly.

use crate::entities::CapitalSourceEntry;
use crate::error::{AnalyticsError, AnalyticsResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// ROUNDING POLICY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Round every entry on its own; the sum may drift from 100
    #[default]
    Independent,

    /// Floor every entry, then hand the missing points to the largest
    /// fractional remainders (ties go to the earlier entry). Sums to 100 and
    /// never pushes a share below its floor.
    LargestRemainder,
}

// ============================================================================
// BREAKDOWN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceShare {
    pub name: String,
    pub amount: f64,
    pub status: String,

    /// Whole-number share of total; None when total is 0
    pub percentage: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSubtotal {
    pub status: String,
    pub amount: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalBreakdown {
    pub total: f64,
    pub per_entry: Vec<SourceShare>,
    pub policy: RoundingPolicy,
}

impl CapitalBreakdown {
    /// All percentages, or DivisionUndefined when total is 0
    pub fn percentages(&self) -> AnalyticsResult<Vec<i64>> {
        self.per_entry
            .iter()
            .map(|s| {
                s.percentage
                    .ok_or(AnalyticsError::DivisionUndefined { ratio: "capital source share" })
            })
            .collect()
    }

    /// Sum of percentages minus 100; None when percentages are undefined
    /// or there are no entries
    pub fn rounding_drift(&self) -> Option<i64> {
        if self.per_entry.is_empty() {
            return None;
        }
        let shares = self.percentages().ok()?;
        Some(shares.iter().sum::<i64>() - 100)
    }

    /// Amount and count per status label, in first-encounter order
    pub fn by_status(&self) -> Vec<StatusSubtotal> {
        let mut subtotals: Vec<StatusSubtotal> = Vec::new();

        for share in &self.per_entry {
            match subtotals.iter_mut().find(|s| s.status == share.status) {
                Some(existing) => {
                    existing.amount += share.amount;
                    existing.count += 1;
                }
                None => subtotals.push(StatusSubtotal {
                    status: share.status.clone(),
                    amount: share.amount,
                    count: 1,
                }),
            }
        }

        subtotals
    }

    pub fn summary(&self) -> String {
        let shares: Vec<String> = self
            .per_entry
            .iter()
            .map(|s| match s.percentage {
                Some(p) => format!("{} {}%", s.name, p),
                None => format!("{} n/a", s.name),
            })
            .collect();
        format!("Total ${:.0}: {}", self.total, shares.join(", "))
    }
}

// ============================================================================
// AGGREGATOR
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CapitalSourceAggregator {
    pub policy: RoundingPolicy,
}

impl CapitalSourceAggregator {
    pub fn new() -> Self {
        CapitalSourceAggregator {
            policy: RoundingPolicy::Independent,
        }
    }

    pub fn with_policy(policy: RoundingPolicy) -> Self {
        CapitalSourceAggregator { policy }
    }

    pub fn aggregate(&self, entries: &[CapitalSourceEntry]) -> CapitalBreakdown {
        let total: f64 = entries.iter().map(|e| e.amount).sum();

        if total == 0.0 && !entries.is_empty() {
            debug!(entries = entries.len(), "capital source total is zero, shares undefined");
        }

        let percentages = match self.policy {
            RoundingPolicy::Independent => entries
                .iter()
                .map(|e| share_percentage(e.amount, total))
                .collect(),
            RoundingPolicy::LargestRemainder => largest_remainder_shares(entries, total),
        };

        let per_entry: Vec<SourceShare> = entries
            .iter()
            .zip(percentages)
            .map(|(e, percentage)| SourceShare {
                name: e.name.clone(),
                amount: e.amount,
                status: e.status.clone(),
                percentage,
            })
            .collect();

        CapitalBreakdown {
            total,
            per_entry,
            policy: self.policy,
        }
    }
}

/// Exact share before rounding. Scaling first keeps halves like 29/200 exact.
fn raw_share(amount: f64, total: f64) -> f64 {
    amount * 100.0 / total
}

/// Round-half-up whole percentage; None when total is 0
fn share_percentage(amount: f64, total: f64) -> Option<i64> {
    if total == 0.0 {
        return None;
    }
    Some((raw_share(amount, total) + 0.5).floor() as i64)
}

/// Hamilton apportionment of 100 points; every share is None when total is 0
fn largest_remainder_shares(entries: &[CapitalSourceEntry], total: f64) -> Vec<Option<i64>> {
    if total == 0.0 {
        return vec![None; entries.len()];
    }

    let raw: Vec<f64> = entries.iter().map(|e| raw_share(e.amount, total)).collect();
    let mut shares: Vec<i64> = raw.iter().map(|r| r.floor() as i64).collect();

    let missing = (100 - shares.iter().sum::<i64>()).max(0) as usize;

    let mut by_remainder: Vec<usize> = (0..raw.len()).collect();
    // Stable sort keeps the earlier entry first on equal remainders
    by_remainder.sort_by(|&a, &b| {
        let ra = raw[a] - raw[a].floor();
        let rb = raw[b] - raw[b].floor();
        rb.total_cmp(&ra)
    });

    for &i in by_remainder.iter().take(missing) {
        shares[i] += 1;
    }

    shares.into_iter().map(Some).collect()
}

/// Breakdown with independent rounding (no drift correction)
pub fn aggregate_capital_sources(entries: &[CapitalSourceEntry]) -> CapitalBreakdown {
    CapitalSourceAggregator::new().aggregate(entries)
}

// ============================================================================
// TESTS
// ============================================================================
