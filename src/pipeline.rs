// 🚰 Commitment Pipeline - per-deal totals by lifecycle status
//
// Any status may show up at any time. Totals are plain sums per status; no
// transition order is assumed.
//
//   soft_committed = SoftCommit + HardCommit + Funded
//   hard_committed = HardCommit + Funded

use crate::entities::{Commitment, CommitmentStatus, Deal};
use crate::error::{checked_percentage, require_defined, round_one_decimal, AnalyticsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

// ============================================================================
// PIPELINE SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTotal {
    pub status: CommitmentStatus,
    pub count: usize,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub deal_id: String,
    pub deal_name: String,
    pub target_raise: f64,

    /// One row per status, lifecycle order, Declined last
    pub by_status: Vec<StatusTotal>,

    pub soft_committed: f64,
    pub hard_committed: f64,
    pub funded: f64,
    pub declined: f64,

    /// Funded / target raise as a percentage; None when target raise is 0
    pub funded_progress: Option<f64>,
}

impl PipelineSummary {
    pub fn status_total(&self, status: CommitmentStatus) -> Option<&StatusTotal> {
        self.by_status.iter().find(|row| row.status == status)
    }

    pub fn funded_progress(&self) -> AnalyticsResult<f64> {
        require_defined(self.funded_progress, "funded progress")
    }

    pub fn commitment_count(&self) -> usize {
        self.by_status.iter().map(|s| s.count).sum()
    }

    pub fn summary(&self) -> String {
        let progress = match self.funded_progress {
            Some(p) => format!("{:.1}%", p),
            None => "n/a".to_string(),
        };
        format!(
            "{}: {} commitments, ${:.0} soft, ${:.0} hard, ${:.0} funded ({} of target)",
            self.deal_name,
            self.commitment_count(),
            self.soft_committed,
            self.hard_committed,
            self.funded,
            progress
        )
    }
}

/// Summarize the commitments that reference `deal`
pub fn summarize_pipeline(deal: &Deal, commitments: &[Commitment]) -> PipelineSummary {
    let mut by_status: Vec<StatusTotal> = CommitmentStatus::ALL
        .iter()
        .map(|status| StatusTotal {
            status: *status,
            count: 0,
            amount: 0.0,
        })
        .collect();

    for commitment in commitments.iter().filter(|c| c.deal_id == deal.id) {
        if let Some(row) = by_status.iter_mut().find(|row| row.status == commitment.status) {
            row.count += 1;
            row.amount += commitment.amount;
        }
    }

    let amount_where = |pred: fn(&CommitmentStatus) -> bool| -> f64 {
        by_status
            .iter()
            .filter(|row| pred(&row.status))
            .map(|row| row.amount)
            .sum()
    };

    let soft_committed = amount_where(CommitmentStatus::is_committed);
    let hard_committed = amount_where(CommitmentStatus::is_binding);
    let funded = amount_where(|s| *s == CommitmentStatus::Funded);
    let declined = amount_where(|s| *s == CommitmentStatus::Declined);

    PipelineSummary {
        deal_id: deal.id.clone(),
        deal_name: deal.name.clone(),
        target_raise: deal.target_raise,
        by_status,
        soft_committed,
        hard_committed,
        funded,
        declined,
        funded_progress: checked_percentage(funded, deal.target_raise).map(round_one_decimal),
    }
}

// ============================================================================
// ALL DEALS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOverview {
    /// One summary per deal, in deal order
    pub deals: Vec<PipelineSummary>,

    /// Commitments whose deal_id matches no known deal
    pub unmatched_commitments: usize,
}

impl PipelineOverview {
    pub fn total_funded(&self) -> f64 {
        self.deals.iter().map(|d| d.funded).sum()
    }
}

pub fn summarize_all(deals: &[Deal], commitments: &[Commitment]) -> PipelineOverview {
    let known: HashSet<&str> = deals.iter().map(|d| d.id.as_str()).collect();

    let unmatched_commitments = commitments
        .iter()
        .filter(|c| !known.contains(c.deal_id.as_str()))
        .inspect(|c| debug!(commitment = %c.id, deal = %c.deal_id, "commitment references unknown deal"))
        .count();

    PipelineOverview {
        deals: deals.iter().map(|d| summarize_pipeline(d, commitments)).collect(),
        unmatched_commitments,
    }
}

// ============================================================================
// TESTS
// ============================================================================
