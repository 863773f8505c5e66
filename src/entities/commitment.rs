// 🤝 Commitment Entity - an investor's pledge toward a deal
//
// Lifecycle:
//   Interested → Reviewing → {SoftCommit | Declined} → HardCommit → Funded
//
// Declined is terminal and sits outside the progression. Records come from
// outside, so nothing here enforces transition legality.

use crate::error::AnalyticsError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// COMMITMENT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum CommitmentStatus {
    Interested,
    Reviewing,
    SoftCommit,
    HardCommit,
    Funded,
    Declined,
}

impl CommitmentStatus {
    /// All statuses in lifecycle order, Declined last
    pub const ALL: [CommitmentStatus; 6] = [
        CommitmentStatus::Interested,
        CommitmentStatus::Reviewing,
        CommitmentStatus::SoftCommit,
        CommitmentStatus::HardCommit,
        CommitmentStatus::Funded,
        CommitmentStatus::Declined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentStatus::Interested => "interested",
            CommitmentStatus::Reviewing => "reviewing",
            CommitmentStatus::SoftCommit => "soft_commit",
            CommitmentStatus::HardCommit => "hard_commit",
            CommitmentStatus::Funded => "funded",
            CommitmentStatus::Declined => "declined",
        }
    }

    /// Position in the progression (0-based); None for Declined
    pub fn stage(&self) -> Option<u8> {
        match self {
            CommitmentStatus::Interested => Some(0),
            CommitmentStatus::Reviewing => Some(1),
            CommitmentStatus::SoftCommit => Some(2),
            CommitmentStatus::HardCommit => Some(3),
            CommitmentStatus::Funded => Some(4),
            CommitmentStatus::Declined => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CommitmentStatus::Funded | CommitmentStatus::Declined)
    }

    /// Soft commit or further along (and not declined)
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            CommitmentStatus::SoftCommit | CommitmentStatus::HardCommit | CommitmentStatus::Funded
        )
    }

    /// Hard commit or funded
    pub fn is_binding(&self) -> bool {
        matches!(self, CommitmentStatus::HardCommit | CommitmentStatus::Funded)
    }
}

impl fmt::Display for CommitmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitmentStatus {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize_label(s).as_str() {
            "interested" => Ok(CommitmentStatus::Interested),
            "reviewing" => Ok(CommitmentStatus::Reviewing),
            "soft_commit" => Ok(CommitmentStatus::SoftCommit),
            "hard_commit" => Ok(CommitmentStatus::HardCommit),
            "funded" => Ok(CommitmentStatus::Funded),
            "declined" => Ok(CommitmentStatus::Declined),
            _ => Err(AnalyticsError::unrecognized("commitment status", s)),
        }
    }
}

impl TryFrom<String> for CommitmentStatus {
    type Error = AnalyticsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// COMMITMENT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
    pub id: String,
    pub investor_id: String,
    pub deal_id: String,

    /// Pledged amount (USD)
    pub amount: f64,

    pub status: CommitmentStatus,

    /// When the investor committed (absent until a commit happens)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment_date: Option<NaiveDate>,

    /// When the money arrived (absent until funded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_date: Option<NaiveDate>,

    #[serde(default)]
    pub notes: String,
}

impl Commitment {
    pub fn new(id: &str, investor_id: &str, deal_id: &str, amount: f64, status: CommitmentStatus) -> Self {
        Commitment {
            id: id.to_string(),
            investor_id: investor_id.to_string(),
            deal_id: deal_id.to_string(),
            amount,
            status,
            commitment_date: None,
            funding_date: None,
            notes: String::new(),
        }
    }
}

// ============================================================================
// DEAL ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub name: String,

    /// Market label (e.g. "Denver")
    #[serde(default)]
    pub location: String,

    /// Capital the sponsor is raising for this deal (USD)
    pub target_raise: f64,
}

impl Deal {
    pub fn new(id: &str, name: &str, location: &str, target_raise: f64) -> Self {
        Deal {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            target_raise,
        }
    }
}
