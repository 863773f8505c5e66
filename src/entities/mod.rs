// Record Model - shared entity definitions
//
// Every entity is an immutable input to the aggregators:
// - Optional source fields are explicit Option<T>
// - Tag fields are closed enums; unknown labels fail with UnrecognizedCategory
// - Nothing in the analytics layer mutates a record

pub mod investor;
pub mod commitment;
pub mod metric;
pub mod insight;
pub mod capital_source;

pub use investor::Investor;
pub use commitment::{Commitment, CommitmentStatus, Deal};
pub use metric::{MetricSample, MonthlyRaiseSample, StatusTag, ValueFormat};
pub use insight::{Impact, Insight, InsightCategory};
pub use capital_source::CapitalSourceEntry;

/// Lowercase a label and fold spaces/hyphens to underscores.
///
/// "Soft Commit", "soft-commit" and "soft_commit" all normalize the same way.
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}
