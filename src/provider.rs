// 📦 Data Provider - where the aggregators get their records
//
// The dashboard's datasets are injected through DataProvider so the
// aggregators can run against any fixture. Snapshot is the immutable,
// in-memory implementation; it loads from JSON, and the flat record types
// also load from CSV.

use crate::entities::{
    CapitalSourceEntry, Commitment, Deal, Insight, Investor, MetricSample, MonthlyRaiseSample,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

// ============================================================================
// PROVIDER TRAIT
// ============================================================================

pub trait DataProvider {
    fn investors(&self) -> Result<Vec<Investor>>;
    fn commitments(&self) -> Result<Vec<Commitment>>;
    fn deals(&self) -> Result<Vec<Deal>>;
    fn metrics(&self) -> Result<Vec<MetricSample>>;
    fn monthly_raises(&self) -> Result<Vec<MonthlyRaiseSample>>;
    fn insights(&self) -> Result<Vec<Insight>>;
    fn capital_sources(&self) -> Result<Vec<CapitalSourceEntry>>;

    /// Read every collection once into a single consistent Snapshot
    fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            investors: self.investors().context("Failed to read investors")?,
            commitments: self.commitments().context("Failed to read commitments")?,
            deals: self.deals().context("Failed to read deals")?,
            metrics: self.metrics().context("Failed to read metrics")?,
            monthly_raises: self.monthly_raises().context("Failed to read monthly raises")?,
            insights: self.insights().context("Failed to read insights")?,
            capital_sources: self.capital_sources().context("Failed to read capital sources")?,
        })
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Immutable dataset; missing collections default to empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub investors: Vec<Investor>,
    pub commitments: Vec<Commitment>,
    pub deals: Vec<Deal>,
    pub metrics: Vec<MetricSample>,
    pub monthly_raises: Vec<MonthlyRaiseSample>,
    pub insights: Vec<Insight>,
    pub capital_sources: Vec<CapitalSourceEntry>,
}

impl Snapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse snapshot JSON")
    }

    /// Load a snapshot from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read snapshot file: {:?}", path.as_ref()))?;

        Snapshot::from_json_str(&content)
    }

    pub fn record_count(&self) -> usize {
        self.investors.len()
            + self.commitments.len()
            + self.deals.len()
            + self.metrics.len()
            + self.monthly_raises.len()
            + self.insights.len()
            + self.capital_sources.len()
    }
}

impl DataProvider for Snapshot {
    fn investors(&self) -> Result<Vec<Investor>> {
        Ok(self.investors.clone())
    }

    fn commitments(&self) -> Result<Vec<Commitment>> {
        Ok(self.commitments.clone())
    }

    fn deals(&self) -> Result<Vec<Deal>> {
        Ok(self.deals.clone())
    }

    fn metrics(&self) -> Result<Vec<MetricSample>> {
        Ok(self.metrics.clone())
    }

    fn monthly_raises(&self) -> Result<Vec<MonthlyRaiseSample>> {
        Ok(self.monthly_raises.clone())
    }

    fn insights(&self) -> Result<Vec<Insight>> {
        Ok(self.insights.clone())
    }

    fn capital_sources(&self) -> Result<Vec<CapitalSourceEntry>> {
        Ok(self.capital_sources.clone())
    }

    fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.clone())
    }
}

// ============================================================================
// CSV LOADERS
// ============================================================================

/// Rows of `month,actual,target,forecast`; an empty forecast cell is None
pub fn load_monthly_raises_csv<R: Read>(reader: R) -> Result<Vec<MonthlyRaiseSample>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut samples = Vec::new();
    for result in rdr.deserialize() {
        let sample: MonthlyRaiseSample = result.context("Failed to deserialize monthly raise row")?;
        samples.push(sample);
    }

    Ok(samples)
}

/// Rows of `name,amount,status`
pub fn load_capital_sources_csv<R: Read>(reader: R) -> Result<Vec<CapitalSourceEntry>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        let entry: CapitalSourceEntry = result.context("Failed to deserialize capital source row")?;
        entries.push(entry);
    }

    Ok(entries)
}

pub fn load_monthly_raises_path(path: &Path) -> Result<Vec<MonthlyRaiseSample>> {
    let file = fs::File::open(path).with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    load_monthly_raises_csv(file)
}

pub fn load_capital_sources_path(path: &Path) -> Result<Vec<CapitalSourceEntry>> {
    let file = fs::File::open(path).with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    load_capital_sources_csv(file)
}

// ============================================================================
// TESTS
// ============================================================================
