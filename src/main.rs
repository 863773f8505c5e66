use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use lp_analytics::{AnalyticsConfig, DashboardReport, Snapshot, VERSION};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("report") => {
            let snapshot_path = args.get(2).context("missing snapshot path")?;
            run_report(Path::new(snapshot_path), args.get(3).map(Path::new))?;
        }
        Some("summary") => {
            let snapshot_path = args.get(2).context("missing snapshot path")?;
            run_summary(Path::new(snapshot_path), args.get(3).map(Path::new))?;
        }
        _ => print_usage(),
    }

    Ok(())
}

fn build(snapshot_path: &Path, config_path: Option<&Path>) -> Result<DashboardReport> {
    let config = match config_path {
        Some(path) => AnalyticsConfig::from_file(path)?,
        None => AnalyticsConfig::default(),
    };
    let snapshot = Snapshot::from_json_file(snapshot_path)?;

    DashboardReport::build(&snapshot, &config)
}

/// Full report as pretty JSON on stdout
fn run_report(snapshot_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let report = build(snapshot_path, config_path)?;
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}

/// One-line summary on stdout
fn run_summary(snapshot_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let report = build(snapshot_path, config_path)?;
    println!("{}", report.summary());
    Ok(())
}

fn print_usage() {
    eprintln!("lp-analytics {}", VERSION);
    eprintln!("Usage:");
    eprintln!("  lp-analytics report  <snapshot.json> [config.json]   Print the dashboard report as JSON");
    eprintln!("  lp-analytics summary <snapshot.json> [config.json]   Print a one-line summary");
}
