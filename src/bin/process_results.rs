use dtlz_analysis::aggregator::{run_analysis, AnalysisConfig};

/// Aggregates every configured result file into `summary.csv` and prints
/// the per-configuration completeness report.
fn main() -> std::io::Result<()> {
    let config = AnalysisConfig::default();

    run_analysis(&config)?;

    Ok(())
}
