use dualsolve_core::config::Config;
use dualsolve_core::record::{points_table, read_result, results_table};
use dualsolve_core::solver::PerVariant;
use dualsolve_core::stats::{metric_histograms, scan_directory, summarize, Histogram, Summary};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

/// Statistics and LaTeX tables over dual-solve result records.
#[derive(Debug, Parser)]
#[command(name = "dualsolve-report")]
#[command(version)]
#[command(about = "Aggregate and tabulate dual-solve result records")]
struct Cli {
    /// JSON config file; defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Mean and spread of every metric in a result directory
    Summary { dir: PathBuf },
    /// Bin one metric per variant
    Histogram { dir: PathBuf, metric: String },
    /// LaTeX rows for one result record
    Tables { file: PathBuf },
}

#[derive(Serialize)]
struct SummaryReport {
    files: usize,
    skipped: Vec<String>,
    metrics: BTreeMap<String, PerVariant<Option<Summary>>>,
}

#[derive(Serialize)]
struct HistogramReport<'a> {
    metric: &'a str,
    bins: usize,
    histograms: PerVariant<Histogram>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let body = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", body);
    Ok(())
}

fn summary(config: &Config, dir: &Path) -> Result<(), String> {
    let series = scan_directory(dir, &config.aggregate.excluded_metrics).map_err(|e| e.to_string())?;
    info!(files = series.files.len(), skipped = series.skipped.len(), "aggregated results");
    print_json(&SummaryReport {
        files: series.files.len(),
        skipped: series.skipped.iter().map(|s| s.path.display().to_string()).collect(),
        metrics: summarize(&series),
    })
}

fn histogram(config: &Config, dir: &Path, metric: &str) -> Result<(), String> {
    let series = scan_directory(dir, &config.aggregate.excluded_metrics).map_err(|e| e.to_string())?;
    let bins = config.aggregate.histogram_bins;
    let histograms = metric_histograms(&series, metric, bins).map_err(|e| e.to_string())?;
    print_json(&HistogramReport { metric, bins, histograms })
}

fn tables(file: &Path) -> Result<(), String> {
    let record = read_result(file).map_err(|e| e.to_string())?;
    for row in points_table(&record) {
        println!("{}", row);
    }
    println!();
    for row in results_table(&record) {
        println!("{}", row);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), String> {
    let config = match &cli.config {
        Some(path) => Config::load(path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };

    match &cli.command {
        Command::Summary { dir } => summary(&config, dir),
        Command::Histogram { dir, metric } => histogram(&config, dir, metric),
        Command::Tables { file } => tables(file),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt::init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
