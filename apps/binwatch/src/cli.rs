//! # CLI
//!
//! Command-line surface of binwatch. Every flag is optional; running the
//! binary bare performs the reference simulation (10 bins, 75% threshold).

use binwatch_core::{
    CollectionReport, ConfigError, Fleet, RandomSensor, ScriptedSensor, SimulationConfig,
};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "binwatch", author, version, about = "Smart-bin monitoring simulator")]
pub struct Cli {
    /// Number of bins to simulate
    #[arg(long, value_name = "N")]
    pub bins: Option<usize>,

    /// Fill level (percent) at or above which a bin is flagged for collection
    #[arg(long, value_name = "PERCENT", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: Option<u8>,

    /// PRNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON simulation config; explicit flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Replay these fill readings (comma separated) instead of random ones
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub readings: Option<Vec<i64>>,

    /// Print a final report in the given format
    #[arg(long, value_enum)]
    pub report: Option<ReportFormat>,

    /// Log filter used when RUST_LOG is unset
    #[arg(
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            bins: None,
            threshold: None,
            seed: None,
            config: None,
            readings: None,
            report: None,
            log_level: LevelFilter::INFO,
        }
    }
}

/// Output format of the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Startup failures. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("incorrect config file format in {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot serialize report: {0}")]
    Report(#[source] serde_json::Error),
}

// =============================================================================
// CONFIG
// =============================================================================

/// Load a config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<SimulationConfig, CliError> {
    let Some(path) = path else {
        return Ok(SimulationConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge the config file with explicit flags and validate the result.
pub fn resolve_config(cli: &Cli) -> Result<SimulationConfig, CliError> {
    let mut config = load_config(cli.config.as_deref())?;

    if let Some(bins) = cli.bins {
        config.bin_count = bins;
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if cli.seed.is_some() {
        config.prng_seed = cli.seed;
    }

    config.validate()?;
    tracing::debug!(?config, "Resolved simulation config");
    Ok(config)
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Run one simulation pass and log the outcome.
///
/// With `readings`, fill levels are replayed in bin order instead of drawn at
/// random. Locations always come from the config's PRNG.
pub fn cmd_simulate(config: &SimulationConfig, readings: Option<&[i64]>) -> CollectionReport {
    let mut rng = config.rng();
    let mut fleet = Fleet::generate(config.bin_count, &mut rng);

    let summary = match readings {
        Some(readings) => {
            if readings.len() > fleet.len() {
                tracing::warn!(
                    "{} readings given for {} bins, ignoring the extra ones.",
                    readings.len(),
                    fleet.len()
                );
            }
            fleet.run_pass(&mut ScriptedSensor::new(readings.iter().copied()))
        }
        None => fleet.run_pass(&mut RandomSensor::new(rng)),
    };
    tracing::debug!(?summary, "Simulation pass finished");

    tracing::info!("Current status of all bins:");
    for bin in fleet.bins() {
        tracing::info!("{}", bin.status());
    }

    let report = CollectionReport::from_fleet(&fleet, config.threshold);
    let ids = report
        .to_collect
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(
        "Bins that need to be collected (threshold {}%): [{ids}]",
        report.threshold
    );

    report
}

/// Render a report for stdout.
pub fn render_report(report: &CollectionReport, format: ReportFormat) -> Result<String, CliError> {
    match format {
        ReportFormat::Text => Ok(report.to_text()),
        ReportFormat::Json => serde_json::to_string_pretty(report).map_err(CliError::Report),
    }
}

/// Entry point used by `main`.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let config = resolve_config(cli)?;
    let report = cmd_simulate(&config, cli.readings.as_deref());

    if let Some(format) = cli.report {
        println!("{}", render_report(&report, format)?);
    }

    Ok(())
}
