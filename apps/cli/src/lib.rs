//! # shaswi CLI
//!
//! Terminal front end for shaswi-core.
//!
//! ## Startup Sequence
//! 1. Parse arguments (clap)
//! 2. Load configuration from the environment
//! 3. Initialize tracing (stderr, so stdout stays clean for CSV and JSON)
//! 4. Dispatch the subcommand and print its output

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::CliConfig;
use crate::error::CliResult;

/// Runs the CLI against the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load()?;

    init_tracing(&config);
    info!(version = env!("CARGO_PKG_VERSION"), "shaswi starting");
    debug!(?config, "configuration loaded");

    let output = dispatch(&cli, &config)?;
    println!("{output}");
    Ok(())
}

/// Runs one parsed command and returns what should be printed.
pub fn dispatch(cli: &Cli, config: &CliConfig) -> CliResult<String> {
    match &cli.command {
        Command::Words(args) => commands::words::run(args, config, cli.json),
        Command::Area(args) => commands::area::run(args, cli.json),
        Command::Geo(args) => commands::geo::run(args, cli.json),
        Command::GeoBatch(args) => commands::geo::run_batch(args, cli.json),
        Command::Emi(args) => commands::emi::run(args, cli.json),
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins; otherwise the filter comes from `SHASWI_LOG` (already
/// validated by [`CliConfig::load`]).
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch_args(args: &[&str]) -> CliResult<String> {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        dispatch(&cli, &CliConfig::default())
    }

    #[test]
    fn test_dispatch_words() {
        let out = dispatch_args(&["shaswi", "words", "0"]).unwrap();
        assert!(out.ends_with("Zero Rupees"));
    }

    #[test]
    fn test_dispatch_area_json() {
        let out = dispatch_args(&["shaswi", "--json", "area", "1", "bigha"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["terai"], "1-0-0");
    }

    #[test]
    fn test_dispatch_geo_batch_missing_file() {
        let err = dispatch_args(&["shaswi", "geo-batch", "/nonexistent/points.csv"]).unwrap_err();
        assert!(err.to_string().starts_with("Cannot read /nonexistent/points.csv"));
    }
}
