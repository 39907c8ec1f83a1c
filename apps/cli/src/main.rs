//! Caddie - interactive shopping-cart calculator.
//!
//! # Usage
//!
//! ```bash
//! # Build a cart interactively
//! caddie
//!
//! # Print the confirmed cart as JSON after the tables
//! caddie --summary json
//!
//! # Show session logs on stderr
//! CADDIE_LOG=caddie_cli=info caddie
//! ```

#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use caddie_cli::config::DEFAULT_LOG_FILTER;
use caddie_cli::{Args, CliConfig};

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match CliConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(DEFAULT_LOG_FILTER);
            error!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);

    let stdin = io::stdin();
    match caddie_cli::run(&config, stdin.lock(), io::stdout().lock()) {
        Ok(report) => {
            info!(session = %report.id, outcome = ?report.outcome, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Session aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs are written to stderr so they never interleave with prompts on
/// stdout. `filter` has already been checked by `CliConfig::from_sources`.
fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
