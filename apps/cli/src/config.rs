//! # CLI Configuration
//!
//! Settings for one run of `caddie`.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     caddie --summary json --log debug                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CADDIE_SUMMARY=json                                                │
//! │     CADDIE_LOG=caddie_cli=debug   (RUST_LOG is read if unset)          │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     summary = table, log filter = warn                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Log filter used when nothing is configured. Logs go to stderr, so the
/// default keeps the console quiet.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// =============================================================================
// Command Line
// =============================================================================

/// Interactive shopping-cart calculator.
#[derive(Debug, Default, Parser)]
#[command(name = "caddie")]
#[command(author, version, about = "Interactive shopping-cart calculator")]
pub struct Args {
    /// What to print after a confirmed order (`table` or `json`)
    #[arg(long, value_name = "FORMAT")]
    pub summary: Option<SummaryFormat>,

    /// Tracing filter directive, e.g. `debug` or `caddie_cli=trace`
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

// =============================================================================
// Summary Format
// =============================================================================

/// Output produced after the order is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryFormat {
    /// Only the console tables (nothing extra).
    #[default]
    Table,

    /// Tables, then the cart summary as JSON on stdout.
    Json,
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryFormat::Table => write!(f, "table"),
            SummaryFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for SummaryFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(SummaryFormat::Table),
            "json" => Ok(SummaryFormat::Json),
            other => Err(ConfigError::UnknownSummaryFormat(other.to_string())),
        }
    }
}

// =============================================================================
// CLI Config
// =============================================================================

/// Resolved settings for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive, checked by `from_sources`.
    pub log_filter: String,

    pub summary: SummaryFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            summary: SummaryFormat::default(),
        }
    }
}

impl CliConfig {
    /// Merges command line arguments over the process environment.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        Self::from_sources(args, |key| env::var(key).ok())
    }

    /// Merges command line arguments over `lookup` (an environment stand-in).
    pub fn from_sources<F>(args: &Args, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let summary = match args.summary {
            Some(format) => format,
            None => match lookup("CADDIE_SUMMARY") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("CADDIE_SUMMARY".to_string()))?,
                None => SummaryFormat::default(),
            },
        };

        let log_source = args
            .log
            .clone()
            .map(|filter| ("--log", filter))
            .or_else(|| lookup("CADDIE_LOG").map(|filter| ("CADDIE_LOG", filter)))
            .or_else(|| lookup("RUST_LOG").map(|filter| ("RUST_LOG", filter)))
            .filter(|(_, filter)| !filter.trim().is_empty());

        let log_filter = match log_source {
            Some((name, filter)) => {
                EnvFilter::try_new(&filter).map_err(|_| ConfigError::InvalidValue(name.to_string()))?;
                filter
            }
            None => DEFAULT_LOG_FILTER.to_string(),
        };

        Ok(CliConfig {
            log_filter,
            summary,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Unknown summary format: '{0}'. Valid options: table, json")]
    UnknownSummaryFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_sources(&Args::default(), env_of(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.summary, SummaryFormat::Table);
    }

    #[test]
    fn test_environment_is_read() {
        let config = CliConfig::from_sources(
            &Args::default(),
            env_of(&[("CADDIE_SUMMARY", "JSON"), ("RUST_LOG", "info")]),
        )
        .unwrap();
        assert_eq!(config.summary, SummaryFormat::Json);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_caddie_log_beats_rust_log() {
        let config = CliConfig::from_sources(
            &Args::default(),
            env_of(&[("CADDIE_LOG", "debug"), ("RUST_LOG", "info")]),
        )
        .unwrap();
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_arguments_beat_environment() {
        let args = Args {
            summary: Some(SummaryFormat::Table),
            log: Some("trace".to_string()),
        };
        let config = CliConfig::from_sources(
            &args,
            env_of(&[("CADDIE_SUMMARY", "json"), ("CADDIE_LOG", "debug")]),
        )
        .unwrap();
        assert_eq!(config.summary, SummaryFormat::Table);
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_invalid_environment_value() {
        let err = CliConfig::from_sources(&Args::default(), env_of(&[("CADDIE_SUMMARY", "xml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "CADDIE_SUMMARY"));
    }

    #[test]
    fn test_malformed_log_filter_is_rejected() {
        let args = Args {
            summary: None,
            log: Some("[[[".to_string()),
        };
        let err = CliConfig::from_sources(&args, env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "--log"));

        let err = CliConfig::from_sources(&Args::default(), env_of(&[("CADDIE_LOG", "[[[")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "CADDIE_LOG"));
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["caddie", "--summary", "json", "--log", "debug"]).unwrap();
        assert_eq!(args.summary, Some(SummaryFormat::Json));
        assert_eq!(args.log.as_deref(), Some("debug"));

        assert!(Args::try_parse_from(["caddie", "--summary", "xml"]).is_err());
    }

    #[test]
    fn test_summary_format_display_round_trips() {
        for format in [SummaryFormat::Table, SummaryFormat::Json] {
            assert_eq!(format.to_string().parse::<SummaryFormat>().unwrap(), format);
        }
    }
}
