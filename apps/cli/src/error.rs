//! # CLI Error Type
//!
//! Errors that end a session early.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Caddie                                 │
//! │                                                                         │
//! │  Bad answer (ValidationError) ──► message printed, question repeated   │
//! │                                   (never reaches this type)             │
//! │                                                                         │
//! │  stdin closed / write failed  ──► CliError ──► main: error! + exit 1    │
//! │  bad CADDIE_* value           ──► CliError ──► main: error! + exit 1    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Failure that aborts the run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input ended while a question was still waiting for an answer.
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The JSON summary could not be produced.
    #[error("Failed to serialize summary: {0}")]
    Summary(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
