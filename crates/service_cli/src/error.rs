//! CLI error types.

use recur_core::types::CalendarError;
use recur_models::recurrence::TimeIntervalError;
use thiserror::Error;

/// Errors surfaced by the `recur` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file named on the command line does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The configuration file or environment could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An argument was syntactically valid but semantically wrong.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An instant could not be constructed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A time interval could not be constructed.
    #[error(transparent)]
    TimeInterval(#[from] TimeIntervalError),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
