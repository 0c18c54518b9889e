//! # CLI Error Type
//!
//! Everything a command can fail with, wrapped into one enum.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  CoreError ─────┐                                                    │
//! │  ConfigError ───┤                                                    │
//! │  io::Error ─────┼──► CliError ──► anyhow (main) ──► stderr, exit 1   │
//! │  csv::Error ────┤                                                    │
//! │  serde_json ────┘                                                    │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use shaswi_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `shaswi` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias for command functions.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through() {
        let err: CliError = CoreError::invalid_argument("amount", "must not be negative").into();
        assert_eq!(err.to_string(), "Invalid argument amount: must not be negative");
    }

    #[test]
    fn test_config_error_prefixed() {
        let err: CliError = ConfigError::InvalidValue("SHASWI_REGION".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for SHASWI_REGION"
        );
    }
}
