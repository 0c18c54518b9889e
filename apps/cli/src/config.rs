//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override whatever is loaded here.
//!
//! | Variable             | Default             | Meaning                        |
//! |----------------------|---------------------|--------------------------------|
//! | `SHASWI_REGION`      | `nepal`             | Currency preset for `words`    |
//! | `SHASWI_CASE`        | `as-is`             | Letter case for `words`        |
//! | `SHASWI_ONLY_SUFFIX` | `false`             | Append "Only" in `words`       |
//! | `SHASWI_LOG`         | `info,shaswi=debug` | Log filter when `RUST_LOG` is unset |

use serde::Serialize;
use shaswi_core::{CaseStyle, Region};
use std::env;
use tracing_subscriber::EnvFilter;

/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info,shaswi=debug";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CliConfig {
    /// Region used when `--region` is not given
    pub region: Region,

    /// Letter case used when `--case` is not given
    pub case: CaseStyle,

    /// Append "Only" to amounts in words
    pub only_suffix: bool,

    /// `tracing-subscriber` filter directive
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            region: Region::default(),
            case: CaseStyle::default(),
            only_suffix: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CliConfig {
            region: lookup("SHASWI_REGION")
                .unwrap_or_else(|| "nepal".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHASWI_REGION".to_string()))?,

            case: lookup("SHASWI_CASE")
                .unwrap_or_else(|| "as-is".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHASWI_CASE".to_string()))?,

            only_suffix: parse_flag(lookup("SHASWI_ONLY_SUFFIX"))
                .ok_or_else(|| ConfigError::InvalidValue("SHASWI_ONLY_SUFFIX".to_string()))?,

            log_filter: lookup("SHASWI_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };

        // Reject a filter the subscriber would refuse at startup
        if EnvFilter::try_new(&config.log_filter).is_err() {
            return Err(ConfigError::InvalidValue("SHASWI_LOG".to_string()));
        }

        Ok(config)
    }
}

/// `None` for an unrecognized value; an unset variable reads as `false`.
fn parse_flag(value: Option<String>) -> Option<bool> {
    let Some(value) = value else {
        return Some(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
