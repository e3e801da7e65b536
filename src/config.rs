//! Configuration management for the address book demo.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How the demo prints the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Contact name: ..., phones: ...` line per record
    #[default]
    Text,
    /// The whole book as pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be one of: text, json, got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Configuration for the address book demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format for printed records (default: text)
    pub output_format: OutputFormat,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: text)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let output_format = Self::parse_env("ADDRESS_BOOK_OUTPUT", OutputFormat::default())?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            output_format,
            log_level,
        })
    }

    /// Parse an environment variable with a default value.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr<Err = String>,
    {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|reason| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason,
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_format: OutputFormat::Text,
            log_level: "error".to_string(),
        }
    }
}
