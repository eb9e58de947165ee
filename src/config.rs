//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_DATA_FILE;
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the data file (default: `data.bin`)
    pub data_file: PathBuf,

    /// Load the data file at startup if it exists (default: true)
    pub autoload: bool,

    /// Save the address book when the session ends (default: true)
    pub autosave: bool,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Data file path (default: `data.bin`)
    /// - `CONTACT_BOOK_AUTOLOAD`: Load the data file at startup (default: true)
    /// - `CONTACT_BOOK_AUTOSAVE`: Save the data file on exit (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let data_file =
            env::var("CONTACT_BOOK_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
        if data_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let autoload = Self::parse_env_bool("CONTACT_BOOK_AUTOLOAD", true)?;
        let autosave = Self::parse_env_bool("CONTACT_BOOK_AUTOSAVE", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file: PathBuf::from(data_file),
            autoload,
            autosave,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    ///
    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, in any case.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            autoload: true,
            autosave: true,
            log_level: "error".to_string(),
        }
    }
}
