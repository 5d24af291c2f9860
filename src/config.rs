//! Configuration management for the tutor address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, after reading a `.env` file if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "data/addressbook.json";

/// Configuration for the tutor address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file the address book is kept in
    pub data_file: PathBuf,

    /// Start from the sample roster when the data file does not exist yet
    pub seed_sample_data: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `TUTOR_BOOK_DATA_FILE`: address book file (default: `data/addressbook.json`)
    /// - `TUTOR_BOOK_SEED_SAMPLE_DATA`: `true` or `false` (default: `true`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = env::var("TUTOR_BOOK_DATA_FILE")
            .unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());

        if data_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "TUTOR_BOOK_DATA_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let seed_sample_data = Self::parse_env_bool("TUTOR_BOOK_SEED_SAMPLE_DATA", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file: PathBuf::from(data_file),
            seed_sample_data,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
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
            seed_sample_data: true,
            log_level: "error".to_string(),
        }
    }
}
