//! Configuration management and validation.
//!
//! Provides the configuration structure for a load batch: file paths,
//! field-coercion mode, and console reporting preferences.

use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_OVERFLOW_PATH};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Field-coercion behavior when a date, integer, or decimal field fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ParseMode {
    /// Coerce unparsable fields to defaults (zero, earliest timestamp).
    /// Reproduces the historical loader behavior and is the default.
    #[default]
    Lenient,

    /// Reject lines containing an unparsable field. Rejected lines are
    /// logged and counted as skipped; the batch continues.
    Strict,
}

/// Configuration for a trip load batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the comma-delimited input file
    pub input_path: PathBuf,

    /// Path to the SQLite database
    pub database_path: PathBuf,

    /// Path to the overflow-duplicates file, recreated each run
    pub overflow_path: PathBuf,

    /// Field-coercion mode for the parser
    pub parse_mode: ParseMode,

    /// Show a progress bar during the load phase
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            overflow_path: PathBuf::from(DEFAULT_OVERFLOW_PATH),
            parse_mode: ParseMode::Lenient,
            show_progress: true,
        }
    }
}

impl Config {
    /// Create a configuration for the given input file with defaults elsewhere
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Default::default()
        }
    }

    /// Set the database path
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    /// Set the overflow-duplicates file path
    pub fn with_overflow_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.overflow_path = path.into();
        self
    }

    /// Set the field-coercion mode
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    /// Disable the load-phase progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Validate the configuration before running a batch
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input file path is required"));
        }
        if !self.input_path.exists() {
            return Err(Error::file_not_found(
                self.input_path.display().to_string(),
            ));
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(Error::configuration("Database path is required"));
        }
        if self.overflow_path.as_os_str().is_empty() {
            return Err(Error::configuration("Overflow file path is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_lenient_mode() {
        let config = Config::default();
        assert_eq!(config.parse_mode, ParseMode::Lenient);
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(config.overflow_path, PathBuf::from(DEFAULT_OVERFLOW_PATH));
    }

    #[test]
    fn validate_rejects_empty_input_path() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_input_file() {
        let config = Config::new("/nonexistent/trips.csv");
        assert!(matches!(config.validate(), Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn builder_methods_chain() {
        let config = Config::new("input.csv")
            .with_database_path("out.db")
            .with_overflow_path("dups.csv")
            .with_parse_mode(ParseMode::Strict)
            .without_progress();

        assert_eq!(config.database_path, PathBuf::from("out.db"));
        assert_eq!(config.overflow_path, PathBuf::from("dups.csv"));
        assert_eq!(config.parse_mode, ParseMode::Strict);
        assert!(!config.show_progress);
    }
}
