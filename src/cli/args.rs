//! Command-line argument definitions for the trip loader
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::{Config, ParseMode};
use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_LOG_LEVEL, DEFAULT_OVERFLOW_PATH};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the trip loader
///
/// Loads comma-delimited taxi trip records into a SQLite store with
/// duplicate-on-arrival diversion and a post-load reconciliation pass.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trip-loader",
    version,
    about = "Load delimited trip records into SQLite with duplicate handling",
    long_about = "Loads a fixed-column comma-delimited trip record file into a SQLite \
                  store. Incoming records whose natural key (pickup time, dropoff time, \
                  passenger count) already exists are diverted to an overflow file, and \
                  a post-load reconciliation pass purges store-side duplicate groups."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the trip loader
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse, load, and reconcile a trip record file (main command)
    Load(LoadArgs),
    /// Run the duplicate-group purge pass alone
    Reconcile(ReconcileArgs),
}

/// Arguments for the load command (full batch)
#[derive(Debug, Clone, Parser)]
pub struct LoadArgs {
    /// Path to the comma-delimited trip record file
    ///
    /// First line is a header and is discarded; subsequent lines must
    /// yield at least 14 comma-separated fields.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input trip record file"
    )]
    pub input_path: PathBuf,

    /// Path to the SQLite database (created if absent)
    #[arg(
        short = 'd',
        long = "database",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE_PATH,
        help = "SQLite database path"
    )]
    pub database_path: PathBuf,

    /// Path of the overflow-duplicates file, recreated each run
    #[arg(
        long = "overflow",
        value_name = "PATH",
        default_value = DEFAULT_OVERFLOW_PATH,
        help = "Overflow-duplicates file path"
    )]
    pub overflow_path: PathBuf,

    /// Reject lines with unparsable date or numeric fields
    ///
    /// By default unparsable fields are coerced to defaults (zero,
    /// earliest timestamp) for compatibility with the historical loader.
    #[arg(long = "strict", help = "Reject lines with unparsable fields")]
    pub strict: bool,

    /// Suppress the progress bar and non-essential output
    #[arg(short = 'q', long = "quiet", help = "Minimal console output")]
    pub quiet: bool,

    /// Disable the progress bar only
    #[arg(long = "no-progress", help = "Disable the progress bar")]
    pub no_progress: bool,

    /// Log level for console output (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log level for console output"
    )]
    pub log_level: String,
}

impl LoadArgs {
    /// Build the batch configuration from the parsed arguments
    pub fn to_config(&self) -> Config {
        let mode = if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        };

        let mut config = Config::new(self.input_path.clone())
            .with_database_path(self.database_path.clone())
            .with_overflow_path(self.overflow_path.clone())
            .with_parse_mode(mode);

        if !self.show_progress() {
            config = config.without_progress();
        }
        config
    }

    /// Whether to display the load-phase progress bar
    pub fn show_progress(&self) -> bool {
        !self.no_progress && !self.quiet
    }

    /// Effective log level for console output
    pub fn get_log_level(&self) -> &str {
        if self.quiet { "warn" } else { self.log_level.as_str() }
    }
}

/// Arguments for the reconcile command (purge pass only)
#[derive(Debug, Clone, Parser)]
pub struct ReconcileArgs {
    /// Path to the SQLite database
    #[arg(
        short = 'd',
        long = "database",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE_PATH,
        help = "SQLite database path"
    )]
    pub database_path: PathBuf,

    /// Suppress non-essential output
    #[arg(short = 'q', long = "quiet", help = "Minimal console output")]
    pub quiet: bool,

    /// Log level for console output (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log level for console output"
    )]
    pub log_level: String,
}

impl ReconcileArgs {
    /// Effective log level for console output
    pub fn get_log_level(&self) -> &str {
        if self.quiet { "warn" } else { self.log_level.as_str() }
    }
}
