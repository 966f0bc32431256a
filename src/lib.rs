//! Trip Loader Library
//!
//! A Rust library for loading comma-delimited taxi trip records into a
//! SQLite store with duplicate handling.
//!
//! This library provides tools for:
//! - Parsing fixed-column trip record files with lenient or strict field coercion
//! - Normalizing wall-clock timestamps from US Eastern time to UTC
//! - Loading records with a per-record existence check against the natural key
//! - Diverting duplicate-on-arrival records to an overflow CSV file
//! - Reconciling store-side duplicate groups with a set-based purge
//! - Comprehensive error handling and structured batch reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod load_coordinator;
        pub mod trip_parser;
        pub mod trip_store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{NaturalKey, StoreForwardFlag, TripRecord};
pub use config::{Config, ParseMode};

/// Result type alias for the trip loader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for trip loading operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing error
    #[error("CSV error in file '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// SQLite store error
    #[error("Store error: {message}")]
    Store {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error (strict parse mode)
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a store error with context
    pub fn store(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Store {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            file: "unknown".to_string(),
            message: "CSV operation failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Self::Store {
            message: "SQLite operation failed".to_string(),
            source: error,
        }
    }
}
