//! Parser for fixed-column comma-delimited trip record files
//!
//! This module converts raw input lines into typed
//! [`TripRecord`](crate::app::models::TripRecord)s. The
//! design is deliberately simplistic: the input is split on commas with
//! no quoting or escaping support and fields are addressed by fixed
//! column offset.
//!
//! ## Architecture
//!
//! - [`parser`] - File reading and per-line orchestration
//! - [`field_parsers`] - Pure normalization functions (dates, zone
//!   conversion, numeric coercion, flag mapping)
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trip_loader::app::services::trip_parser::TripFileParser;
//! use trip_loader::config::ParseMode;
//!
//! # fn example() -> trip_loader::Result<()> {
//! let parser = TripFileParser::new(ParseMode::Lenient);
//! let result = parser.parse_file(std::path::Path::new("trips.csv"))?;
//!
//! println!(
//!     "Parsed {} records from {} lines",
//!     result.stats.records_parsed, result.stats.lines_read
//! );
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use parser::TripFileParser;
pub use stats::{ParseResult, ParseStats};
