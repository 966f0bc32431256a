//! Core trip file parser implementation
//!
//! Handles file reading, header discarding, and per-line record
//! extraction. The input is treated as strictly positional
//! comma-separated data: quoting and escaping are deliberately disabled
//! and fields are addressed by fixed column offset.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::StringRecord;
use tracing::{info, warn};

use super::field_parsers::{
    eastern_to_utc, parse_datetime, parse_datetime_strict, parse_decimal, parse_decimal_strict,
    parse_flag, parse_int, parse_int_strict,
};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::TripRecord;
use crate::config::ParseMode;
use crate::constants::{columns, MIN_FIELD_COUNT};
use crate::{Error, Result};

/// Parser for fixed-column comma-delimited trip record files
#[derive(Debug, Clone)]
pub struct TripFileParser {
    mode: ParseMode,
}

impl TripFileParser {
    /// Create a parser with the given field-coercion mode
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Parse a trip file into records and statistics
    ///
    /// The header line is discarded. Malformed lines are logged and
    /// skipped; a single bad line never aborts the batch. Read failures
    /// on the underlying file are fatal.
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing trip file: {}", path.display());

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        let mut lines = BufReader::new(file).lines();

        // Discard the header line
        if let Some(header) = lines.next() {
            header.map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        }

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for (index, line) in lines.enumerate() {
            let line =
                line.map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
            stats.lines_read += 1;

            match self.parse_line(&split_line(&line)) {
                Ok(trip) => {
                    records.push(trip);
                    stats.records_parsed += 1;
                }
                Err(e) => {
                    // Header is line 1, first data line is line 2
                    warn!("Skipping line {}: '{}' ({})", index + 2, line, e);
                    stats.lines_skipped += 1;
                }
            }
        }

        info!(
            "Parsed {} records from {} lines ({} skipped)",
            stats.records_parsed, stats.lines_read, stats.lines_skipped
        );

        Ok(ParseResult { records, stats })
    }

    /// Parse a single split data line into a trip record
    ///
    /// Fails when the line yields fewer than the minimum field count, or
    /// in strict mode when a date, integer, or decimal field does not
    /// parse. Extracted fields are trimmed before normalization.
    pub fn parse_line(&self, record: &StringRecord) -> Result<TripRecord> {
        if record.len() < MIN_FIELD_COUNT {
            return Err(Error::data_validation(format!(
                "Expected at least {} fields, found {}",
                MIN_FIELD_COUNT,
                record.len()
            )));
        }

        let field = |index: usize| record.get(index).map(str::trim).unwrap_or("");

        let trip = match self.mode {
            ParseMode::Lenient => TripRecord {
                pickup_time: eastern_to_utc(parse_datetime(field(columns::PICKUP_TIME))),
                dropoff_time: eastern_to_utc(parse_datetime(field(columns::DROPOFF_TIME))),
                passenger_count: parse_int(field(columns::PASSENGER_COUNT)),
                trip_distance: parse_decimal(field(columns::TRIP_DISTANCE)),
                store_and_forward: parse_flag(field(columns::STORE_FWD_FLAG)),
                pickup_location_id: parse_int(field(columns::PICKUP_LOCATION_ID)),
                dropoff_location_id: parse_int(field(columns::DROPOFF_LOCATION_ID)),
                fare_amount: parse_decimal(field(columns::FARE_AMOUNT)),
                tip_amount: parse_decimal(field(columns::TIP_AMOUNT)),
            },
            ParseMode::Strict => TripRecord {
                pickup_time: eastern_to_utc(Some(parse_datetime_strict(
                    field(columns::PICKUP_TIME),
                    "pickup_time",
                )?)),
                dropoff_time: eastern_to_utc(Some(parse_datetime_strict(
                    field(columns::DROPOFF_TIME),
                    "dropoff_time",
                )?)),
                passenger_count: parse_int_strict(
                    field(columns::PASSENGER_COUNT),
                    "passenger_count",
                )?,
                trip_distance: parse_decimal_strict(
                    field(columns::TRIP_DISTANCE),
                    "trip_distance",
                )?,
                store_and_forward: parse_flag(field(columns::STORE_FWD_FLAG)),
                pickup_location_id: parse_int_strict(
                    field(columns::PICKUP_LOCATION_ID),
                    "pickup_location_id",
                )?,
                dropoff_location_id: parse_int_strict(
                    field(columns::DROPOFF_LOCATION_ID),
                    "dropoff_location_id",
                )?,
                fare_amount: parse_decimal_strict(field(columns::FARE_AMOUNT), "fare_amount")?,
                tip_amount: parse_decimal_strict(field(columns::TIP_AMOUNT), "tip_amount")?,
            },
        };

        Ok(trip)
    }
}

impl Default for TripFileParser {
    fn default() -> Self {
        Self::new(ParseMode::Lenient)
    }
}

/// Split a raw data line on every comma, with no quoting or escaping
///
/// A blank line splits into a single empty field and fails the minimum
/// field count like any other short line.
pub(crate) fn split_line(line: &str) -> StringRecord {
    StringRecord::from(line.split(',').collect::<Vec<_>>())
}
