//! Application constants for the trip loader
//!
//! This module contains the fixed column layout of the input file, store
//! schema names, and default values used throughout the application.

// =============================================================================
// Input File Layout
// =============================================================================

/// Minimum number of comma-separated fields a data line must yield.
/// Lines below this threshold are malformed and skipped.
pub const MIN_FIELD_COUNT: usize = 14;

/// Fixed column offsets into a split data line.
///
/// The input is strictly positional: nine of the available columns are
/// retained, the rest are ignored.
pub mod columns {
    /// Pickup timestamp (local wall-clock)
    pub const PICKUP_TIME: usize = 1;

    /// Dropoff timestamp (local wall-clock)
    pub const DROPOFF_TIME: usize = 2;

    /// Passenger count
    pub const PASSENGER_COUNT: usize = 3;

    /// Trip distance in miles
    pub const TRIP_DISTANCE: usize = 4;

    /// Store-and-forward flag ("N" or anything else)
    pub const STORE_FWD_FLAG: usize = 6;

    /// Pickup zone identifier
    pub const PICKUP_LOCATION_ID: usize = 7;

    /// Dropoff zone identifier
    pub const DROPOFF_LOCATION_ID: usize = 8;

    /// Fare amount
    pub const FARE_AMOUNT: usize = 10;

    /// Tip amount
    pub const TIP_AMOUNT: usize = 13;
}

// =============================================================================
// Store Schema
// =============================================================================

/// Table holding loaded trip records
pub const TRIPS_TABLE: &str = "trips";

/// Format used when persisting UTC timestamps as text.
/// Natural-key comparisons in the store rely on this being stable.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Overflow File
// =============================================================================

/// Header line written at the top of the overflow-duplicates file
pub const OVERFLOW_HEADER: &[&str] = &[
    "tpep_pickup_datetime",
    "tpep_dropoff_datetime",
    "passenger_count",
    "trip_distance",
    "store_and_fwd_flag",
    "PULocationID",
    "DOLocationID",
    "fare_amount",
    "tip_amount",
];

// =============================================================================
// Defaults
// =============================================================================

/// Default SQLite database path
pub const DEFAULT_DATABASE_PATH: &str = "trips.db";

/// Default overflow-duplicates file path
pub const DEFAULT_OVERFLOW_PATH: &str = "duplicates.csv";

/// Default log level for console output
pub const DEFAULT_LOG_LEVEL: &str = "info";
