//! Core data models for trip records
//!
//! Defines the canonical [`TripRecord`] produced by the parser, its
//! natural key used for duplicate detection, and the store-and-forward
//! flag enumeration.

use crate::constants::TIMESTAMP_FORMAT;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-and-forward flag for a trip record
///
/// The raw value `"N"` (after trimming) maps to `No`; every other value,
/// including malformed or empty input, maps to `Yes`. The asymmetric
/// default is a preserved compatibility behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreForwardFlag {
    Yes,
    No,
}

impl StoreForwardFlag {
    /// Map a raw field value to a flag, with `Yes` as the fallback
    pub fn from_raw(value: &str) -> Self {
        if value.trim() == "N" {
            Self::No
        } else {
            Self::Yes
        }
    }

    /// Persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for StoreForwardFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Natural key identifying "the same trip" for duplicate handling
///
/// Deliberately narrower than full-row equality: two rows sharing the
/// key are treated as duplicates even when distance or fare differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NaturalKey {
    pub pickup_time: DateTime<Utc>,
    pub dropoff_time: DateTime<Utc>,
    pub passenger_count: i64,
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.pickup_time.format(TIMESTAMP_FORMAT),
            self.dropoff_time.format(TIMESTAMP_FORMAT),
            self.passenger_count
        )
    }
}

/// A normalized trip record, created once per valid input line
///
/// Every field is always populated: in lenient mode unparsable input is
/// coerced to a default rather than rejected. Records are never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Pickup timestamp, normalized to UTC
    pub pickup_time: DateTime<Utc>,

    /// Dropoff timestamp, normalized to UTC
    pub dropoff_time: DateTime<Utc>,

    /// Number of passengers
    pub passenger_count: i64,

    /// Trip distance in miles
    pub trip_distance: f64,

    /// Store-and-forward flag
    pub store_and_forward: StoreForwardFlag,

    /// Pickup zone identifier
    pub pickup_location_id: i64,

    /// Dropoff zone identifier
    pub dropoff_location_id: i64,

    /// Fare amount (sign unvalidated, raw data may be negative)
    pub fare_amount: f64,

    /// Tip amount (sign unvalidated)
    pub tip_amount: f64,
}

impl TripRecord {
    /// Natural key for duplicate detection
    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey {
            pickup_time: self.pickup_time,
            dropoff_time: self.dropoff_time,
            passenger_count: self.passenger_count,
        }
    }

    /// The nine persisted fields in store column order, formatted for
    /// the overflow file and for text timestamp columns
    pub fn to_fields(&self) -> [String; 9] {
        [
            format_timestamp(&self.pickup_time),
            format_timestamp(&self.dropoff_time),
            self.passenger_count.to_string(),
            self.trip_distance.to_string(),
            self.store_and_forward.as_str().to_string(),
            self.pickup_location_id.to_string(),
            self.dropoff_location_id.to_string(),
            self.fare_amount.to_string(),
            self.tip_amount.to_string(),
        ]
    }
}

/// Format a UTC timestamp in the stable persisted representation
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> TripRecord {
        TripRecord {
            pickup_time: Utc.with_ymd_and_hms(2023, 6, 15, 12, 30, 0).unwrap(),
            dropoff_time: Utc.with_ymd_and_hms(2023, 6, 15, 12, 45, 0).unwrap(),
            passenger_count: 2,
            trip_distance: 3.4,
            store_and_forward: StoreForwardFlag::No,
            pickup_location_id: 142,
            dropoff_location_id: 236,
            fare_amount: 14.5,
            tip_amount: 2.0,
        }
    }

    #[test]
    fn flag_maps_n_to_no_and_everything_else_to_yes() {
        assert_eq!(StoreForwardFlag::from_raw("N"), StoreForwardFlag::No);
        assert_eq!(StoreForwardFlag::from_raw("  N  "), StoreForwardFlag::No);
        assert_eq!(StoreForwardFlag::from_raw("Y"), StoreForwardFlag::Yes);
        assert_eq!(StoreForwardFlag::from_raw(""), StoreForwardFlag::Yes);
        assert_eq!(StoreForwardFlag::from_raw("n"), StoreForwardFlag::Yes);
        assert_eq!(StoreForwardFlag::from_raw("garbage"), StoreForwardFlag::Yes);
    }

    #[test]
    fn natural_key_ignores_non_key_fields() {
        let a = sample_record();
        let mut b = sample_record();
        b.trip_distance = 99.0;
        b.fare_amount = -5.0;
        assert_eq!(a.natural_key(), b.natural_key());
    }

    #[test]
    fn natural_key_distinguishes_passenger_count() {
        let a = sample_record();
        let mut b = sample_record();
        b.passenger_count = 3;
        assert_ne!(a.natural_key(), b.natural_key());
    }

    #[test]
    fn to_fields_orders_the_nine_persisted_columns() {
        let fields = sample_record().to_fields();
        assert_eq!(fields[0], "2023-06-15 12:30:00");
        assert_eq!(fields[1], "2023-06-15 12:45:00");
        assert_eq!(fields[2], "2");
        assert_eq!(fields[3], "3.4");
        assert_eq!(fields[4], "No");
        assert_eq!(fields[5], "142");
        assert_eq!(fields[6], "236");
        assert_eq!(fields[7], "14.5");
        assert_eq!(fields[8], "2");
    }
}
