//! Tests for the trip store and duplicate reconciler


use crate::app::models::{StoreForwardFlag, TripRecord};
use chrono::{TimeZone, Utc};

/// Create a test record with the given natural-key parts and fare
pub fn test_record(day: u32, hour: u32, passengers: i64, fare: f64) -> TripRecord {
    TripRecord {
        pickup_time: Utc.with_ymd_and_hms(2023, 6, day, hour, 0, 0).unwrap(),
        dropoff_time: Utc.with_ymd_and_hms(2023, 6, day, hour, 30, 0).unwrap(),
        passenger_count: passengers,
        trip_distance: 2.5,
        store_and_forward: StoreForwardFlag::No,
        pickup_location_id: 100,
        dropoff_location_id: 200,
        fare_amount: fare,
        tip_amount: 1.0,
    }
}
