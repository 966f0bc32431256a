//! SQLite-backed trip store
//!
//! Owns the store connection for a batch and provides the natural-key
//! existence check and the parameterized insert used by the load
//! coordinator. Timestamps are persisted as formatted UTC text so the
//! natural key compares stably.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::app::models::{format_timestamp, NaturalKey, TripRecord};
use crate::{Error, Result};

/// Store for loaded trip records
///
/// One connection per batch, released when the store is dropped.
#[derive(Debug)]
pub struct TripStore {
    conn: Connection,
}

impl TripStore {
    /// Open (or create) the store at the given path and ensure the schema
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| Error::store(format!("Failed to open database {}", path.display()), e))?;
        let store = Self { conn };
        store.init_schema()?;
        info!("Opened trip store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory store, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::store("Failed to open in-memory database", e))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize the store schema
    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
                PRAGMA journal_mode = WAL;
                PRAGMA synchronous = NORMAL;

                CREATE TABLE IF NOT EXISTS trips (
                    tpep_pickup_datetime TEXT NOT NULL,
                    tpep_dropoff_datetime TEXT NOT NULL,
                    passenger_count INTEGER NOT NULL,
                    trip_distance REAL NOT NULL,
                    store_and_fwd_flag TEXT NOT NULL,
                    PULocationID INTEGER NOT NULL,
                    DOLocationID INTEGER NOT NULL,
                    fare_amount REAL NOT NULL,
                    tip_amount REAL NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_trips_natural_key
                    ON trips(tpep_pickup_datetime, tpep_dropoff_datetime, passenger_count);
                "#,
            )
            .map_err(|e| Error::store("Failed to initialize schema", e))?;
        Ok(())
    }

    /// Check whether any stored row matches the natural key
    ///
    /// One independent round trip per call, matching the per-record
    /// check-then-insert protocol.
    pub fn exists(&self, key: &NaturalKey) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*)
                 FROM trips
                 WHERE tpep_pickup_datetime = ?1
                   AND tpep_dropoff_datetime = ?2
                   AND passenger_count = ?3",
                params![
                    format_timestamp(&key.pickup_time),
                    format_timestamp(&key.dropoff_time),
                    key.passenger_count,
                ],
                |row| row.get(0),
            )
            .map_err(|e| Error::store(format!("Existence check failed for {}", key), e))?;

        Ok(count > 0)
    }

    /// Insert a full trip record via a parameterized statement
    pub fn insert(&self, record: &TripRecord) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO trips (
                    tpep_pickup_datetime, tpep_dropoff_datetime, passenger_count,
                    trip_distance, store_and_fwd_flag, PULocationID, DOLocationID,
                    fare_amount, tip_amount
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    format_timestamp(&record.pickup_time),
                    format_timestamp(&record.dropoff_time),
                    record.passenger_count,
                    record.trip_distance,
                    record.store_and_forward.as_str(),
                    record.pickup_location_id,
                    record.dropoff_location_id,
                    record.fare_amount,
                    record.tip_amount,
                ],
            )
            .map_err(|e| {
                Error::store(
                    format!("Insert failed for {}", record.natural_key()),
                    e,
                )
            })?;

        debug!("Inserted record {}", record.natural_key());
        Ok(())
    }

    /// Total number of stored rows
    pub fn count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM trips", [], |row| row.get(0))
            .map_err(|e| Error::store("Row count failed", e))
    }

    /// Number of stored rows matching the natural key
    pub fn count_for_key(&self, key: &NaturalKey) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*)
                 FROM trips
                 WHERE tpep_pickup_datetime = ?1
                   AND tpep_dropoff_datetime = ?2
                   AND passenger_count = ?3",
                params![
                    format_timestamp(&key.pickup_time),
                    format_timestamp(&key.dropoff_time),
                    key.passenger_count,
                ],
                |row| row.get(0),
            )
            .map_err(|e| Error::store(format!("Key count failed for {}", key), e))
    }

    /// Borrow the underlying connection for set-based operations
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
