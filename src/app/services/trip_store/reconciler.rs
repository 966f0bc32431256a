//! Post-load duplicate reconciliation
//!
//! A single set-based removal pass over the store: every row belonging
//! to a natural-key group with more than one member is deleted, leaving
//! zero representatives from each over-populated group. Emptying groups
//! entirely rather than keeping one survivor is the documented
//! historical behavior and is preserved as-is.

use tracing::info;

use super::store::TripStore;
use crate::{Error, Result};

/// Batch reconciliation step that purges duplicate groups
#[derive(Debug, Default)]
pub struct DuplicateReconciler;

impl DuplicateReconciler {
    pub fn new() -> Self {
        Self
    }

    /// Delete all rows of every over-populated natural-key group
    ///
    /// Operates purely store-side with no in-memory state. Idempotent:
    /// a second run finds no over-populated groups and deletes nothing.
    /// Returns the number of rows deleted.
    pub fn run(&self, store: &TripStore) -> Result<usize> {
        let deleted = store
            .connection()
            .execute(
                "DELETE FROM trips
                 WHERE (tpep_pickup_datetime, tpep_dropoff_datetime, passenger_count) IN (
                     SELECT tpep_pickup_datetime, tpep_dropoff_datetime, passenger_count
                     FROM trips
                     GROUP BY tpep_pickup_datetime, tpep_dropoff_datetime, passenger_count
                     HAVING COUNT(*) > 1
                 )",
                [],
            )
            .map_err(|e| Error::store("Duplicate group purge failed", e))?;

        info!("Reconciliation complete: {} rows purged", deleted);
        Ok(deleted)
    }
}
