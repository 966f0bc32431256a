//! Per-record load coordination
//!
//! Iterates the parsed record sequence and decides, one record at a
//! time, whether to insert into the store or divert to the overflow
//! file. Each existence check and each insert is an independent store
//! round trip; there is no batching and no transaction spanning
//! multiple records.

use std::path::Path;

use indicatif::ProgressBar;
use tracing::{debug, info};

use super::overflow::OverflowWriter;
use super::stats::LoadStats;
use crate::app::models::TripRecord;
use crate::app::services::trip_store::TripStore;
use crate::Result;

/// Coordinator for the load phase of a batch
#[derive(Debug)]
pub struct LoadCoordinator<'a> {
    store: &'a TripStore,
}

impl<'a> LoadCoordinator<'a> {
    /// Create a coordinator over an open store
    pub fn new(store: &'a TripStore) -> Self {
        Self { store }
    }

    /// Load the full in-memory record sequence
    ///
    /// For each record: query the store for the natural key, divert to
    /// the overflow file on a match, insert otherwise. The overflow file
    /// is always recreated with its header line, even when no duplicates
    /// are found. A store failure partway aborts the remaining
    /// iteration; the overflow file handle is still released.
    pub fn load(
        &self,
        records: &[TripRecord],
        overflow_path: &Path,
        progress_bar: Option<&ProgressBar>,
    ) -> Result<LoadStats> {
        info!(
            "Loading {} records (overflow file: {})",
            records.len(),
            overflow_path.display()
        );

        let mut overflow = OverflowWriter::create(overflow_path)?;
        let mut stats = LoadStats::new();
        stats.records_in = records.len();

        for record in records {
            let key = record.natural_key();

            if self.store.exists(&key)? {
                overflow.write_record(record)?;
                stats.diverted += 1;
                debug!("Duplicate on arrival: {}", key);
            } else {
                self.store.insert(record)?;
                stats.loaded += 1;
            }

            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }

        overflow.finish()?;

        info!(
            "Load complete: {} inserted, {} diverted",
            stats.loaded, stats.diverted
        );

        Ok(stats)
    }
}
