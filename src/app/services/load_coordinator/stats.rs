//! Load statistics and batch reporting structures

use super::super::trip_parser::ParseStats;

/// Statistics for the load phase
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Number of records presented to the coordinator
    pub records_in: usize,

    /// Number of records inserted into the store
    pub loaded: usize,

    /// Number of duplicate-on-arrival records diverted to the overflow file
    pub diverted: usize,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Structured outcome of a full batch: parse, load, reconcile
///
/// Replaces the historical uniform success message with precise counts.
/// A batch that fails partway surfaces an error instead of a report.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Parse phase statistics
    pub parse: ParseStats,

    /// Load phase statistics
    pub load: LoadStats,

    /// Rows deleted by the reconciliation pass
    pub rows_purged: usize,

    /// Wall-clock duration of the whole batch
    pub elapsed: std::time::Duration,
}

impl BatchReport {
    /// One-line human-readable summary of the batch
    pub fn summary(&self) -> String {
        format!(
            "{} lines read, {} parsed, {} skipped; {} loaded, {} diverted; {} purged in {:.2}s",
            self.parse.lines_read,
            self.parse.records_parsed,
            self.parse.lines_skipped,
            self.load.loaded,
            self.load.diverted,
            self.rows_purged,
            self.elapsed.as_secs_f64()
        )
    }
}
