//! Parsing statistics and result structures for trip file processing

use crate::app::models::TripRecord;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed trip records, in input order
    pub records: Vec<TripRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data lines encountered (header excluded)
    pub lines_read: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of lines skipped as malformed (or rejected in strict mode)
    pub lines_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            records_parsed: 0,
            lines_skipped: 0,
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.lines_read as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
