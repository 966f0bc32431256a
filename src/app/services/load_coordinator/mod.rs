//! Load coordination for parsed trip records
//!
//! ## Architecture
//!
//! - [`loader`] - Per-record existence-check-then-insert loop
//! - [`overflow`] - Overflow-duplicates file writer
//! - [`stats`] - Load statistics and the batch report
//!
//! The coordinator is single-threaded by design: the check-then-act
//! pair for one record must not race with another record sharing the
//! same natural key, and sequential execution satisfies that trivially.

pub mod loader;
pub mod overflow;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use loader::LoadCoordinator;
pub use overflow::OverflowWriter;
pub use stats::{BatchReport, LoadStats};
