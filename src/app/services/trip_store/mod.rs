//! SQLite store for trip records
//!
//! ## Architecture
//!
//! - [`store`] - Connection ownership, schema, natural-key existence
//!   check and parameterized insert
//! - [`reconciler`] - Post-load set-based purge of duplicate groups

pub mod reconciler;
pub mod store;

#[cfg(test)]
pub mod tests;

pub use reconciler::DuplicateReconciler;
pub use store::TripStore;
