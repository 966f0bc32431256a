//! Reconcile command implementation
//!
//! Runs the duplicate-group purge pass against an existing store
//! without parsing or loading anything.

use colored::*;
use tracing::info;

use super::shared::setup_logging;
use crate::app::services::trip_store::{DuplicateReconciler, TripStore};
use crate::cli::args::ReconcileArgs;
use crate::Result;

/// Run the standalone reconciliation pass
pub fn run_reconcile(args: ReconcileArgs) -> Result<usize> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!(
        "Reconciling duplicate groups in {}",
        args.database_path.display()
    );

    let store = TripStore::open(&args.database_path)?;
    let rows_purged = DuplicateReconciler::new().run(&store)?;

    if !args.quiet {
        println!(
            "{} {} rows purged",
            "Reconciliation complete:".green().bold(),
            rows_purged.to_string().yellow()
        );
    }

    Ok(rows_purged)
}
