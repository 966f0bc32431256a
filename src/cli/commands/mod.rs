//! CLI command implementations for the trip loader

pub mod load;
pub mod reconcile;
pub mod shared;

use crate::app::services::load_coordinator::BatchReport;
use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch the parsed arguments to the matching command
///
/// Returns the batch report for `load`; `reconcile` prints its purge
/// count directly and yields no report.
pub fn run(args: Args) -> Result<Option<BatchReport>> {
    match args.command {
        Some(Commands::Load(load_args)) => load::run_load(load_args).map(Some),
        Some(Commands::Reconcile(reconcile_args)) => {
            reconcile::run_reconcile(reconcile_args)?;
            Ok(None)
        }
        None => Err(Error::configuration("No command specified")),
    }
}
