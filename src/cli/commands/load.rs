//! Load command implementation
//!
//! Orchestrates the full batch as a strict linear sequence: parse the
//! whole file into memory, load record by record, then reconcile
//! store-side duplicate groups. No phase is retried or rolled back on
//! failure of a later phase, and the reconciliation pass never runs if
//! the load fails.

use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use super::shared::{create_progress_bar, setup_logging};
use crate::app::services::load_coordinator::{BatchReport, LoadCoordinator};
use crate::app::services::trip_parser::TripFileParser;
use crate::app::services::trip_store::{DuplicateReconciler, TripStore};
use crate::cli::args::LoadArgs;
use crate::Result;

/// Run a full load batch: parse, load, reconcile
pub fn run_load(args: LoadArgs) -> Result<BatchReport> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting trip loader");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    config.validate()?;

    // Phase 1: parse the whole file into memory
    let parser = TripFileParser::new(config.parse_mode);
    let parse_result = parser.parse_file(&config.input_path)?;

    // Phase 2: per-record existence check and insert
    let store = TripStore::open(&config.database_path)?;
    let coordinator = LoadCoordinator::new(&store);

    let progress_bar = config
        .show_progress
        .then(|| create_progress_bar(parse_result.records.len() as u64, "Loading records"));

    let load_stats = coordinator.load(
        &parse_result.records,
        &config.overflow_path,
        progress_bar.as_ref(),
    )?;

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    // Phase 3: store-side duplicate group purge
    let rows_purged = DuplicateReconciler::new().run(&store)?;

    let report = BatchReport {
        parse: parse_result.stats,
        load: load_stats,
        rows_purged,
        elapsed: start_time.elapsed(),
    };

    if !args.quiet {
        print_report(&report);
    }

    Ok(report)
}

/// Print the batch report to the console
fn print_report(report: &BatchReport) {
    println!();
    println!("{}", "Batch complete".green().bold());
    println!(
        "  Lines read:      {}",
        report.parse.lines_read.to_string().cyan()
    );
    println!(
        "  Records parsed:  {}",
        report.parse.records_parsed.to_string().cyan()
    );
    println!(
        "  Lines skipped:   {}",
        report.parse.lines_skipped.to_string().yellow()
    );
    println!(
        "  Success rate:    {}",
        format!("{:.1}%", report.parse.success_rate()).cyan()
    );
    println!(
        "  Rows loaded:     {}",
        report.load.loaded.to_string().cyan()
    );
    println!(
        "  Rows diverted:   {}",
        report.load.diverted.to_string().yellow()
    );
    println!(
        "  Rows purged:     {}",
        report.rows_purged.to_string().yellow()
    );
    println!("  Elapsed:         {:.2}s", report.elapsed.as_secs_f64());
}
