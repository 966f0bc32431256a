use clap::Parser;
use std::process;
use trip_loader::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_report) => {
            // Success - the report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", anyhow::Error::from(error));
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Trip Loader - Delimited Trip Record Importer");
    println!("============================================");
    println!();
    println!("Load fixed-column comma-delimited trip records into a SQLite store,");
    println!("diverting duplicate-on-arrival records to an overflow file and purging");
    println!("store-side duplicate groups after the load.");
    println!();
    println!("USAGE:");
    println!("    trip-loader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    load         Parse, load, and reconcile a trip record file (main command)");
    println!("    reconcile    Run the duplicate-group purge pass alone");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Load a trip file into the default database:");
    println!("    trip-loader load --input sample-cab-data.csv");
    println!();
    println!("    # Load with strict field validation and a custom database:");
    println!("    trip-loader load -i trips.csv -d trips.db --strict");
    println!();
    println!("    # Purge duplicate groups in an existing database:");
    println!("    trip-loader reconcile --database trips.db");
    println!();
    println!("For detailed help on any command, use:");
    println!("    trip-loader <COMMAND> --help");
}
