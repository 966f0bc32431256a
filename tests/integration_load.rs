//! End-to-end tests for the parse, load, reconcile batch sequence

use std::fs;
use std::io::Write;

use tempfile::tempdir;

use trip_loader::app::services::load_coordinator::LoadCoordinator;
use trip_loader::app::services::trip_parser::TripFileParser;
use trip_loader::app::services::trip_store::{DuplicateReconciler, TripStore};
use trip_loader::config::ParseMode;
use trip_loader::constants::OVERFLOW_HEADER;

const HEADER: &str = "VendorID,tpep_pickup_datetime,tpep_dropoff_datetime,passenger_count,trip_distance,RatecodeID,store_and_fwd_flag,PULocationID,DOLocationID,payment_type,fare_amount,extra,mta_tax,tip_amount,tolls_amount,improvement_surcharge,total_amount,congestion_surcharge";

fn data_line(pickup: &str, dropoff: &str, passengers: &str, fare: &str) -> String {
    format!("2,{pickup},{dropoff},{passengers},3.4,1,N,142,236,1,{fare},0.5,0.5,2.0,0,0.3,0,2.5")
}

fn write_input(dir: &std::path::Path, lines: &[String]) -> std::path::PathBuf {
    let path = dir.join("trips.csv");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

#[test]
fn colliding_pair_loads_first_and_diverts_second() {
    let dir = tempdir().unwrap();

    // Two lines share (pickup, dropoff, passenger_count); one is distinct
    let lines = vec![
        data_line("2023-06-15 12:00:00", "2023-06-15 12:30:00", "2", "14.5"),
        data_line("2023-06-15 12:00:00", "2023-06-15 12:30:00", "2", "20.0"),
        data_line("2023-06-16 08:00:00", "2023-06-16 08:45:00", "1", "9.0"),
    ];
    let input = write_input(dir.path(), &lines);
    let overflow = dir.path().join("duplicates.csv");

    let parse_result = TripFileParser::new(ParseMode::Lenient)
        .parse_file(&input)
        .unwrap();
    assert_eq!(parse_result.stats.records_parsed, 3);

    let store = TripStore::open_in_memory().unwrap();
    let load_stats = LoadCoordinator::new(&store)
        .load(&parse_result.records, &overflow, None)
        .unwrap();

    assert_eq!(load_stats.loaded, 2);
    assert_eq!(load_stats.diverted, 1);
    assert_eq!(store.count().unwrap(), 2);

    let overflow_lines: Vec<String> = fs::read_to_string(&overflow)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(overflow_lines.len(), 2);
    assert_eq!(overflow_lines[0], OVERFLOW_HEADER.join(","));
}

#[test]
fn reconciler_empties_prepopulated_duplicate_group() {
    let dir = tempdir().unwrap();

    // Pre-populate the store with two rows sharing a natural key,
    // bypassing the load coordinator's diversion
    let line = data_line("2023-06-15 12:00:00", "2023-06-15 12:30:00", "2", "14.5");
    let input = write_input(dir.path(), &[line]);
    let parse_result = TripFileParser::new(ParseMode::Lenient)
        .parse_file(&input)
        .unwrap();
    let record = &parse_result.records[0];

    let store = TripStore::open_in_memory().unwrap();
    store.insert(record).unwrap();
    store.insert(record).unwrap();
    assert_eq!(store.count().unwrap(), 2);

    let purged = DuplicateReconciler::new().run(&store).unwrap();

    // Full removal of the group, not reduction to one survivor
    assert_eq!(purged, 2);
    assert_eq!(store.count().unwrap(), 0);
    assert_eq!(store.count_for_key(&record.natural_key()).unwrap(), 0);
}

#[test]
fn full_batch_sequence_with_reconcile_is_idempotent() {
    let dir = tempdir().unwrap();

    let lines = vec![
        data_line("2023-06-15 12:00:00", "2023-06-15 12:30:00", "2", "14.5"),
        data_line("2023-06-16 08:00:00", "2023-06-16 08:45:00", "1", "9.0"),
    ];
    let input = write_input(dir.path(), &lines);
    let overflow = dir.path().join("duplicates.csv");

    let parse_result = TripFileParser::new(ParseMode::Lenient)
        .parse_file(&input)
        .unwrap();

    let store = TripStore::open_in_memory().unwrap();
    LoadCoordinator::new(&store)
        .load(&parse_result.records, &overflow, None)
        .unwrap();

    // Distinct keys only: the purge removes nothing, twice
    assert_eq!(DuplicateReconciler::new().run(&store).unwrap(), 0);
    assert_eq!(DuplicateReconciler::new().run(&store).unwrap(), 0);
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn malformed_lines_skip_without_aborting_the_batch() {
    let dir = tempdir().unwrap();

    let lines = vec![
        "short,line".to_string(),
        data_line("2023-06-15 12:00:00", "2023-06-15 12:30:00", "2", "14.5"),
        "another,short,one".to_string(),
    ];
    let input = write_input(dir.path(), &lines);
    let overflow = dir.path().join("duplicates.csv");

    let parse_result = TripFileParser::new(ParseMode::Lenient)
        .parse_file(&input)
        .unwrap();
    assert_eq!(parse_result.stats.lines_skipped, 2);
    assert_eq!(parse_result.stats.records_parsed, 1);

    let store = TripStore::open_in_memory().unwrap();
    let load_stats = LoadCoordinator::new(&store)
        .load(&parse_result.records, &overflow, None)
        .unwrap();
    assert_eq!(load_stats.loaded, 1);
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn quoting_is_disabled_so_quotes_stay_literal() {
    let dir = tempdir().unwrap();

    // A quoted "N" is not the literal N, so the flag falls back to Yes
    let line = "2,2023-06-15 12:00:00,2023-06-15 12:30:00,2,3.4,1,\"N\",142,236,1,14.5,0.5,0.5,2.0,0,0.3,0,2.5".to_string();
    let input = write_input(dir.path(), &[line]);

    let parse_result = TripFileParser::new(ParseMode::Lenient)
        .parse_file(&input)
        .unwrap();
    assert_eq!(
        parse_result.records[0].store_and_forward,
        trip_loader::StoreForwardFlag::Yes
    );
}
