//! Tests for the trip file parser and field normalizers


use csv::StringRecord;

/// Build a full-width sample data line in the fixed input column layout
///
/// Columns beyond the nine retained ones carry filler values; the line
/// always yields 18 fields.
pub fn sample_line(
    pickup: &str,
    dropoff: &str,
    passengers: &str,
    distance: &str,
    flag: &str,
    pickup_zone: &str,
    dropoff_zone: &str,
    fare: &str,
    tip: &str,
) -> String {
    format!(
        "2,{pickup},{dropoff},{passengers},{distance},1,{flag},{pickup_zone},{dropoff_zone},1,{fare},0.5,0.5,{tip},0,0.3,0,2.5"
    )
}

/// Split a raw line into a record the way the parser does
pub fn string_record(line: &str) -> StringRecord {
    super::parser::split_line(line)
}
