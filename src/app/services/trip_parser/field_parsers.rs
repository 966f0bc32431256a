//! Field normalization functions for trip record fields
//!
//! The lenient functions are pure and total: a value that fails to parse
//! falls back to a fixed default instead of surfacing an error. The
//! strict companions return a validation error for the same inputs.

use crate::app::models::StoreForwardFlag;
use crate::{Error, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc, Weekday};

/// Accepted timestamp layouts, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

/// Parse a wall-clock timestamp, yielding `None` on failure
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// Parse a wall-clock timestamp, failing on unparsable input
pub fn parse_datetime_strict(value: &str, field_name: &str) -> Result<NaiveDateTime> {
    parse_datetime(value).ok_or_else(|| {
        Error::data_validation(format!(
            "Invalid datetime for {}: '{}'",
            field_name,
            value.trim()
        ))
    })
}

/// Convert a parsed US Eastern wall-clock time to UTC
///
/// An absent value (unparsable input) yields the earliest representable
/// UTC timestamp. This fallback-to-minimum sentinel is a preserved
/// compatibility behavior and bypasses zone conversion entirely.
pub fn eastern_to_utc(local: Option<NaiveDateTime>) -> DateTime<Utc> {
    let Some(naive) = local else {
        return DateTime::<Utc>::MIN_UTC;
    };

    let offset_hours = if in_eastern_dst(&naive) { 4 } else { 5 };
    DateTime::from_naive_utc_and_offset(naive + Duration::hours(offset_hours), Utc)
}

/// Whether an Eastern wall-clock time falls inside daylight saving time
///
/// Post-2007 rule: second Sunday of March 02:00 through first Sunday of
/// November. Pre-2007: first Sunday of April through last Sunday of
/// October. The end bound is expressed as 01:00 wall clock so the
/// ambiguous fall-back hour resolves to standard time.
fn in_eastern_dst(local: &NaiveDateTime) -> bool {
    let year = local.year();

    let (start_date, end_date) = if year >= 2007 {
        (
            NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2),
            NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1),
        )
    } else {
        (
            NaiveDate::from_weekday_of_month_opt(year, 4, Weekday::Sun, 1),
            last_weekday_of_month(year, 10, Weekday::Sun),
        )
    };

    match (
        start_date.and_then(|d| d.and_hms_opt(2, 0, 0)),
        end_date.and_then(|d| d.and_hms_opt(1, 0, 0)),
    ) {
        (Some(start), Some(end)) => *local >= start && *local < end,
        _ => false,
    }
}

/// Last occurrence of a weekday within a month
fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, 5)
        .or_else(|| NaiveDate::from_weekday_of_month_opt(year, month, weekday, 4))
}

/// Parse a base-10 integer, yielding zero on failure
pub fn parse_int(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// Parse a base-10 integer, failing on unparsable input
pub fn parse_int_strict(value: &str, field_name: &str) -> Result<i64> {
    let trimmed = value.trim();
    trimmed.parse().map_err(|e| {
        Error::data_validation(format!(
            "Invalid integer for {}: '{}' ({})",
            field_name, trimmed, e
        ))
    })
}

/// Parse a decimal value, yielding zero on failure
pub fn parse_decimal(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

/// Parse a decimal value, failing on unparsable input
pub fn parse_decimal_strict(value: &str, field_name: &str) -> Result<f64> {
    let trimmed = value.trim();
    trimmed.parse().map_err(|e| {
        Error::data_validation(format!(
            "Invalid decimal for {}: '{}' ({})",
            field_name, trimmed, e
        ))
    })
}

/// Map a raw store-and-forward value to its flag
///
/// Total by construction: `"N"` maps to `No`, everything else to `Yes`.
pub fn parse_flag(value: &str) -> StoreForwardFlag {
    StoreForwardFlag::from_raw(value)
}
