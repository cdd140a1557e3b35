//! Calendar-day helpers for the historical endpoint.

use chrono::{Datelike, NaiveDate};

/// `YYYY-MM-DD`, as used in the historical endpoint path.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Proleptic Gregorian day number, 0001-01-01 being day 1.
pub fn day_ordinal(day: NaiveDate) -> i32 {
    day.num_days_from_ce()
}
