//! Statement date handling: original-format date strings to month keys.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Month-name table for the `DD MMM [YYYY]` statement convention.
pub const MONTHS: [(&str, u32); 12] = [
    ("JAN", 1),
    ("FEB", 2),
    ("MAR", 3),
    ("APR", 4),
    ("MAY", 5),
    ("JUN", 6),
    ("JUL", 7),
    ("AUG", 8),
    ("SEP", 9),
    ("OCT", 10),
    ("NOV", 11),
    ("DEC", 12),
];

/// 3-letter month abbreviation to month number.
pub fn month_number(name: &str) -> Option<u32> {
    let upper = name.to_ascii_uppercase();
    MONTHS.iter().find(|(n, _)| *n == upper).map(|(_, m)| *m)
}

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2})\s+([A-Z]{3})\s+(\d{4})").expect("hardcoded pattern compiles")
});

/// Numeric conventions. Which of the three parts is the year is settled by
/// whichever format parses to a real calendar date.
const NUMERIC_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d", "%Y-%m-%d"];

/// Parse a supported statement date convention into a calendar date.
///
/// Accepts `DD MMM YYYY` (any case) plus the numeric forms in
/// [`NUMERIC_FORMATS`]. Dates without a 4-digit year, with a year that is
/// not plausibly modern (<= 1900), or that do not exist on the calendar
/// yield `None`.
pub fn parse_statement_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Some(caps) = DAY_MONTH_YEAR.captures(s) {
        let day = caps[1].parse::<u32>().ok();
        let month = month_number(&caps[2]);
        let year = caps[3].parse::<i32>().ok();
        if let (Some(day), Some(month), Some(year)) = (day, month, year) {
            if year > 1900 {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    return Some(date);
                }
            }
        }
    }

    NUMERIC_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .filter(|date| date.year() > 1900)
}

/// Grouping key for a transaction's month: `"YYYY-MM"`, or `"unknown"` when
/// the date is absent or undeterminable.
pub fn month_key(date: Option<&str>) -> String {
    match date.and_then(parse_statement_date) {
        Some(date) => date.format("%Y-%m").to_string(),
        None => "unknown".to_string(),
    }
}
