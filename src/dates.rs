//! Canonical date forms and the day-month-year display convention.
//!
//! Storage always uses `YYYY-MM-DD` for expense dates and `YYYY-MM` for budget
//! months. The display form `DD-MM-YYYY` only appears at the edges: the export
//! file and the command layer.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{Error, Result};

const CANONICAL_DATE: &str = "%Y-%m-%d";
const DISPLAY_DATE: &str = "%d-%m-%Y";

#[allow(clippy::expect_used)]
fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("date pattern literal compiles"))
}

fn date_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$")
}

fn month_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"^[0-9]{4}-[0-9]{2}$")
}

fn display_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$")
}

/// Check that `date` is a real calendar day written as `YYYY-MM-DD`.
pub(crate) fn validate_date(date: &str) -> Result<NaiveDate> {
    if !date_pattern().is_match(date) {
        return Err(Error::Validation(format!(
            "invalid date '{date}': expected YYYY-MM-DD"
        )));
    }
    NaiveDate::parse_from_str(date, CANONICAL_DATE)
        .map_err(|_| Error::Validation(format!("'{date}' is not a calendar date")))
}

/// Check that `month` is written as `YYYY-MM` with a month between 01 and 12.
pub(crate) fn validate_month(month: &str) -> Result<()> {
    let invalid = || Error::Validation(format!("invalid month '{month}': expected YYYY-MM"));
    if !month_pattern().is_match(month) {
        return Err(invalid());
    }
    let (year, mm) = month.split_at(4);
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let mm: u32 = mm[1..].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, mm, 1).map(|_| ()).ok_or_else(invalid)
}

/// `YYYY-MM-DD` -> `DD-MM-YYYY`.
pub(crate) fn to_display(canonical: &str) -> Result<String> {
    Ok(validate_date(canonical)?.format(DISPLAY_DATE).to_string())
}

/// `DD-MM-YYYY` -> `YYYY-MM-DD`.
pub(crate) fn from_display(display: &str) -> Result<String> {
    let display = display.trim();
    let invalid = || {
        Error::Validation(format!(
            "invalid date '{display}': expected DD-MM-YYYY (e.g. 20-01-2026)"
        ))
    };
    if !display_pattern().is_match(display) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(display, DISPLAY_DATE)
        .map(|date| date.format(CANONICAL_DATE).to_string())
        .map_err(|_| invalid())
}

/// Format a date in the display convention, e.g. for export file names.
pub(crate) fn display(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE).to_string()
}
