use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Register style used by the drilling spreadsheets ("23-Oct-24").
pub const HOLE_DATE_FORMAT: &str = "%d-%b-%y";

/// Parse an ISO date (YYYY-MM-DD).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a register date. Empty and "Ongoing" mean no date yet.
/// ISO dates are accepted too.
pub fn parse_hole_date(s: &str) -> AppResult<Option<NaiveDate>> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("ongoing") {
        return Ok(None);
    }

    NaiveDate::parse_from_str(s, HOLE_DATE_FORMAT)
        .ok()
        .or_else(|| parse_date(s))
        .map(Some)
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Inverse of `parse_hole_date`: `None` renders as "Ongoing".
pub fn format_hole_date(d: Option<NaiveDate>) -> String {
    match d {
        Some(d) => d.format(HOLE_DATE_FORMAT).to_string(),
        None => "Ongoing".to_string(),
    }
}
