//! Time utilities: timestamp parsing, duration computations, `H:MM` formatting.

use crate::models::CellValue;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Full date-time shapes, tried in order before the bare time-of-day ones.
const DATETIME_FORMATS: [&str; 2] = ["%Y/%m/%d %H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Time-of-day shapes.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parse a clock cell into a naive instant.
///
/// - date-time cells are returned as they are
/// - text is tried against `YYYY/MM/DD HH:MM:SS`, `YYYY-MM-DD HH:MM:SS`,
///   `HH:MM:SS`, `HH:MM` in this order, first match wins
/// - bare times (text or time-only cells) are placed on `anchor`, so both
///   endpoints of a duration taken from the same row share one date
///
/// Blank or unrecognised input yields `None`; this never fails.
pub fn parse_time(cell: Option<&CellValue>, anchor: NaiveDate) -> Option<NaiveDateTime> {
    let cell = cell?;

    match cell {
        CellValue::Empty => None,
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Time(t) => Some(anchor.and_time(*t)),
        other => parse_time_str(&other.to_string(), anchor),
    }
}

pub fn parse_time_str(s: &str, anchor: NaiveDate) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in TIME_FORMATS.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(anchor.and_time(t));
        }
    }

    None
}

/// Signed span in (fractional) minutes.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 60.0
}

/// Minutes → `H:MM`. Zero is rendered as `0:00`; fractions of a minute are
/// truncated and negative values use floor division (`-30` → `-1:30`).
pub fn format_time(minutes: f64) -> String {
    if minutes == 0.0 {
        return "0:00".to_string();
    }

    let hours = minutes.div_euclid(60.0) as i64;
    let mins = minutes.rem_euclid(60.0).floor() as i64;
    format!("{}:{:02}", hours, mins)
}
