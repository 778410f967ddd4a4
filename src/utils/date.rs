use crate::models::CellValue;
use chrono::{Local, NaiveDate};

/// Work-date shape accepted for text cells.
const WORK_DATE_FORMAT: &str = "%Y/%m/%d";

/// Coerce a work-date cell to a calendar date.
///
/// Date-time cells keep only their date; text must be `YYYY/MM/DD`.
/// Anything else (numbers, time-only cells, other text) is rejected.
pub fn parse_work_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Empty => None,
        other => NaiveDate::parse_from_str(other.to_string().trim(), WORK_DATE_FORMAT).ok(),
    }
}

/// Compact local timestamp used to tag generated files (`YYYYmmddHHMMSS`).
pub fn file_timestamp() -> String {
    Local::now().format("%Y%m%d%H%M%S").to_string()
}
