//! Raw sheet row → DailyRecord.

use crate::config::ColumnLayout;
use crate::core::calculator::compliance::{is_break_compliant, required_break_minutes};
use crate::core::calculator::work_time::calculate_work_time;
use crate::models::{DailyRecord, RawRow};
use crate::utils::date::parse_work_date;
use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveDateTime};

/// Build the daily record for one row.
///
/// Returns `None` when the work date or employee name is missing, or the
/// work date cannot be read. Bad timestamps only zero the durations.
pub fn normalize_row(row: &RawRow, columns: &ColumnLayout) -> Option<DailyRecord> {
    let date_cell = row.get(&columns.work_date)?;
    let employee_name = row.get(&columns.employee_name)?.as_text()?;
    let date = parse_work_date(date_cell)?;

    let clock_in = parse_time(row.get(&columns.clock_in), date);
    let clock_out = parse_time(row.get(&columns.clock_out), date);
    let break_start = parse_time(row.get(&columns.break_start), date);
    let break_end = first_parsed(row, &columns.break_end, date);

    let work = calculate_work_time(clock_in, clock_out, break_start, break_end);

    // required break is derived from hours already net of the break
    let worked_hours = work.worked_hours();
    let required = required_break_minutes(worked_hours);

    Some(DailyRecord {
        date,
        employee_name,
        employee_id: row
            .get(&columns.employee_id)
            .and_then(|c| c.as_text())
            .unwrap_or_default(),
        business_unit: row.get(&columns.business_unit).and_then(|c| c.as_text()),
        clock_in,
        clock_out,
        break_start,
        break_end,
        worked_minutes: work.worked_minutes,
        worked_hours,
        break_minutes: work.break_minutes,
        required_break_minutes: required,
        break_compliant: is_break_compliant(work.break_minutes, required),
    })
}

/// First header among `headers` whose cell parses to an instant.
fn first_parsed(row: &RawRow, headers: &[String], anchor: NaiveDate) -> Option<NaiveDateTime> {
    headers.iter().find_map(|h| parse_time(row.get(h), anchor))
}
