use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One employee's attendance for one day, as derived from a single input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub employee_name: String,
    pub employee_id: String,
    pub business_unit: Option<String>,

    pub clock_in: Option<NaiveDateTime>,
    pub clock_out: Option<NaiveDateTime>,
    pub break_start: Option<NaiveDateTime>,
    pub break_end: Option<NaiveDateTime>,

    pub worked_minutes: f64, // net of break, never negative
    pub worked_hours: f64,
    pub break_minutes: f64,
    pub required_break_minutes: u32, // 0, 45 or 60
    pub break_compliant: bool,
}

impl DailyRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y/%m/%d").to_string()
    }

    /// `HH:MM` of an optional instant, empty when absent.
    pub fn hhmm(instant: Option<NaiveDateTime>) -> String {
        instant
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    pub fn is_violation(&self) -> bool {
        !self.break_compliant
    }
}
