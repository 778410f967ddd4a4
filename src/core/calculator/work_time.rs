//! Worked time and break time for one day.

use crate::utils::time::minutes_between;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorkTime {
    pub worked_minutes: f64,
    pub break_minutes: f64,
}

impl WorkTime {
    pub fn worked_hours(&self) -> f64 {
        self.worked_minutes / 60.0
    }
}

/// Duration of the break, only when both endpoints are known.
pub fn calculate_break_minutes(
    break_start: Option<NaiveDateTime>,
    break_end: Option<NaiveDateTime>,
) -> f64 {
    match (break_start, break_end) {
        (Some(s), Some(e)) => minutes_between(s, e),
        _ => 0.0,
    }
}

/// Span between clock-in and clock-out minus the break, clamped at zero.
/// No partial credit: a missing clock endpoint gives 0.
pub fn calculate_worked_minutes(
    clock_in: Option<NaiveDateTime>,
    clock_out: Option<NaiveDateTime>,
    break_start: Option<NaiveDateTime>,
    break_end: Option<NaiveDateTime>,
) -> f64 {
    let (Some(start), Some(end)) = (clock_in, clock_out) else {
        return 0.0;
    };

    let total = minutes_between(start, end) - calculate_break_minutes(break_start, break_end);
    total.max(0.0)
}

pub fn calculate_work_time(
    clock_in: Option<NaiveDateTime>,
    clock_out: Option<NaiveDateTime>,
    break_start: Option<NaiveDateTime>,
    break_end: Option<NaiveDateTime>,
) -> WorkTime {
    WorkTime {
        worked_minutes: calculate_worked_minutes(clock_in, clock_out, break_start, break_end),
        break_minutes: calculate_break_minutes(break_start, break_end),
    }
}
