//! Statutory break rule: more than 6 hours of work needs 45 minutes of
//! break, more than 8 hours needs 60.

pub const SHORT_DAY_HOURS: f64 = 6.0;
pub const LONG_DAY_HOURS: f64 = 8.0;

pub const SHORT_DAY_BREAK: u32 = 45;
pub const LONG_DAY_BREAK: u32 = 60;

/// Required break in minutes for the given worked hours.
/// Boundaries belong to the lower bracket (6.0h → 0, 8.0h → 45).
pub fn required_break_minutes(worked_hours: f64) -> u32 {
    if worked_hours <= SHORT_DAY_HOURS {
        0
    } else if worked_hours <= LONG_DAY_HOURS {
        SHORT_DAY_BREAK
    } else {
        LONG_DAY_BREAK
    }
}

/// A day with no required break is always compliant.
pub fn is_break_compliant(break_minutes: f64, required: u32) -> bool {
    required == 0 || break_minutes >= f64::from(required)
}
