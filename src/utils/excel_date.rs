use crate::models::CellValue;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Interpret an Excel serial number as a cell value.
///
/// Serials below 1 carry no date part and become time-of-day cells.
pub(crate) fn excel_serial_to_cell(serial: f64) -> Option<CellValue> {
    let dt = excel_serial_to_naive_datetime(serial)?;

    if (0.0..1.0).contains(&serial) {
        Some(CellValue::Time(dt.time()))
    } else {
        Some(CellValue::DateTime(dt))
    }
}

fn excel_serial_to_naive_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86400.0).round() as i64;

    excel_epoch.checked_add_signed(Duration::try_seconds(seconds)?)
}

/// Parse ISO 8601 strings as produced for date cells by some writers.
pub(crate) fn parse_iso_cell(s: &str) -> Option<CellValue> {
    let dt_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(CellValue::DateTime(dt));
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(CellValue::DateTime);
    }

    let time_formats = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

    for fmt in time_formats.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(CellValue::Time(t));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_below_one_is_time_of_day() {
        assert_eq!(
            excel_serial_to_cell(0.5),
            Some(CellValue::Time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()))
        );
        assert_eq!(
            excel_serial_to_cell(0.375),
            Some(CellValue::Time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()))
        );
    }

    #[test]
    fn test_serial_uses_1899_12_30_epoch() {
        // 45383 is 2024-04-01, .5 adds noon
        let expected = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(excel_serial_to_cell(45383.5), Some(CellValue::DateTime(expected)));
        assert_eq!(excel_serial_to_cell(f64::NAN), None);
    }

    #[test]
    fn test_parse_iso_cell_shapes() {
        let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        assert_eq!(
            parse_iso_cell("2024-04-01T09:30:00"),
            Some(CellValue::DateTime(day.and_hms_opt(9, 30, 0).unwrap()))
        );
        assert_eq!(
            parse_iso_cell("2024-04-01"),
            Some(CellValue::DateTime(day.and_hms_opt(0, 0, 0).unwrap()))
        );
        assert_eq!(
            parse_iso_cell("18:45:00"),
            Some(CellValue::Time(NaiveTime::from_hms_opt(18, 45, 0).unwrap()))
        );
        assert_eq!(parse_iso_cell("yesterday"), None);
    }
}
