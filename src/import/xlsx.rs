// src/import/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, RawRow};
use crate::utils::excel_date::{excel_serial_to_cell, parse_iso_cell};
use crate::utils::path::has_allowed_extension;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Read the attendance rows from the first sheet of a workbook.
///
/// - row 1 holds the headers; blank headers are ignored
/// - data rows whose first cell is empty are skipped
/// - cells beyond a short row are stored as empty
pub fn read_attendance(path: &Path) -> AppResult<Vec<RawRow>> {
    if !path.exists() {
        return Err(AppError::InvalidInput(format!(
            "File not found: {}",
            path.display()
        )));
    }

    if !has_allowed_extension(path) {
        return Err(AppError::InvalidInput(format!(
            "Unsupported file type: {} (expected .xlsx, .xls or .xlsm)",
            path.display()
        )));
    }

    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::InvalidInput(format!("{} has no sheets", path.display())))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut sheet_rows = range.rows();

    let Some(header_row) = sheet_rows.next() else {
        return Ok(Vec::new());
    };

    let headers: Vec<Option<String>> = header_row.iter().map(header_name).collect();

    let mut rows = Vec::new();

    for row in sheet_rows {
        if row.first().is_none_or(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let mut raw = RawRow::new();
        for (i, header) in headers.iter().enumerate() {
            if let Some(h) = header {
                let value = row.get(i).map(cell_from_data).unwrap_or_default();
                raw.insert(h.clone(), value);
            }
        }
        rows.push(raw);
    }

    Ok(rows)
}

fn header_name(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        other => {
            let name = other.to_string().trim().to_string();
            (!name.is_empty()).then_some(name)
        }
    }
}

/// Convert a calamine cell into the crate's own cell model.
pub(crate) fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => excel_serial_to_cell(dt.as_f64()).unwrap_or(CellValue::Empty),
        Data::DateTimeIso(s) => parse_iso_cell(s).unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
