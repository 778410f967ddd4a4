// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{ReportTable, RowStyle, TableCell};
use crate::export::notify_export_success;
use crate::export::sheet_names::SheetNamer;
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x366092;
const VIOLATION_BG: u32 = 0xFFF2CC;
const CHECK_OK_BG: u32 = 0xC6EFCE;
const CHECK_NG_BG: u32 = 0xFFC7CE;

/// Narrowest column, wide enough for `H:MM` figures and short headers.
const MIN_COL_WIDTH: usize = 10;

/// Write every table as one worksheet, in order.
pub(crate) fn export_xlsx(tables: &[ReportTable], path: &Path, label: &str) -> AppResult<()> {
    info(format!("Writing XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let mut namer = SheetNamer::new();

    for table in tables {
        let worksheet = render_table(table, &namer.assign(&table.name))?;
        workbook.push_worksheet(worksheet);
    }

    workbook.save(path)?;

    notify_export_success(label, path);
    Ok(())
}

fn render_table(table: &ReportTable, sheet_name: &str) -> AppResult<Worksheet> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(sheet_name)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_font_size(11)
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    // ---------------------------
    // Data rows
    // ---------------------------
    let last_col = table.headers.len().saturating_sub(1);

    for (row_index, row) in table.rows.iter().enumerate() {
        let excel_row = (row_index + 1) as u32;

        for (col, cell) in row.cells.iter().enumerate() {
            let centered = col >= table.center_from;
            let format = cell_format(row.style, centered, col == last_col);

            match cell {
                TableCell::Text(s) => {
                    worksheet.write_with_format(excel_row, col as u16, s.as_str(), &format)?;
                }
                TableCell::Count(n) => {
                    worksheet.write_with_format(excel_row, col as u16, *n as f64, &format)?;
                }
            }

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(cell.as_text().as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        let width = (*w).max(MIN_COL_WIDTH) as f64 + 2.0;
        worksheet.set_column_width(c as u16, width)?;
    }

    Ok(worksheet)
}

/// Body cell style: thin border everywhere, violation rows tinted, the
/// check column coloured by outcome, totals in bold.
fn cell_format(style: RowStyle, centered: bool, is_check_col: bool) -> Format {
    let mut fmt = Format::new().set_border(FormatBorder::Thin);

    if centered {
        fmt = fmt
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
    }

    let fill = match style {
        RowStyle::Compliant if is_check_col => Some(CHECK_OK_BG),
        RowStyle::Violation if is_check_col => Some(CHECK_NG_BG),
        RowStyle::Violation => Some(VIOLATION_BG),
        _ => None,
    };

    if let Some(rgb) = fill {
        fmt = fmt
            .set_background_color(Color::RGB(rgb))
            .set_pattern(FormatPattern::Solid);
    }

    if style == RowStyle::Total {
        fmt = fmt.set_bold();
    }

    fmt
}
