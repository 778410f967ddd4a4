#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADERS: [&str; 8] = [
    "勤務日",
    "従業員名",
    "従業員番号",
    "事業所名",
    "出勤時刻",
    "退勤時刻",
    "休憩1開始時刻",
    "休憩1終了時刻",
];

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_workspace(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtimesheet_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp workspace");
    path
}

/// Write a single-sheet workbook with a header row and text cells.
pub fn write_fixture(path: &Path, headers: &[&str], rows: &[Vec<&str>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, h) in headers.iter().enumerate() {
        worksheet.write(0, col as u16, *h).expect("write header");
    }

    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                worksheet
                    .write((r + 1) as u32, col as u16, *value)
                    .expect("write cell");
            }
        }
    }

    workbook.save(path).expect("save fixture");
}

/// Two employees, two business units, one row without a unit and one
/// row without a name.
pub fn standard_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["2024/04/02", "A", "1", "X", "09:00", "18:00", "12:00", "12:30"],
        vec!["2024/04/01", "A", "1", "X", "09:00", "18:00", "12:00", "12:45"],
        vec!["2024/04/01", "B", "2", "Y/Z", "10:00", "15:00", "", ""],
        vec!["2024/04/03", "B", "2", "", "10:00", "15:00", "", ""],
        vec!["2024/04/03", "", "3", "X", "10:00", "15:00", "", ""],
    ]
}

pub fn sheet_names(path: &Path) -> Vec<String> {
    let workbook = open_workbook_auto(path).expect("open output workbook");
    workbook.sheet_names()
}

/// All rows of a sheet rendered as strings.
pub fn read_sheet(path: &Path, sheet: &str) -> Vec<Vec<String>> {
    let mut workbook = open_workbook_auto(path).expect("open output workbook");
    let range = workbook.worksheet_range(sheet).expect("read sheet");
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

/// Files in `dir` whose name ends with `suffix`.
pub fn files_with_suffix(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read dir")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.to_string_lossy().ends_with(suffix))
        .collect();
    files.sort();
    files
}
