// src/export/model.rs

use crate::core::aggregator::{business_summaries, employee_summaries};
use crate::models::{Aggregation, BusinessLedger, DailyRecord, EmployeeLedger, SummaryRow};
use crate::utils::time::format_time;
use serde::Serialize;

pub const OVERVIEW_SHEET: &str = "一覧";
pub const BUSINESS_SHEET_PREFIX: &str = "事業別_";

const OVERVIEW_HEADERS: [&str; 6] = [
    "従業員名",
    "事業所名",
    "勤務日数",
    "総労働時間",
    "平均労働時間",
    "休憩違反日数",
];

const BUSINESS_HEADERS: [&str; 5] = [
    "従業員名",
    "勤務日数",
    "総労働時間",
    "平均労働時間",
    "休憩違反日数",
];

const DETAIL_HEADERS: [&str; 9] = [
    "日付",
    "出勤時刻",
    "退勤時刻",
    "労働時間",
    "休憩開始",
    "休憩終了時間",
    "休憩時間",
    "法定休憩",
    "休憩チェック",
];

#[derive(Debug, Clone, PartialEq)]
pub enum TableCell {
    Text(String),
    Count(usize),
}

impl TableCell {
    pub fn as_text(&self) -> String {
        match self {
            TableCell::Text(s) => s.clone(),
            TableCell::Count(n) => n.to_string(),
        }
    }
}

impl From<String> for TableCell {
    fn from(s: String) -> Self {
        TableCell::Text(s)
    }
}

impl From<&str> for TableCell {
    fn from(s: &str) -> Self {
        TableCell::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Plain,
    /// Detail row with a compliant break.
    Compliant,
    /// Detail row with a break shorter than required.
    Violation,
    Total,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub style: RowStyle,
}

/// A named table, rendered as one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
    /// First column rendered centered in data rows.
    pub center_from: usize,
}

/// Tables of the main report: overview, one detail table per employee,
/// one overview per business unit.
pub fn summary_report_tables(agg: &Aggregation) -> Vec<ReportTable> {
    let mut tables = vec![employee_overview_table(&agg.employees)];

    for (name, records) in &agg.employees {
        tables.push(detail_table(name, records));
    }

    for (unit, persons) in &agg.businesses {
        tables.push(business_overview_table(
            &format!("{BUSINESS_SHEET_PREFIX}{unit}"),
            persons,
        ));
    }

    tables
}

/// Tables of a per-unit report: the unit overview plus the detail table of
/// each of its employees (only their records for this unit).
pub fn business_report_tables(persons: &BusinessLedger) -> Vec<ReportTable> {
    let mut tables = vec![business_overview_table(OVERVIEW_SHEET, persons)];

    for (name, records) in persons {
        tables.push(detail_table(name, records));
    }

    tables
}

pub fn employee_overview_table(
    employees: &std::collections::BTreeMap<String, EmployeeLedger>,
) -> ReportTable {
    let rows = employee_summaries(employees)
        .iter()
        .map(|s| TableRow {
            cells: vec![
                s.name.as_str().into(),
                s.business_label_str().into(),
                TableCell::Count(s.day_count),
                format_time(s.total_minutes).into(),
                format_time(s.average_minutes).into(),
                TableCell::Count(s.violation_days),
            ],
            style: RowStyle::Plain,
        })
        .collect();

    ReportTable {
        name: OVERVIEW_SHEET.to_string(),
        headers: OVERVIEW_HEADERS.to_vec(),
        rows,
        center_from: 2,
    }
}

pub fn business_overview_table(name: &str, persons: &BusinessLedger) -> ReportTable {
    let rows = business_summaries(persons)
        .iter()
        .map(|s| TableRow {
            cells: vec![
                s.name.as_str().into(),
                TableCell::Count(s.day_count),
                format_time(s.total_minutes).into(),
                format_time(s.average_minutes).into(),
                TableCell::Count(s.violation_days),
            ],
            style: RowStyle::Plain,
        })
        .collect();

    ReportTable {
        name: name.to_string(),
        headers: BUSINESS_HEADERS.to_vec(),
        rows,
        center_from: 1,
    }
}

/// Day-by-day table of one employee, closed by a totals row.
pub fn detail_table(name: &str, records: &[DailyRecord]) -> ReportTable {
    let mut rows: Vec<TableRow> = records.iter().map(detail_row).collect();

    let summary = SummaryRow::from_ledger(name, records);
    let blank = || TableCell::from("");
    let totals = vec![
        "合計".into(),
        blank(),
        blank(),
        format_time(summary.total_minutes).into(),
        blank(),
        blank(),
        blank(),
        blank(),
        format!("違反: {}日", summary.violation_days).into(),
    ];

    rows.push(TableRow {
        cells: totals,
        style: RowStyle::Total,
    });

    ReportTable {
        name: name.to_string(),
        headers: DETAIL_HEADERS.to_vec(),
        rows,
        center_from: 0,
    }
}

fn detail_row(r: &DailyRecord) -> TableRow {
    TableRow {
        cells: vec![
            r.date_str().into(),
            DailyRecord::hhmm(r.clock_in).into(),
            DailyRecord::hhmm(r.clock_out).into(),
            format_time(r.worked_minutes).into(),
            DailyRecord::hhmm(r.break_start).into(),
            DailyRecord::hhmm(r.break_end).into(),
            format_time(r.break_minutes).into(),
            required_break_label(r.required_break_minutes).into(),
            check_mark(r.break_compliant).into(),
        ],
        style: if r.break_compliant {
            RowStyle::Compliant
        } else {
            RowStyle::Violation
        },
    }
}

pub fn required_break_label(required: u32) -> String {
    if required > 0 {
        format!("{required}分")
    } else {
        "不要".to_string()
    }
}

pub fn check_mark(compliant: bool) -> &'static str {
    if compliant { "✓" } else { "✗" }
}

/// Flat overview row for CSV export.
#[derive(Serialize, Clone, Debug)]
pub struct OverviewExport {
    pub employee: String,
    pub business_units: String,
    pub day_count: usize,
    pub total_worked: String,
    pub average_worked: String,
    pub violation_days: usize,
    pub total_minutes: f64,
    pub average_minutes: f64,
}

impl From<&SummaryRow> for OverviewExport {
    fn from(s: &SummaryRow) -> Self {
        Self {
            employee: s.name.clone(),
            business_units: s.business_label_str().to_string(),
            day_count: s.day_count,
            total_worked: format_time(s.total_minutes),
            average_worked: format_time(s.average_minutes),
            violation_days: s.violation_days,
            total_minutes: s.total_minutes,
            average_minutes: s.average_minutes,
        }
    }
}

/// Flat detail row for CSV export.
#[derive(Serialize, Clone, Debug)]
pub struct DetailExport {
    pub employee: String,
    pub employee_id: String,
    pub business_unit: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub worked: String,
    pub break_start: String,
    pub break_end: String,
    pub break_time: String,
    pub required_break_minutes: u32,
    pub break_compliant: bool,
    pub worked_minutes: f64,
    pub break_minutes: f64,
}

impl From<&DailyRecord> for DetailExport {
    fn from(r: &DailyRecord) -> Self {
        Self {
            employee: r.employee_name.clone(),
            employee_id: r.employee_id.clone(),
            business_unit: r.business_unit.clone().unwrap_or_default(),
            date: r.date_str(),
            clock_in: DailyRecord::hhmm(r.clock_in),
            clock_out: DailyRecord::hhmm(r.clock_out),
            worked: format_time(r.worked_minutes),
            break_start: DailyRecord::hhmm(r.break_start),
            break_end: DailyRecord::hhmm(r.break_end),
            break_time: format_time(r.break_minutes),
            required_break_minutes: r.required_break_minutes,
            break_compliant: r.break_compliant,
            worked_minutes: r.worked_minutes,
            break_minutes: r.break_minutes,
        }
    }
}

/// Business unit summaries for the JSON report.
#[derive(Serialize, Clone, Debug)]
pub struct BusinessExport<'a> {
    pub name: &'a str,
    pub summaries: Vec<SummaryRow>,
}

/// Whole-run JSON document.
#[derive(Serialize, Clone, Debug)]
pub struct JsonReport<'a> {
    pub summaries: Vec<SummaryRow>,
    pub businesses: Vec<BusinessExport<'a>>,
    pub employees: &'a std::collections::BTreeMap<String, EmployeeLedger>,
}

impl<'a> JsonReport<'a> {
    pub fn new(agg: &'a Aggregation) -> Self {
        Self {
            summaries: employee_summaries(&agg.employees),
            businesses: agg
                .businesses
                .iter()
                .map(|(name, persons)| BusinessExport {
                    name,
                    summaries: business_summaries(persons),
                })
                .collect(),
            employees: &agg.employees,
        }
    }
}
