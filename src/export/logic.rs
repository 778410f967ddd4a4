// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ReportFormat;
use crate::export::fs_utils::{ensure_writable, safe_file_component};
use crate::export::json_csv::{export_details_csv, export_json, export_overview_csv};
use crate::export::model::{business_report_tables, summary_report_tables};
use crate::export::xlsx::export_xlsx;
use crate::models::Aggregation;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Where and how reports are written.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub out_dir: PathBuf,
    pub file_prefix: String,
    /// Tag shared by every file of one run (`YYYYmmddHHMMSS`).
    pub timestamp: String,
    pub business_files: bool,
    pub force: bool,
}

/// Files produced by one run.
#[derive(Debug, Clone, Default)]
pub struct ReportOutcome {
    pub files: Vec<PathBuf>,
    pub business_files: BTreeMap<String, PathBuf>,
    pub employee_count: usize,
    pub business_count: usize,
}

/// High-level report generation.
pub struct ReportLogic;

impl ReportLogic {
    /// Write the report set for `agg`.
    ///
    /// - xlsx: `<prefix>_<ts>.xlsx` plus, when enabled, one
    ///   `<prefix>_<unit>_<ts>.xlsx` per business unit
    /// - csv: `<prefix>_<ts>_overview.csv` and `<prefix>_<ts>_details.csv`
    /// - json: `<prefix>_<ts>.json`
    pub fn export(agg: &Aggregation, opts: &ReportOptions) -> AppResult<ReportOutcome> {
        if opts.file_prefix.trim().is_empty() {
            return Err(AppError::Export("file prefix must not be empty".into()));
        }

        fs::create_dir_all(&opts.out_dir)?;

        let mut outcome = ReportOutcome {
            employee_count: agg.employee_count(),
            business_count: agg.business_count(),
            ..Default::default()
        };

        let base = format!("{}_{}", opts.file_prefix, opts.timestamp);

        match opts.format {
            ReportFormat::Xlsx => {
                let path = prepare(&opts.out_dir, &format!("{base}.xlsx"), opts.force)?;
                export_xlsx(&summary_report_tables(agg), &path, "XLSX report")?;
                outcome.files.push(path);

                if opts.business_files {
                    for (unit, persons) in &agg.businesses {
                        let file_name = format!(
                            "{}_{}_{}.xlsx",
                            opts.file_prefix,
                            safe_file_component(unit),
                            opts.timestamp
                        );
                        let path = prepare(&opts.out_dir, &file_name, opts.force)?;
                        export_xlsx(
                            &business_report_tables(persons),
                            &path,
                            &format!("XLSX report for {unit}"),
                        )?;
                        outcome.business_files.insert(unit.clone(), path);
                    }
                }
            }
            ReportFormat::Csv => {
                let overview = prepare(&opts.out_dir, &format!("{base}_overview.csv"), opts.force)?;
                export_overview_csv(agg, &overview)?;
                outcome.files.push(overview);

                let details = prepare(&opts.out_dir, &format!("{base}_details.csv"), opts.force)?;
                export_details_csv(agg, &details)?;
                outcome.files.push(details);
            }
            ReportFormat::Json => {
                let path = prepare(&opts.out_dir, &format!("{base}.json"), opts.force)?;
                export_json(agg, &path)?;
                outcome.files.push(path);
            }
        }

        Ok(outcome)
    }
}

fn prepare(dir: &Path, file_name: &str, force: bool) -> AppResult<PathBuf> {
    let path = dir.join(file_name);
    ensure_writable(&path, force)?;
    Ok(path)
}
