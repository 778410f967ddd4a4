// src/export/json_csv.rs

use crate::core::aggregator::employee_summaries;
use crate::errors::AppResult;
use crate::export::model::{DetailExport, JsonReport, OverviewExport};
use crate::export::notify_export_success;
use crate::models::Aggregation;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: summaries, business units and every record.
pub(crate) fn export_json(agg: &Aggregation, path: &Path) -> AppResult<()> {
    info(format!("Writing JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&JsonReport::new(agg))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export the overview table (header incluso grazie a serde).
pub(crate) fn export_overview_csv(agg: &Aggregation, path: &Path) -> AppResult<()> {
    info(format!("Writing CSV overview: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for summary in employee_summaries(&agg.employees).iter() {
        wtr.serialize(OverviewExport::from(summary))?;
    }

    wtr.flush()?;

    notify_export_success("CSV overview", path);
    Ok(())
}

/// Export every daily record, one line each, grouped by employee.
pub(crate) fn export_details_csv(agg: &Aggregation, path: &Path) -> AppResult<()> {
    info(format!("Writing CSV details: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for record in agg.employees.values().flatten() {
        wtr.serialize(DetailExport::from(record))?;
    }

    wtr.flush()?;

    notify_export_success("CSV details", path);
    Ok(())
}
