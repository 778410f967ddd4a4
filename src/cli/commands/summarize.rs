use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::{ReportLogic, ReportOptions};
use crate::import::read_attendance;
use crate::ui::messages::{field, header, info, warning};
use crate::utils::date::file_timestamp;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summarize {
        input,
        out_dir,
        format,
        no_business_files,
        force,
    } = cmd
    {
        let input_path = expand_tilde(input);
        info(format!("Reading attendance data: {}", input_path.display()));

        let rows = read_attendance(&input_path)?;
        let (aggregation, stats) = Core::process_with_stats(&rows, &cfg.columns);

        if stats.rows_dropped > 0 {
            warning(format!(
                "{} row(s) skipped: missing or unreadable work date or employee name",
                stats.rows_dropped
            ));
        }

        if aggregation.is_empty() {
            warning("No attendance records found.");
        }

        let opts = ReportOptions {
            format: *format,
            out_dir: out_dir
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| cfg.output_dir()),
            file_prefix: cfg.file_prefix.clone(),
            timestamp: file_timestamp(),
            business_files: cfg.business_files && !*no_business_files,
            force: *force,
        };

        let outcome = ReportLogic::export(&aggregation, &opts)?;

        header("Summary");
        field("Rows read", stats.rows_read);
        field("Records", aggregation.record_count());
        field("Employees", outcome.employee_count);
        field("Business units", outcome.business_count);
        field("Format", format.as_str());
        for file in &outcome.files {
            field("Output", file.display());
        }
        for (unit, file) in &outcome.business_files {
            field(unit, file.display());
        }
    }
    Ok(())
}
