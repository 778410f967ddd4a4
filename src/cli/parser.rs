use crate::export::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to summarize attendance spreadsheets
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize attendance spreadsheets: worked hours, statutory breaks, per-employee and per-site reports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Summarize an attendance workbook
    Summarize {
        /// Attendance workbook (.xlsx, .xls or .xlsm)
        input: String,

        #[arg(long = "out-dir", value_name = "DIR", help = "Directory for generated reports")]
        out_dir: Option<String>,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ReportFormat,

        #[arg(
            long = "no-business-files",
            help = "Do not write one extra workbook per business unit"
        )]
        no_business_files: bool,

        #[arg(long, short = 'f', help = "Overwrite existing report files")]
        force: bool,
    },
}
