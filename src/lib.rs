//! rTimesheet library root.
//! Exposes the attendance pipeline (parse → normalize → aggregate), the
//! report writers and the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Summarize { .. } => cli::commands::summarize::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when the existing file is broken
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&Config::resolve_path(cli.config.as_deref()))?,
    };

    dispatch(&cli, &cfg)
}
