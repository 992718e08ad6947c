//! dienstplan-import library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sink;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Sql { .. } => cli::commands::sql::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply command-line overrides
    let mut cfg = Config::load();

    if let Some(input) = &cli.input {
        cfg.input_dir = input.clone();
    }
    if let Some(mapping) = &cli.mapping {
        cfg.mapping_file = mapping.clone();
    }

    dispatch(&cli, &cfg)
}
