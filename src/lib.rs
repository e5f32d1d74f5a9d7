//! scriptboard library root.
//! Exposes the CLI parser, the high-level run() function, and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use db::store::SqliteStore;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = SqliteStore::new(cfg.store_config());

    match &cli.command {
        None => cli::commands::serve::handle(None, cfg),
        Some(Commands::Serve { bind }) => cli::commands::serve::handle(bind.as_deref(), cfg),
        Some(Commands::Init) => cli::commands::init::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(Commands::Sources) => cli::commands::sources::handle(&store),
        Some(cmd @ Commands::Events { .. }) => cli::commands::events::handle(cmd, &store),
        Some(cmd @ Commands::Calendar { .. }) => cli::commands::calendar::handle(cmd, &store),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, &store),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve configuration once: file, then .env / environment
    let mut cfg = Config::load()?;

    // 3️⃣ the --db flag wins over everything else
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
