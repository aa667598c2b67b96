//! Command routing logic for CLI

use crate::args::{CacheAction, Cli, Commands, ConfigAction};
use crate::commands;
use anyhow::Result;
use deckgen_core::config::load_config;
use std::path::Path;
use tracing::debug;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> Result<()> {
    let config_path = Path::new(&cli.config);

    // Config commands work on the file itself, possibly before it exists
    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::show(config_path),
            ConfigAction::Init { force } => commands::config::init(config_path, *force),
        };
    }

    let config = load_config(config_path)?;
    debug!(verbose = cli.verbose, "Dispatching command");

    match cli.command {
        Commands::Generate {
            topic,
            out,
            markdown,
        } => commands::generate::run(config, cli.verbose, &topic, out, markdown).await,
        Commands::Compile { deck, out } => commands::compile::run(&deck, out.as_deref()),
        Commands::Cache { action } => match action {
            CacheAction::List => commands::cache::list(&config),
            CacheAction::Show { index } => commands::cache::show(&config, index),
            CacheAction::Remove { topic } => commands::cache::remove(&config, &topic),
            CacheAction::Clear => commands::cache::clear(&config),
        },
        Commands::View { index } => commands::view::run(config, index).await,
        Commands::Config { .. } => Ok(()),
    }
}
