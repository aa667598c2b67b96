//! deckgen CLI application
//!
//! Turns a topic description into a remark.js slide deck.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/deckgen-cli
//! ```
//!
//! Generation needs `OPENAI_API_KEY`. Every generated deck is cached under
//! the exact topic text, so asking for the same topic again is free and
//! does not count against the request quota.

mod args;
mod commands;
mod console;
mod router;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use deckgen_core::config::env_loader::ENV_LOG_LEVEL;
use deckgen_core::config::load_from_file;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    router::route(cli).await
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level
fn init_logging(cli: &Cli) {
    let logging = load_from_file(Path::new(&cli.config))
        .map(|config| config.logging)
        .unwrap_or_default();

    let default_directive = if cli.verbose {
        "debug".to_string()
    } else {
        std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| logging.level.clone())
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.is_json() {
        builder.json().init();
    } else {
        builder.init();
    }
}
