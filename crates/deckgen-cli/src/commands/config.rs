//! Configuration management commands

use crate::console::CliConsole;
use anyhow::{Result, bail};
use deckgen_core::DeckgenConfig;
use deckgen_core::config::{apply_env_overrides, load_from_file, save_to_file, validate_config};
use std::path::Path;

/// Show current configuration
pub fn show(config_file: &Path) -> Result<()> {
    let console = CliConsole::new(true);
    console.print_header("Configuration");

    if config_file.exists() {
        console.success(&format!("Loaded configuration from: {}", config_file.display()));
    } else {
        console.warn(&format!(
            "Configuration file not found: {}, using defaults",
            config_file.display()
        ));
    }

    let mut config = load_from_file(config_file)?;
    apply_env_overrides(&mut config)?;
    print_config(&console, &config);

    if let Err(e) = validate_config(&config) {
        console.error(&e.to_string());
    }
    Ok(())
}

/// Create a new configuration file with defaults
pub fn init(config_file: &Path, force: bool) -> Result<()> {
    let console = CliConsole::new(true);

    if config_file.exists() && !force {
        bail!(
            "Configuration file already exists: {} (use --force to overwrite)",
            config_file.display()
        );
    }

    save_to_file(&DeckgenConfig::default(), config_file)?;
    console.success(&format!("Created {}", config_file.display()));
    console.info("Set OPENAI_API_KEY in the environment to enable generation");
    Ok(())
}

fn print_config(console: &CliConsole, config: &DeckgenConfig) {
    let api_key = match config.openai.api_key() {
        Some(key) => mask(key),
        None => "(not set)".to_string(),
    };

    console.field("OpenAI model", &config.openai.model);
    console.field("OpenAI base URL", &config.openai.base_url);
    console.field("OpenAI API key", api_key);
    console.field("Moderation", config.openai.moderation);
    console.field(
        "Client quota",
        format!(
            "{} per {}s",
            config.client_rate_limit.max_requests,
            config.client_rate_limit.window.as_secs()
        ),
    );
    console.field(
        "Server quota",
        format!(
            "{} per {}s{}",
            config.server_rate_limit.max_requests,
            config.server_rate_limit.window.as_secs(),
            if config.server_rate_limit.enabled { "" } else { " (disabled)" }
        ),
    );
    console.field("Cache capacity", config.cache.capacity);
    console.field("Cache file", config.cache.resolved_path().display());
    console.field("Max input length", config.input.max_length);
    console.field(
        "Logging",
        format!("{} ({})", config.logging.level, config.logging.format),
    );
}

/// Keep only the last four characters of a secret
fn mask(secret: &str) -> String {
    let tail: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{}", tail)
}
