//! Configuration
//!
//! Values come from a TOML or JSON file, then environment variables, and
//! are validated before anything is built from them.

pub mod env_loader;
pub mod file_loader;
mod logging_config;
mod model;
mod validation;

pub use env_loader::{apply_env_overrides, apply_overrides};
pub use file_loader::{load_from_file, save_to_file};
pub use logging_config::LoggingConfig;
pub use model::{CacheConfig, DEFAULT_CONFIG_FILE, DeckgenConfig, InputConfig};
pub use validation::validate_config;

use crate::error::DeckResult;
use std::path::Path;
use tracing::debug;

/// Load, override from the environment and validate
pub fn load_config(path: &Path) -> DeckResult<DeckgenConfig> {
    let mut config = load_from_file(path)?;
    apply_env_overrides(&mut config)?;
    validate_config(&config)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
