//! File-based configuration loading

use super::model::DeckgenConfig;
use crate::error::{DeckError, DeckResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON and TOML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> DeckResult<DeckgenConfig> {
    if !path.exists() {
        return Ok(DeckgenConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        DeckError::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            DeckError::config(format!(
                "Failed to parse JSON config '{}': {}",
                path.display(),
                e
            ))
        })?,
        _ => toml::from_str(&content).map_err(|e| {
            DeckError::config(format!(
                "Failed to parse TOML config '{}': {}",
                path.display(),
                e
            ))
        })?,
    };

    Ok(config)
}

/// Write configuration to a file, in the format implied by its extension
pub fn save_to_file(config: &DeckgenConfig, path: &Path) -> DeckResult<()> {
    let content = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::to_string_pretty(config)?,
        _ => toml::to_string_pretty(config)
            .map_err(|e| DeckError::config(format!("Failed to serialize config: {}", e)))?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
