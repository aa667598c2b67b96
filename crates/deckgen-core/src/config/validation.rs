//! Configuration validation

use super::logging_config::LoggingConfig;
use super::model::DeckgenConfig;
use crate::error::{DeckError, DeckResult};
use crate::rate_limiter::RateLimitConfig;

/// Check a loaded configuration for values the runtime cannot work with
pub fn validate_config(config: &DeckgenConfig) -> DeckResult<()> {
    if config.openai.base_url.trim().is_empty() {
        return Err(DeckError::config("openai.base_url must not be empty"));
    }
    if !config.openai.base_url.starts_with("http://")
        && !config.openai.base_url.starts_with("https://")
    {
        return Err(DeckError::config(format!(
            "openai.base_url must be an http(s) URL, got '{}'",
            config.openai.base_url
        )));
    }
    if config.openai.model.trim().is_empty() {
        return Err(DeckError::config("openai.model must not be empty"));
    }
    if config.openai.timeout_secs == 0 {
        return Err(DeckError::config("openai.timeout_secs must be positive"));
    }

    validate_rate_limit("client_rate_limit", &config.client_rate_limit)?;
    validate_rate_limit("server_rate_limit", &config.server_rate_limit)?;

    if config.cache.capacity == 0 {
        return Err(DeckError::config("cache.capacity must be at least 1"));
    }
    if config.input.max_length == 0 {
        return Err(DeckError::config("input.max_length must be at least 1"));
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LoggingConfig::LEVELS.contains(&level.as_str()) {
        return Err(DeckError::config(format!(
            "logging.level must be one of {}, got '{}'",
            LoggingConfig::LEVELS.join(", "),
            config.logging.level
        )));
    }
    let format = config.logging.format.to_ascii_lowercase();
    if !LoggingConfig::FORMATS.contains(&format.as_str()) {
        return Err(DeckError::config(format!(
            "logging.format must be one of {}, got '{}'",
            LoggingConfig::FORMATS.join(", "),
            config.logging.format
        )));
    }

    Ok(())
}

fn validate_rate_limit(section: &str, limit: &RateLimitConfig) -> DeckResult<()> {
    if limit.enabled && limit.window.is_zero() {
        return Err(DeckError::config(format!(
            "{}.window must be positive",
            section
        )));
    }
    Ok(())
}
