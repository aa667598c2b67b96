//! Environment variable overrides

use super::model::DeckgenConfig;
use crate::error::{DeckError, DeckResult};
use std::env;
use std::path::PathBuf;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "OPENAI_MODEL";
pub const ENV_CACHE_PATH: &str = "DECKGEN_CACHE_PATH";
pub const ENV_LOG_LEVEL: &str = "DECKGEN_LOG_LEVEL";
pub const ENV_RATE_LIMIT: &str = "DECKGEN_RATE_LIMIT";

/// Apply overrides from the process environment
pub fn apply_env_overrides(config: &mut DeckgenConfig) -> DeckResult<()> {
    apply_overrides(config, |key| env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
///
/// Empty values are treated as unset.
pub fn apply_overrides<F>(config: &mut DeckgenConfig, lookup: F) -> DeckResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(api_key) = var(ENV_API_KEY) {
        config.openai.api_key = Some(api_key);
    }
    if let Some(base_url) = var(ENV_BASE_URL) {
        config.openai.base_url = base_url;
    }
    if let Some(model) = var(ENV_MODEL) {
        config.openai.model = model;
    }
    if let Some(path) = var(ENV_CACHE_PATH) {
        config.cache.path = Some(PathBuf::from(path));
    }
    if let Some(level) = var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }

    // One quota for both sides of the boundary
    if let Some(limit) = var(ENV_RATE_LIMIT) {
        let max_requests: u32 = limit
            .trim()
            .parse()
            .map_err(|_| DeckError::config(format!("Invalid {} value: {}", ENV_RATE_LIMIT, limit)))?;
        config.client_rate_limit.max_requests = max_requests;
        config.server_rate_limit.max_requests = max_requests;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_overrides_openai_settings() {
        let mut config = DeckgenConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[
                (ENV_API_KEY, "sk-test"),
                (ENV_BASE_URL, "http://localhost:1234/v1"),
                (ENV_MODEL, "gpt-4.1"),
            ]),
        )
        .unwrap();

        assert_eq!(config.openai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai.base_url, "http://localhost:1234/v1");
        assert_eq!(config.openai.model, "gpt-4.1");
    }

    #[test]
    fn test_overrides_cache_logging_and_limits() {
        let mut config = DeckgenConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[
                (ENV_CACHE_PATH, "/tmp/decks.json"),
                (ENV_LOG_LEVEL, "debug"),
                (ENV_RATE_LIMIT, "3"),
            ]),
        )
        .unwrap();

        assert_eq!(config.cache.path, Some(PathBuf::from("/tmp/decks.json")));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.client_rate_limit.max_requests, 3);
        assert_eq!(config.server_rate_limit.max_requests, 3);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let mut config = DeckgenConfig::default();
        apply_overrides(&mut config, lookup(&[(ENV_API_KEY, ""), (ENV_MODEL, "  ")])).unwrap();
        assert_eq!(config, DeckgenConfig::default());
    }

    #[test]
    fn test_invalid_rate_limit() {
        let mut config = DeckgenConfig::default();
        let err = apply_overrides(&mut config, lookup(&[(ENV_RATE_LIMIT, "many")])).unwrap_err();
        assert!(matches!(err, DeckError::Config(_)));
    }
}
