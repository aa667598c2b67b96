//! Configuration model

use super::logging_config::LoggingConfig;
use crate::cache::{DEFAULT_CACHE_CAPACITY, FileStorage};
use crate::generation::{DEFAULT_MAX_INPUT_LENGTH, OpenAiConfig};
use crate::rate_limiter::RateLimitConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "deckgen.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeckgenConfig {
    pub openai: OpenAiConfig,
    /// Caller-side limiter, quota display only
    pub client_rate_limit: RateLimitConfig,
    /// Service-side limiter that actually rejects
    pub server_rate_limit: RateLimitConfig,
    pub cache: CacheConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

/// Result cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: usize,
    /// Cache file location, `~/.deckgen/ai-slides-cache.json` when unset
    pub path: Option<PathBuf>,
    /// Persist the cache to `path`, in memory only when false
    pub persist: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            path: None,
            persist: true,
        }
    }
}

impl CacheConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileStorage::default_path)
    }
}

/// Input validation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum topic length in characters
    pub max_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}
