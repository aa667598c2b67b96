//! Error types for deckgen

use thiserror::Error;

/// Result type alias for deckgen operations
pub type DeckResult<T> = Result<T, DeckError>;

/// Main error type for deckgen
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeckError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rate limit exceeded for the calling identity
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited { remaining: u32 },

    /// Input text failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input text was flagged by content moderation
    #[error("Content flagged as inappropriate{}", flagged_suffix(categories))]
    Moderation { categories: Vec<String> },

    /// Generation service unreachable, failed or returned something unusable
    #[error("Generation failed: {0}")]
    Upstream(String),

    /// Deck violates the model invariants
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    /// Cache load/save errors
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl DeckError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new upstream (generation service) error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Create a new invalid deck error
    pub fn invalid_deck(message: impl Into<String>) -> Self {
        Self::InvalidDeck(message.into())
    }

    /// Create a new persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    /// Create a new rate limit error
    pub const fn rate_limited(remaining: u32) -> Self {
        Self::RateLimited { remaining }
    }

    /// Whether the caller can reasonably resubmit the same request later.
    ///
    /// Nothing is retried automatically; this only drives the wording shown
    /// to the user.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Upstream(_))
    }
}

impl From<std::io::Error> for DeckError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<reqwest::Error> for DeckError {
    fn from(error: reqwest::Error) -> Self {
        Self::Upstream(error.to_string())
    }
}

impl From<toml::de::Error> for DeckError {
    fn from(error: toml::de::Error) -> Self {
        Self::Config(error.to_string())
    }
}

fn flagged_suffix(categories: &[String]) -> String {
    if categories.is_empty() {
        String::new()
    } else {
        format!(": {}", categories.join(", "))
    }
}
