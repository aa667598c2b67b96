//! Deck generation
//!
//! Turns a free-text topic into a structured [`Deck`] using a hosted
//! language model with a strict output schema. The seams are traits so the
//! governor can be exercised without network access.

pub mod openai;
pub mod prompt;
pub mod validation;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use validation::{DEFAULT_MAX_INPUT_LENGTH, validate_input};

use crate::deck::Deck;
use crate::error::DeckResult;
use async_trait::async_trait;

/// Produces a deck for a topic description
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeckGenerator: Send + Sync {
    async fn generate(&self, input: &str) -> DeckResult<Deck>;
}

/// Screens input before generation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentModerator: Send + Sync {
    /// Fails with [`DeckError::Moderation`](crate::DeckError::Moderation)
    /// when the input is flagged
    async fn moderate(&self, input: &str) -> DeckResult<()>;
}

/// Moderator that lets everything through
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModeration;

#[async_trait]
impl ContentModerator for NoModeration {
    async fn moderate(&self, _input: &str) -> DeckResult<()> {
        Ok(())
    }
}
