//! Service side of the generation boundary

use crate::deck::Deck;
use crate::error::{DeckError, DeckResult};
use crate::generation::{ContentModerator, DEFAULT_MAX_INPUT_LENGTH, DeckGenerator, validate_input};
use crate::rate_limiter::SlidingWindowRateLimiter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Successful generation as returned across the boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub response: Deck,
    pub original_input: String,
    pub remaining_requests: u32,
}

/// Gatekeeper in front of the generator.
///
/// Holds the authoritative limiter, keyed by the caller's network identity.
pub struct DeckService {
    limiter: SlidingWindowRateLimiter,
    generator: Arc<dyn DeckGenerator>,
    moderator: Arc<dyn ContentModerator>,
    max_input_length: usize,
}

impl DeckService {
    pub fn new(
        limiter: SlidingWindowRateLimiter,
        generator: Arc<dyn DeckGenerator>,
        moderator: Arc<dyn ContentModerator>,
    ) -> Self {
        Self {
            limiter,
            generator,
            moderator,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }

    pub fn with_max_input_length(mut self, max_input_length: usize) -> Self {
        self.max_input_length = max_input_length;
        self
    }

    pub fn limiter(&self) -> &SlidingWindowRateLimiter {
        &self.limiter
    }

    /// Quota left for `identity`
    pub fn remaining(&self, identity: &str) -> u32 {
        self.limiter.remaining(identity)
    }

    /// Admit, validate, moderate and generate.
    ///
    /// Admission is recorded before validation, so rejected input still
    /// counts against the caller's quota.
    pub async fn generate(&self, identity: &str, input: &str) -> DeckResult<GenerationResponse> {
        if !self.limiter.check_limit(identity) {
            let remaining = self.limiter.remaining(identity);
            warn!(
                identity,
                retry_after_secs = self.limiter.retry_after(identity).map(|d| d.as_secs()),
                "Generation rejected by rate limiter"
            );
            return Err(DeckError::rate_limited(remaining));
        }

        validate_input(input, self.max_input_length)?;
        self.moderator.moderate(input).await?;

        let deck = self.generator.generate(input).await.map_err(|e| {
            if matches!(e, DeckError::Upstream(_)) {
                error!(identity, "Deck generation failed: {}", e);
            }
            e
        })?;

        info!(identity, slides = deck.slides.len(), "Generated deck");
        Ok(GenerationResponse {
            response: deck,
            original_input: input.to_string(),
            remaining_requests: self.limiter.remaining(identity),
        })
    }
}

impl std::fmt::Debug for DeckService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckService")
            .field("limiter", &self.limiter)
            .field("max_input_length", &self.max_input_length)
            .finish_non_exhaustive()
    }
}
