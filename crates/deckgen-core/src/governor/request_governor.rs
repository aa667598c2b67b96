//! Caller side of the generation boundary

use super::service::DeckService;
use crate::cache::{CachedDeck, DeckCache};
use crate::deck::Deck;
use crate::error::{DeckError, DeckResult};
use crate::presentation::Presentation;
use crate::rate_limiter::SlidingWindowRateLimiter;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_SESSION_ID: &str = "local-session";
pub const DEFAULT_CLIENT_ADDRESS: &str = "127.0.0.1";

/// Where a governed deck came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckSource {
    Cache,
    Generated,
}

/// A deck ready for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernedDeck {
    pub input: String,
    pub deck: Deck,
    pub presentation: Presentation,
    pub source: DeckSource,
    /// Quota left as reported by whichever limiter answered last
    pub remaining_requests: u32,
}

/// Fronts every generation request with the result cache and the advisory
/// limiter before handing it to the [`DeckService`].
#[derive(Debug)]
pub struct RequestGovernor {
    cache: DeckCache,
    limiter: SlidingWindowRateLimiter,
    service: Arc<DeckService>,
    session_id: String,
    client_address: String,
}

impl RequestGovernor {
    pub fn new(cache: DeckCache, limiter: SlidingWindowRateLimiter, service: Arc<DeckService>) -> Self {
        Self {
            cache,
            limiter,
            service,
            session_id: DEFAULT_SESSION_ID.to_string(),
            client_address: DEFAULT_CLIENT_ADDRESS.to_string(),
        }
    }

    /// Identity for the advisory limiter
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Network identity presented to the service
    pub fn with_client_address(mut self, client_address: impl Into<String>) -> Self {
        self.client_address = client_address.into();
        self
    }

    pub fn cache(&self) -> &DeckCache {
        &self.cache
    }

    /// Quota left according to the advisory limiter
    pub fn remaining(&self) -> u32 {
        self.limiter.remaining(&self.session_id)
    }

    /// Get a presentation for `input`, generating it only on a cache miss
    pub async fn request(&self, input: &str) -> DeckResult<GovernedDeck> {
        if input.trim().is_empty() {
            return Err(DeckError::invalid_input(
                "Please describe the slides you want to generate",
            ));
        }

        if let Some(deck) = self.cache.get(input) {
            debug!("Cache hit, skipping generation");
            return self.governed(input.to_string(), deck, DeckSource::Cache, self.remaining());
        }

        if !self.limiter.check_limit(&self.session_id) {
            warn!(session = %self.session_id, "Generation stopped by advisory rate limiter");
            return Err(DeckError::rate_limited(self.remaining()));
        }

        let response = self.service.generate(&self.client_address, input).await?;
        self.cache.put(input, response.response.clone());

        self.governed(
            response.original_input,
            response.response,
            DeckSource::Generated,
            response.remaining_requests,
        )
    }

    /// The newest cached deck, shown when there is no input
    pub fn latest(&self) -> DeckResult<Option<GovernedDeck>> {
        self.cached(0)
    }

    /// The `index`-th cached deck, newest first
    pub fn cached(&self, index: usize) -> DeckResult<Option<GovernedDeck>> {
        match self.cache.list().into_iter().nth(index) {
            Some(CachedDeck { input, deck, .. }) => self
                .governed(input, deck, DeckSource::Cache, self.remaining())
                .map(Some),
            None => Ok(None),
        }
    }

    fn governed(
        &self,
        input: String,
        deck: Deck,
        source: DeckSource,
        remaining_requests: u32,
    ) -> DeckResult<GovernedDeck> {
        let presentation = Presentation::from_deck(&deck)?;
        Ok(GovernedDeck {
            input,
            deck,
            presentation,
            source,
            remaining_requests,
        })
    }
}
