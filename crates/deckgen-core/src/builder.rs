//! DeckgenBuilder - wires configuration into a ready [`RequestGovernor`]

use crate::cache::{DeckCache, FileStorage};
use crate::config::DeckgenConfig;
use crate::error::DeckResult;
use crate::generation::{ContentModerator, DeckGenerator, NoModeration, OpenAiClient};
use crate::governor::{DeckService, RequestGovernor};
use crate::rate_limiter::SlidingWindowRateLimiter;
use std::sync::Arc;
use tracing::debug;

/// Builder for the governed generation pipeline
///
/// The OpenAI client is used for generation and moderation unless either
/// seam is replaced.
#[derive(Default)]
pub struct DeckgenBuilder {
    config: DeckgenConfig,
    generator: Option<Arc<dyn DeckGenerator>>,
    moderator: Option<Arc<dyn ContentModerator>>,
    cache: Option<DeckCache>,
    session_id: Option<String>,
}

impl DeckgenBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: DeckgenConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_generator(mut self, generator: Arc<dyn DeckGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_moderator(mut self, moderator: Arc<dyn ContentModerator>) -> Self {
        self.moderator = Some(moderator);
        self
    }

    /// Skip moderation entirely
    pub fn without_moderation(self) -> Self {
        self.with_moderator(Arc::new(NoModeration))
    }

    pub fn with_cache(mut self, cache: DeckCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Cache described by the configuration
    pub fn build_cache(config: &DeckgenConfig) -> DeckCache {
        if config.cache.persist {
            let path = config.cache.resolved_path();
            debug!("Using deck cache at {}", path.display());
            DeckCache::with_storage(config.cache.capacity, Box::new(FileStorage::new(path)))
        } else {
            DeckCache::in_memory(config.cache.capacity)
        }
    }

    pub fn build(self) -> DeckResult<RequestGovernor> {
        let config = self.config;

        let (generator, moderator) = match (self.generator, self.moderator) {
            (Some(generator), Some(moderator)) => (generator, moderator),
            (generator, moderator) => {
                let client = Arc::new(OpenAiClient::from_config(config.openai.clone())?);
                let generator: Arc<dyn DeckGenerator> = match generator {
                    Some(generator) => generator,
                    None => client.clone(),
                };
                let moderator: Arc<dyn ContentModerator> = match moderator {
                    Some(moderator) => moderator,
                    None => client,
                };
                (generator, moderator)
            }
        };

        let service = DeckService::new(
            SlidingWindowRateLimiter::authoritative(config.server_rate_limit.clone()),
            generator,
            moderator,
        )
        .with_max_input_length(config.input.max_length);

        let cache = self.cache.unwrap_or_else(|| Self::build_cache(&config));
        let governor = RequestGovernor::new(
            cache,
            SlidingWindowRateLimiter::advisory(config.client_rate_limit.clone()),
            Arc::new(service),
        );

        Ok(match self.session_id {
            Some(session_id) => governor.with_session_id(session_id),
            None => governor,
        })
    }
}
