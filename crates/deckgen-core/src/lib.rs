//! Deckgen Core Library
//!
//! This crate provides the core functionality for deckgen: the typed deck
//! model, the remark markdown compiler, the bounded result cache, sliding
//! window rate limiting and the governed generation flow around them.

pub mod builder;
pub mod cache;
pub mod compiler;
pub mod config;
pub mod deck;
pub mod error;
pub mod generation;
pub mod governor;
pub mod presentation;
pub mod rate_limiter;

// Re-export commonly used types
pub use builder::DeckgenBuilder;
pub use cache::{CacheStorage, CachedDeck, DeckCache, FileStorage, MemoryStorage};
pub use compiler::compile;
pub use config::{DeckgenConfig, load_config};
pub use deck::{Deck, Slide, SlideProperties};
pub use error::{DeckError, DeckResult};
pub use generation::{ContentModerator, DeckGenerator, OpenAiClient, OpenAiConfig};
pub use governor::{DeckService, DeckSource, GenerationResponse, GovernedDeck, RequestGovernor};
pub use presentation::{MountedPresentation, Presentation};
pub use rate_limiter::{LimiterAuthority, RateLimitConfig, SlidingWindowRateLimiter};
