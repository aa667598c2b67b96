//! Result cache for generated decks
//!
//! Generation is slow and billed, so every deck is remembered under the
//! exact input text that produced it. The cache is bounded, ordered by
//! insertion recency, and persisted as a single JSON slot so it survives
//! restarts.

mod deck_cache;
pub mod storage;
pub mod types;

#[cfg(test)]
mod tests;

pub use deck_cache::DeckCache;
pub use storage::{CacheStorage, FileStorage, MemoryStorage};
pub use types::{CacheSummary, CachedDeck, DEFAULT_CACHE_CAPACITY};
