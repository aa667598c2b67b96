//! Cache entry types

use crate::deck::Deck;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Default number of decks kept
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// File name of the persisted cache slot
pub const CACHE_FILE_NAME: &str = "ai-slides-cache.json";

/// Directory under the home directory holding deckgen state
pub const GLOBAL_CACHE_DIR: &str = ".deckgen";

/// A generated deck remembered under the exact input text that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedDeck {
    /// Input text, matched byte-for-byte
    pub input: String,
    pub deck: Deck,
    /// Insertion time in epoch milliseconds
    pub timestamp: i64,
}

impl CachedDeck {
    /// Create an entry stamped with the current time
    pub fn new(input: impl Into<String>, deck: Deck) -> Self {
        Self {
            input: input.into(),
            deck,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Insertion time as a UTC datetime
    pub fn inserted_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp)
            .single()
            .unwrap_or_default()
    }

    /// One-line summary for listings
    pub fn summary(&self) -> CacheSummary {
        CacheSummary {
            input: self.input.clone(),
            inserted_at: self.inserted_at(),
            visible_slides: self.deck.visible_slide_count(),
        }
    }
}

/// What a cache listing shows for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSummary {
    pub input: String,
    pub inserted_at: DateTime<Utc>,
    pub visible_slides: usize,
}
