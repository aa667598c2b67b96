//! Bounded result cache for generated decks

use super::storage::CacheStorage;
use super::types::{CachedDeck, DEFAULT_CACHE_CAPACITY};
use crate::deck::Deck;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, warn};

/// Result cache keyed by the exact input text.
///
/// Entries are ordered by insertion, newest first. Inserting pushes to the
/// front (replacing any entry with the same key) and drops the oldest entry
/// once `capacity` is exceeded. Reads never reorder.
///
/// Persistence is best-effort: storage failures are logged and the cache
/// keeps working in memory.
#[derive(Debug)]
pub struct DeckCache {
    capacity: usize,
    entries: Mutex<VecDeque<CachedDeck>>,
    storage: Option<Box<dyn CacheStorage>>,
}

impl DeckCache {
    /// Purely in-memory cache
    pub fn in_memory(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::new()),
            storage: None,
        }
    }

    /// Cache backed by `storage`, loading whatever it already holds
    pub fn with_storage(capacity: usize, storage: Box<dyn CacheStorage>) -> Self {
        let capacity = capacity.max(1);
        let entries = match storage.load() {
            Ok(loaded) => normalize(loaded, capacity),
            Err(e) => {
                warn!("Failed to load cached decks, starting empty: {}", e);
                VecDeque::new()
            }
        };

        Self {
            capacity,
            entries: Mutex::new(entries),
            storage: Some(storage),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Look up the deck generated for exactly this input
    pub fn get(&self, input: &str) -> Option<Deck> {
        let entries = self.entries.lock();
        let hit = entries
            .iter()
            .find(|entry| entry.input == input)
            .map(|entry| entry.deck.clone());
        debug!(
            "Deck cache {} for input of {} bytes",
            if hit.is_some() { "hit" } else { "miss" },
            input.len()
        );
        hit
    }

    /// Insert or replace the deck for `input` at the most-recent position
    pub fn put(&self, input: impl Into<String>, deck: Deck) {
        self.insert(CachedDeck::new(input, deck));
    }

    /// Insert a prepared entry at the most-recent position
    pub fn insert(&self, entry: CachedDeck) {
        let mut entries = self.entries.lock();
        entries.retain(|existing| existing.input != entry.input);
        entries.push_front(entry);

        while entries.len() > self.capacity {
            if let Some(evicted) = entries.pop_back() {
                debug!("Evicted cached deck inserted at {}", evicted.inserted_at());
            }
        }

        self.persist(&entries);
    }

    /// Forget the deck for `input`, if any
    pub fn remove(&self, input: &str) {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|entry| entry.input != input);
        if entries.len() != before {
            self.persist(&entries);
        }
    }

    /// Forget everything, including the persisted slot
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.clear();
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.clear() {
                warn!("Failed to clear persisted deck cache: {}", e);
            }
        }
    }

    /// All entries, newest first
    pub fn list(&self) -> Vec<CachedDeck> {
        self.entries.lock().iter().cloned().collect()
    }

    /// `(input, deck, inserted_at)` triples, newest first
    pub fn entries(&self) -> Vec<(String, Deck, DateTime<Utc>)> {
        self.entries
            .lock()
            .iter()
            .map(|entry| (entry.input.clone(), entry.deck.clone(), entry.inserted_at()))
            .collect()
    }

    /// The most recently inserted entry
    pub fn most_recent(&self) -> Option<CachedDeck> {
        self.entries.lock().front().cloned()
    }

    fn persist(&self, entries: &VecDeque<CachedDeck>) {
        let Some(storage) = &self.storage else {
            return;
        };

        let snapshot: Vec<CachedDeck> = entries.iter().cloned().collect();
        if let Err(e) = storage.save(&snapshot) {
            warn!("Cache write failed, continuing without persistence: {}", e);
        }
    }
}

impl Default for DeckCache {
    fn default() -> Self {
        Self::in_memory(DEFAULT_CACHE_CAPACITY)
    }
}

/// Drop duplicate keys (keeping the newest) and trim to capacity
fn normalize(loaded: Vec<CachedDeck>, capacity: usize) -> VecDeque<CachedDeck> {
    let mut seen = HashSet::new();
    loaded
        .into_iter()
        .filter(|entry| seen.insert(entry.input.clone()))
        .filter(|entry| entry.deck.validate().is_ok())
        .take(capacity)
        .collect()
}
