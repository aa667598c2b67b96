//! Cache system tests

use super::*;
use crate::deck::{Deck, Slide, SlideProperties};
use crate::error::{DeckError, DeckResult};
use std::sync::Arc;
use tempfile::TempDir;

fn deck(title: &str) -> Deck {
    Deck::new("", vec![Slide::new(format!("# {}", title))]).unwrap()
}

fn inputs(cache: &DeckCache) -> Vec<String> {
    cache.list().into_iter().map(|entry| entry.input).collect()
}

/// Storage whose writes always fail, like a full quota
#[derive(Debug, Default)]
struct QuotaExceededStorage;

impl CacheStorage for QuotaExceededStorage {
    fn load(&self) -> DeckResult<Vec<CachedDeck>> {
        Ok(Vec::new())
    }

    fn save(&self, _entries: &[CachedDeck]) -> DeckResult<()> {
        Err(DeckError::persistence("quota exceeded"))
    }

    fn clear(&self) -> DeckResult<()> {
        Err(DeckError::persistence("quota exceeded"))
    }
}

#[test]
fn test_get_put_remove() {
    let cache = DeckCache::in_memory(10);

    assert!(cache.get("dogs").is_none());
    cache.put("dogs", deck("Dogs"));
    assert_eq!(cache.get("dogs"), Some(deck("Dogs")));

    cache.remove("dogs");
    assert!(cache.get("dogs").is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_keys_are_byte_exact() {
    let cache = DeckCache::in_memory(10);
    cache.put("Dogs", deck("Dogs"));

    assert!(cache.get("dogs").is_none());
    assert!(cache.get("Dogs ").is_none());
    assert!(cache.get(" Dogs").is_none());
    assert!(cache.get("Dogs").is_some());
}

#[test]
fn test_eleven_inserts_keep_ten_newest() {
    let cache = DeckCache::in_memory(10);
    for i in 0..11 {
        cache.put(format!("topic {}", i), deck(&i.to_string()));
    }

    assert_eq!(cache.len(), 10);
    assert!(cache.get("topic 0").is_none());
    for i in 1..11 {
        assert!(cache.get(&format!("topic {}", i)).is_some());
    }

    let listed = inputs(&cache);
    assert_eq!(listed.first().map(String::as_str), Some("topic 10"));
    assert_eq!(listed.last().map(String::as_str), Some("topic 1"));
}

#[test]
fn test_replace_promotes_without_duplicating() {
    let cache = DeckCache::in_memory(10);
    cache.put("a", deck("A1"));
    cache.put("b", deck("B"));
    cache.put("c", deck("C"));

    cache.put("a", deck("A2"));

    assert_eq!(inputs(&cache), vec!["a", "c", "b"]);
    assert_eq!(cache.get("a"), Some(deck("A2")));
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_reads_do_not_refresh_position() {
    let cache = DeckCache::in_memory(2);
    cache.put("old", deck("Old"));
    cache.put("new", deck("New"));

    assert!(cache.get("old").is_some());
    cache.put("newest", deck("Newest"));

    assert!(cache.get("old").is_none());
    assert_eq!(inputs(&cache), vec!["newest", "new"]);
}

#[test]
fn test_replacing_at_capacity_does_not_evict() {
    let cache = DeckCache::in_memory(2);
    cache.put("a", deck("A"));
    cache.put("b", deck("B"));
    cache.put("a", deck("A again"));

    assert_eq!(inputs(&cache), vec!["a", "b"]);
}

#[test]
fn test_clear_and_most_recent() {
    let cache = DeckCache::in_memory(10);
    assert!(cache.most_recent().is_none());

    cache.put("a", deck("A"));
    cache.put("b", deck("B"));
    assert_eq!(cache.most_recent().map(|e| e.input), Some("b".to_string()));

    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.most_recent().is_none());
}

#[test]
fn test_entries_report_insertion_time() {
    let cache = DeckCache::in_memory(10);
    let before = chrono::Utc::now().timestamp_millis();
    cache.put("a", deck("A"));
    let after = chrono::Utc::now().timestamp_millis();

    let entries = cache.entries();
    assert_eq!(entries.len(), 1);
    let (input, _, inserted_at) = &entries[0];
    assert_eq!(input, "a");
    let millis = inserted_at.timestamp_millis();
    assert!(millis >= before && millis <= after);
}

#[test]
fn test_summary_counts_visible_slides() {
    let entry = CachedDeck::new(
        "topic",
        Deck::new(
            "",
            vec![
                Slide::new("# A"),
                Slide::new("# B").with_properties(SlideProperties::default().excluded()),
                Slide::new("# C"),
            ],
        )
        .unwrap(),
    );

    let summary = entry.summary();
    assert_eq!(summary.input, "topic");
    assert_eq!(summary.visible_slides, 2);
}

#[test]
fn test_persisted_layout_is_newest_first_array() {
    let storage = Arc::new(MemoryStorage::new());
    let cache = DeckCache::with_storage(10, Box::new(storage.clone()));
    cache.put("first", deck("1"));
    cache.put("second", deck("2"));

    let raw = storage.raw().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["input"], "second");
    assert_eq!(array[1]["input"], "first");
    assert!(array[0]["timestamp"].is_i64());
    assert_eq!(array[0]["deck"]["slides"][0]["content"], "# 2");
}

#[test]
fn test_storage_failure_does_not_break_the_cache() {
    let cache = DeckCache::with_storage(10, Box::new(QuotaExceededStorage));

    cache.put("a", deck("A"));
    assert_eq!(cache.get("a"), Some(deck("A")));

    cache.remove("a");
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_corrupt_slot_starts_empty() {
    let cache = DeckCache::with_storage(10, Box::new(MemoryStorage::with_raw("{not json")));
    assert!(cache.is_empty());

    cache.put("a", deck("A"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_loaded_entries_are_normalized() {
    let storage = MemoryStorage::new();
    let mut entries: Vec<CachedDeck> = (0..12)
        .map(|i| CachedDeck::new(format!("k{}", i), deck(&i.to_string())))
        .collect();
    entries.insert(1, CachedDeck::new("k0", deck("stale")));
    storage.save(&entries).unwrap();

    let cache = DeckCache::with_storage(10, Box::new(storage));
    assert_eq!(cache.len(), 10);
    assert_eq!(cache.get("k0"), Some(deck("0")));
    assert!(cache.get("k10").is_none());
}

#[test]
fn test_file_storage_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("cache.json");

    {
        let cache = DeckCache::with_storage(10, Box::new(FileStorage::new(&path)));
        cache.put("dogs", deck("Dogs"));
        cache.put("cats", deck("Cats"));
    }

    let reopened = DeckCache::with_storage(10, Box::new(FileStorage::new(&path)));
    assert_eq!(inputs(&reopened), vec!["cats", "dogs"]);
    assert_eq!(reopened.get("dogs"), Some(deck("Dogs")));

    reopened.clear();
    assert!(!path.exists());
}

#[test]
fn test_file_storage_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("absent.json"));
    assert!(storage.load().unwrap().is_empty());
    assert!(storage.clear().is_ok());
}

#[test]
fn test_file_storage_corrupt_file_is_persistence_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, "[{\"input\": 1}]").unwrap();

    let storage = FileStorage::new(&path);
    assert!(matches!(storage.load(), Err(DeckError::Persistence(_))));
}

#[test]
fn test_concurrent_puts_keep_capacity() {
    let cache = Arc::new(DeckCache::in_memory(10));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                for i in 0..25 {
                    cache.put(format!("{}-{}", t, i), deck("x"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let listed = inputs(&cache);
    assert_eq!(listed.len(), 10);
    let unique: std::collections::HashSet<_> = listed.iter().collect();
    assert_eq!(unique.len(), 10);
}
