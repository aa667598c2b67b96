//! Persistence backends for the deck cache
//!
//! The cache lives in a single named slot holding a JSON array of
//! [`CachedDeck`] entries, newest first.

use super::types::{CACHE_FILE_NAME, CachedDeck, GLOBAL_CACHE_DIR};
use crate::error::{DeckError, DeckResult};
use parking_lot::Mutex;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Cache storage interface
pub trait CacheStorage: Send + Sync + Debug {
    /// Load all persisted entries, newest first
    fn load(&self) -> DeckResult<Vec<CachedDeck>>;

    /// Replace the persisted entries
    fn save(&self, entries: &[CachedDeck]) -> DeckResult<()>;

    /// Remove the persisted slot entirely
    fn clear(&self) -> DeckResult<()>;
}

impl<T: CacheStorage + ?Sized> CacheStorage for Arc<T> {
    fn load(&self) -> DeckResult<Vec<CachedDeck>> {
        (**self).load()
    }

    fn save(&self, entries: &[CachedDeck]) -> DeckResult<()> {
        (**self).save(entries)
    }

    fn clear(&self) -> DeckResult<()> {
        (**self).clear()
    }
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.deckgen/ai-slides-cache.json`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(GLOBAL_CACHE_DIR)
            .join(CACHE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CacheStorage for FileStorage {
    fn load(&self) -> DeckResult<Vec<CachedDeck>> {
        if !self.path.exists() {
            debug!("No cached decks found at {:?}", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DeckError::persistence(format!("Failed to read cache {:?}: {}", self.path, e))
        })?;
        let entries: Vec<CachedDeck> = serde_json::from_str(&content).map_err(|e| {
            DeckError::persistence(format!("Corrupt cache file {:?}: {}", self.path, e))
        })?;

        debug!("Loaded {} cached decks from {:?}", entries.len(), self.path);
        Ok(entries)
    }

    fn save(&self, entries: &[CachedDeck]) -> DeckResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DeckError::persistence(format!("Failed to create cache directory: {}", e))
            })?;
        }

        let content = serde_json::to_string(entries)?;

        // Write to a sibling file first so a failed write never truncates the slot
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .map_err(|e| DeckError::persistence(format!("Failed to write cache: {}", e)))?;
        fs::rename(&tmp_path, &self.path)
            .map_err(|e| DeckError::persistence(format!("Failed to replace cache: {}", e)))?;

        debug!("Saved {} cached decks to {:?}", entries.len(), self.path);
        Ok(())
    }

    fn clear(&self) -> DeckResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DeckError::persistence(format!(
                "Failed to remove cache {:?}: {}",
                self.path, e
            ))),
        }
    }
}

/// In-memory slot holding the serialized JSON, for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw slot contents, e.g. to simulate a corrupt slot
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Current raw slot contents
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

impl CacheStorage for MemoryStorage {
    fn load(&self) -> DeckResult<Vec<CachedDeck>> {
        match self.slot.lock().as_deref() {
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| DeckError::persistence(format!("Corrupt cache slot: {}", e))),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[CachedDeck]) -> DeckResult<()> {
        *self.slot.lock() = Some(serde_json::to_string(entries)?);
        Ok(())
    }

    fn clear(&self) -> DeckResult<()> {
        *self.slot.lock() = None;
        Ok(())
    }
}
