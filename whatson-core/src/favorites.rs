//! Persisted favorite-event ids.
//!
//! The store is a plain set of event ids, written through on every
//! mutation so a crash right after a toggle cannot lose it. It knows
//! nothing about the catalog: ids of events that later disappear from
//! the feed stay in the set and are simply never displayed.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::error::{FeedError, FeedResult};

/// Local favorite annotations, independent of the event records.
///
/// Construct one per data directory and pass it by reference wherever
/// favorite state is needed; there is no global instance.
pub struct FavoriteStore {
    path: PathBuf,
    ids: Mutex<HashSet<String>>,
}

impl FavoriteStore {
    /// Load the store from `path`. A missing file is the empty set
    /// (first run); an unreadable or corrupt file degrades to the empty
    /// set as well, with a warning.
    pub fn load(path: PathBuf) -> FavoriteStore {
        let ids = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<String>>(&content) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    warn!("ignoring corrupt favorites file {}: {e}", path.display());
                    HashSet::new()
                }
            },
            Err(_) => HashSet::new(),
        };

        FavoriteStore {
            path,
            ids: Mutex::new(ids),
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.lock().expect("favorites mutex poisoned").contains(id)
    }

    /// Flip membership of `id` and write through. Returns the new state.
    pub fn toggle(&self, id: &str) -> FeedResult<bool> {
        let mut ids = self.ids.lock().expect("favorites mutex poisoned");
        let starred = if ids.remove(id) {
            false
        } else {
            ids.insert(id.to_string());
            true
        };
        self.persist(&ids)?;
        Ok(starred)
    }

    /// Set membership of `id` to `value`. No write if already there.
    pub fn set(&self, id: &str, value: bool) -> FeedResult<()> {
        let mut ids = self.ids.lock().expect("favorites mutex poisoned");
        let changed = if value {
            ids.insert(id.to_string())
        } else {
            ids.remove(id)
        };
        if changed {
            self.persist(&ids)?;
        }
        Ok(())
    }

    /// Snapshot of the current favorite ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let ids = self.ids.lock().expect("favorites mutex poisoned");
        let mut sorted: Vec<String> = ids.iter().cloned().collect();
        sorted.sort();
        sorted
    }

    /// Write the set as a sorted JSON array via a temp file + rename.
    /// A failed write is retried once before the error surfaces.
    fn persist(&self, ids: &HashSet<String>) -> FeedResult<()> {
        let mut sorted: Vec<&str> = ids.iter().map(|s| s.as_str()).collect();
        sorted.sort();
        let content = serde_json::to_string_pretty(&sorted)
            .map_err(|e| FeedError::Serialization(e.to_string()))?;

        if let Err(e) = self.write_atomically(&content) {
            warn!("favorites write failed, retrying once: {e}");
            self.write_atomically(&content)?;
        }
        Ok(())
    }

    fn write_atomically(&self, content: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FavoriteStore {
        FavoriteStore::load(dir.path().join("favorites.json"))
    }

    #[test]
    fn missing_file_is_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.is_favorite("a"));
        assert!(store.ids().is_empty());
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.toggle("a").unwrap());
        assert!(store.is_favorite("a"));
        assert!(!store.toggle("a").unwrap());
        assert!(!store.is_favorite("a"));
    }

    #[test]
    fn set_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("a", true).unwrap();
        store.set("a", true).unwrap();
        assert!(store.is_favorite("a"));
        assert_eq!(store.ids(), vec!["a"]);

        store.set("a", false).unwrap();
        store.set("a", false).unwrap();
        assert!(!store.is_favorite("a"));
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let store = FavoriteStore::load(path.clone());
        store.toggle("b").unwrap();
        store.toggle("a").unwrap();
        store.toggle("c").unwrap();
        store.toggle("b").unwrap(); // un-star again

        let reloaded = FavoriteStore::load(path);
        assert_eq!(reloaded.ids(), vec!["a", "c"]);
        assert!(reloaded.is_favorite("a"));
        assert!(!reloaded.is_favorite("b"));
    }

    #[test]
    fn corrupt_file_degrades_to_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FavoriteStore::load(path);
        assert!(store.ids().is_empty());
    }
}
