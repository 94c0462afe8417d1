//! The favorites list as a JSON array under one key.
//!
//! Reads are forgiving: an absent key, a blank value or anything that does
//! not parse as `[{"name": ..., "date": ...}]` is treated as an empty list.
//! Write failures are logged and swallowed. Neither is ever fatal.

use std::collections::HashSet;

use globus_shared::constants::FAVORITES_KEY;
use globus_shared::FavoriteEntry;
use tracing::{debug, warn};

use crate::error::Result;
use crate::kv::KeyValueStore;

pub struct FavoritesStore<K> {
    kv: K,
    key: String,
}

impl<K: KeyValueStore> FavoritesStore<K> {
    /// Store favorites under the default key.
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, FAVORITES_KEY)
    }

    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &K {
        &self.kv
    }

    /// Read and parse the stored list, surfacing every failure.
    pub fn try_load(&self) -> Result<Vec<FavoriteEntry>> {
        let Some(raw) = self.kv.get(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let entries: Option<Vec<FavoriteEntry>> = serde_json::from_str(&raw)?;
        Ok(entries.unwrap_or_default())
    }

    /// Load the stored list, falling back to empty on any error.
    ///
    /// Duplicate names are dropped, keeping the first (newest) occurrence.
    pub fn load(&self) -> Vec<FavoriteEntry> {
        let entries = match self.try_load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read favorites, starting empty");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let before = entries.len();
        let unique: Vec<FavoriteEntry> = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.name.clone()))
            .collect();
        if unique.len() != before {
            warn!(dropped = before - unique.len(), "Dropped duplicate stored favorites");
        }

        debug!(count = unique.len(), "Loaded favorites");
        unique
    }

    /// Serialize and write the list, surfacing every failure.
    pub fn try_save(&self, entries: &[FavoriteEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.kv.set(&self.key, &json)
    }

    /// Write the list, logging (not returning) any failure.
    ///
    /// Returns whether the write succeeded.
    pub fn save(&self, entries: &[FavoriteEntry]) -> bool {
        match self.try_save(entries) {
            Ok(()) => {
                debug!(count = entries.len(), "Saved favorites");
                true
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to write favorites");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::kv::{FileStore, MemoryStore};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }
    }

    fn sample() -> Vec<FavoriteEntry> {
        vec![
            FavoriteEntry::new("Japan", "2026-10-16T09:30:00.000Z"),
            FavoriteEntry::new("Peru", "2026-10-15T18:02:11.250Z"),
        ]
    }

    #[test]
    fn test_round_trip_preserves_order_and_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::new(FileStore::open_at(dir.path()).unwrap());

        assert!(store.save(&sample()));
        assert_eq!(store.load(), sample());
    }

    #[test]
    fn test_absent_key_is_empty() {
        let store = FavoritesStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_empty_array_and_blank_value() {
        for raw in ["[]", "", "  ", "null"] {
            let store = FavoritesStore::new(MemoryStore::with_value(FAVORITES_KEY, raw));
            assert!(store.load().is_empty(), "raw = {raw:?}");
        }
    }

    #[test]
    fn test_corrupt_data_resets_to_empty() {
        for raw in ["{not json", "{\"name\":\"Japan\"}", "[{\"title\":\"Japan\"}]"] {
            let store = FavoritesStore::new(MemoryStore::with_value(FAVORITES_KEY, raw));
            assert!(store.try_load().is_err(), "raw = {raw:?}");
            assert!(store.load().is_empty(), "raw = {raw:?}");
        }
    }

    #[test]
    fn test_duplicates_dropped_on_load() {
        let raw = r#"[
            {"name":"Japan","date":"2026-10-16T09:30:00.000Z"},
            {"name":"Japan","date":"2026-10-01T09:30:00.000Z"},
            {"name":"Peru","date":"2026-10-15T18:02:11.250Z"}
        ]"#;
        let store = FavoritesStore::new(MemoryStore::with_value(FAVORITES_KEY, raw));

        assert_eq!(store.load(), sample());
    }

    #[test]
    fn test_broken_backend_is_not_fatal() {
        let store = FavoritesStore::new(BrokenStore);
        assert!(store.load().is_empty());
        assert!(!store.save(&sample()));
    }

    #[test]
    fn test_wire_format() {
        let store = FavoritesStore::new(MemoryStore::new());
        store.save(&sample()[..1]);

        let raw = store.backend().get(FAVORITES_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"name":"Japan","date":"2026-10-16T09:30:00.000Z"}]"#);
    }
}
