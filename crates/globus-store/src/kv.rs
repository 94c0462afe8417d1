//! String key-value backends.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;

use crate::error::{Result, StoreError};

/// A persistent string-to-string map.
///
/// Writes are synchronous: when `set` returns `Ok`, the value is durable.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// One file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store in the platform data directory:
    /// - Linux:   `~/.local/share/globus/`
    /// - macOS:   `~/Library/Application Support/org.globus.globus/`
    /// - Windows: `{FOLDERID_RoamingAppData}\globus\globus\data\`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("org", "globus", "globus").ok_or(StoreError::NoDataDir)?;
        Self::open_at(project_dirs.data_dir())
    }

    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open_at(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        tracing::info!(path = %dir.display(), "opening key-value store");
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // Write-then-rename: readers never observe a partial file.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        tracing::debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Io(std::io::Error::other("memory store lock poisoned")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Io(std::io::Error::other("memory store lock poisoned")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open_at(dir.path()).unwrap();

        assert_eq!(store.get("favorites").unwrap(), None);
        store.set("favorites", "[]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[]"));

        store.set("favorites", "[1]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::open_at(dir.path())
            .unwrap()
            .set("k", "v")
            .unwrap();

        let reopened = FileStore::open_at(dir.path()).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_rejects_bad_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open_at(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(store.get(key), Err(StoreError::InvalidKey(_))));
        }
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_value("a", "1");
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap(), None);
        store.set("b", "2").unwrap();
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
