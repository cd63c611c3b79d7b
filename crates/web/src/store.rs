//! JSON file store.
//!
//! The whole store is one JSON object on disk, mapping each key to its value
//! as a nested document (not an escaped string), so the file stays readable
//! and hand-editable.
//!
//! Nothing is cached. Every read loads the file, and every write loads it,
//! replaces the one key, and rewrites it through a temporary sibling and a
//! rename. A CLI and a running server can share one file without either
//! erasing keys the other saved; two writers of the same key still race and
//! the last one wins.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use testimony_hub_core::{KeyValueStore, StoreError};

/// File-backed [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A malformed file is also treated as
    /// empty (and logged), so every key falls back to its default and the
    /// file is rewritten on the first write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = Self { path: path.into() };
        match store.entries() {
            Ok(entries) => {
                tracing::info!(path = %store.path.display(), keys = entries.len(), "Store opened");
            }
            Err(e) => {
                tracing::warn!(path = %store.path.display(), error = %e, "Store file is unreadable");
            }
        }
        store
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents of the file. Missing or malformed means empty.
    fn entries(&self) -> Result<Map<String, Value>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring malformed store file");
                Ok(Map::new())
            }
        }
    }

    fn flush(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let body = serde_json::to_vec_pretty(entries)?;
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(key).map(Value::to_string))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let value: Value = serde_json::from_str(&value)?;
        let mut entries = self.entries()?;
        entries.insert(key.to_owned(), value);
        self.flush(&entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("hub.json"));
        assert!(store.get("anything").unwrap().is_none());
    }

    #[test]
    fn test_set_persists_to_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hub.json");

        let mut store = JsonFileStore::open(&path);
        store.set("main_message", "\"Hello\"".to_string()).unwrap();
        store.set("stories_pending", "[]".to_string()).unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get("main_message").unwrap().as_deref(),
            Some("\"Hello\"")
        );
        assert_eq!(reopened.get("stories_pending").unwrap().as_deref(), Some("[]"));

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk["main_message"], Value::String("Hello".to_string()));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("hub.json");

        let mut store = JsonFileStore::open(&path);
        store.set("site_url", "\"\"".to_string()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hub.json");
        fs::write(&path, "{ this is not json").unwrap();

        let mut store = JsonFileStore::open(&path);
        assert!(store.get("current_role").unwrap().is_none());

        store.set("current_role", "\"guest\"".to_string()).unwrap();
        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get("current_role").unwrap().as_deref(),
            Some("\"guest\"")
        );
    }

    #[test]
    fn test_set_rejects_non_json() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("hub.json"));
        assert!(matches!(
            store.set("key", "not json".to_string()),
            Err(StoreError::Serde(_))
        ));
    }

    #[test]
    fn test_writers_sharing_a_file_keep_each_others_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hub.json");

        let mut server = JsonFileStore::open(&path);
        server.set("main_message", "\"Hello\"".to_string()).unwrap();

        let mut cli = JsonFileStore::open(&path);
        cli.set("site_url", "\"https://hub.example.org/\"".to_string())
            .unwrap();

        server.set("stories_pending", "[]".to_string()).unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(
            reopened.get("site_url").unwrap().as_deref(),
            Some("\"https://hub.example.org/\"")
        );
        assert_eq!(
            reopened.get("main_message").unwrap().as_deref(),
            Some("\"Hello\"")
        );
        assert_eq!(server.get("site_url").unwrap(), reopened.get("site_url").unwrap());
    }
}
