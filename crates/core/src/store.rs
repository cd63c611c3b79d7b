//! Key-value store adapter.
//!
//! Every stateful component persists through a [`KeyValueStore`]: a flat map
//! from string keys to JSON text. The typed helpers in this module never fail.
//! A value that is missing or unreadable is replaced by its default (which is
//! written back), and a failed write is logged and otherwise ignored.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Keys recognized by the hub.
pub mod keys {
    /// Latest selected [`crate::Role`].
    pub const CURRENT_ROLE: &str = "current_role";

    /// Hero message text.
    pub const MAIN_MESSAGE: &str = "main_message";

    /// Link collection, newest first.
    pub const RESOURCE_LINKS: &str = "resource_links";

    /// Published testimonies, most recently approved first.
    pub const STORIES_PUBLISHED: &str = "stories_published";

    /// Testimonies awaiting moderation, newest first.
    pub const STORIES_PENDING: &str = "stories_pending";

    /// Canonical site URL used for the QR code. Empty means unset.
    pub const SITE_URL: &str = "site_url";

    /// Every key, in the order they are loaded.
    pub const ALL: [&str; 6] = [
        CURRENT_ROLE,
        MAIN_MESSAGE,
        RESOURCE_LINKS,
        STORIES_PUBLISHED,
        STORIES_PENDING,
        SITE_URL,
    ];
}

/// Raw key-value persistence.
///
/// Values are JSON documents stored as text. Implementations decide where
/// they live; see [`MemoryStore`] for the in-process one.
pub trait KeyValueStore: Send {
    /// Read the raw JSON stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store raw JSON under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage refuses the write.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with raw entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value under `key`, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Read and decode the value under `key`.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the value is not valid
/// JSON for `T`. A missing key is `Ok(None)`.
pub fn read<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write `value` under `key`.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized or the store refuses it.
pub fn write<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, raw)
}

/// Load the value under `key`, seeding it when missing or unreadable.
///
/// The seeded value is persisted so the next load sees the same data (and,
/// for collections, the same generated ids).
pub fn load_or_seed<T, F>(store: &mut dyn KeyValueStore, key: &str, seed: F) -> T
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> T,
{
    match read::<T>(store, key) {
        Ok(Some(value)) => return value,
        Ok(None) => tracing::debug!(key, "No stored value, seeding default"),
        Err(e) => tracing::warn!(key, error = %e, "Unreadable stored value, seeding default"),
    }

    let value = seed();
    persist(store, key, &value);
    value
}

/// Write `value` under `key`, logging and discarding any failure.
pub fn persist<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    if let Err(e) = write(store, key, value) {
        tracing::warn!(key, error = %e, "Failed to persist value");
    }
}
