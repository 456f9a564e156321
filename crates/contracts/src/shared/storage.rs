//! Key/value persistence for record collections.
//!
//! Every collection is stored as a JSON array under a fixed key. Reads never
//! fail towards the caller: a missing or unreadable value yields the
//! caller-supplied fallback and a warning in the log.

use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend is unavailable")]
    Unavailable,
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string key/value backend (browser `Storage`, or memory in tests).
///
/// Methods take `&self`: the browser storage object is a shared handle and
/// all access happens on one thread.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Used by tests and as a stand-in when the browser
/// refuses access to its storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects every write, like a full quota.
    pub fn read_only() -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            read_only: true,
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Load a record array stored under `key`.
///
/// The value must be a JSON array; anything else (absent, unreadable, not an
/// array) yields `fallback`. Elements that do not deserialize into `T` are
/// dropped one by one so a single bad record does not wipe the collection.
pub fn load<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
    fallback: Vec<T>,
) -> Vec<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return fallback,
        Err(e) => {
            log::warn!("Error loading data for key {}: {}", key, e);
            return fallback;
        }
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("Error loading data for key {}: {}", key, e);
            return fallback;
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Dropping malformed record #{} under {}: {}", index, key, e);
                None
            }
        })
        .collect()
}

/// Serialize and write `records` under `key`.
pub fn try_save<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    records: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(records)?;
    storage.set_item(key, &raw)
}

/// Same as [`try_save`], but the failure is only logged. In-memory state and
/// storage may diverge afterwards.
pub fn save<T: Serialize>(storage: &dyn KeyValueStorage, key: &str, records: &[T]) {
    if let Err(e) = try_save(storage, key, records) {
        log::error!("Error saving data for key {}: {}", key, e);
    }
}

/// Revision counter stored next to a collection key. Missing or garbage
/// counters read as zero.
pub fn read_revision(storage: &dyn KeyValueStorage, revision_key: &str) -> u64 {
    storage
        .get_item(revision_key)
        .ok()
        .flatten()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

pub fn write_revision(
    storage: &dyn KeyValueStorage,
    revision_key: &str,
    revision: u64,
) -> Result<(), StorageError> {
    storage.set_item(revision_key, &revision.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
        qty: u32,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "a".into(), qty: 1 },
            Row { id: "b".into(), qty: 2 },
        ]
    }

    #[test]
    fn test_load_of_saved_collection_returns_same_records() {
        let storage = MemoryStorage::new();
        try_save(&storage, "rows", &rows()).unwrap();
        let loaded: Vec<Row> = load(&storage, "rows", Vec::new());
        assert_eq!(loaded, rows());
    }

    #[test]
    fn test_missing_key_yields_fallback() {
        let storage = MemoryStorage::new();
        let loaded: Vec<Row> = load(&storage, "rows", rows());
        assert_eq!(loaded, rows());
    }

    #[test]
    fn test_malformed_json_yields_fallback() {
        let storage = MemoryStorage::new();
        storage.set_item("rows", "{not json").unwrap();
        let loaded: Vec<Row> = load(&storage, "rows", rows());
        assert_eq!(loaded, rows());

        storage.set_item("rows", r#"{"id":"x"}"#).unwrap();
        let loaded: Vec<Row> = load(&storage, "rows", Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_bad_elements_are_dropped_individually() {
        let storage = MemoryStorage::new();
        storage
            .set_item("rows", r#"[{"id":"a","qty":1},{"id":"b","qty":"many"},{"id":"c","qty":3}]"#)
            .unwrap();
        let loaded: Vec<Row> = load(&storage, "rows", Vec::new());
        let ids: Vec<&str> = loaded.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let storage = MemoryStorage::read_only();
        assert!(try_save(&storage, "rows", &rows()).is_err());
        save(&storage, "rows", &rows());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_revision_defaults_to_zero() {
        let storage = MemoryStorage::new();
        assert_eq!(read_revision(&storage, "rows.rev"), 0);
        storage.set_item("rows.rev", "garbage").unwrap();
        assert_eq!(read_revision(&storage, "rows.rev"), 0);
        write_revision(&storage, "rows.rev", 7).unwrap();
        assert_eq!(read_revision(&storage, "rows.rev"), 7);
    }
}
