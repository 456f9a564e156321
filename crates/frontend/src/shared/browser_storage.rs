//! Browser `Storage` binding for the record collections.

use contracts::shared::storage::{KeyValueStorage, StorageError};
use wasm_bindgen::JsValue;
use web_sys::window;

pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// `window.localStorage`
    pub fn local() -> Result<Self, StorageError> {
        let storage = window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner: storage })
    }

    /// `window.sessionStorage` (per tab)
    pub fn session() -> Result<Self, StorageError> {
        let storage = window()
            .ok_or(StorageError::Unavailable)?
            .session_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner: storage })
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(value)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| "unknown error".to_string())
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: js_message(&e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(&e),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(&e),
        })
    }
}

/// Run `f` against local storage. `None` (and an error in the console) when
/// the browser refuses access.
pub fn with_local<R>(f: impl FnOnce(&dyn KeyValueStorage) -> R) -> Option<R> {
    match BrowserStorage::local() {
        Ok(storage) => Some(f(&storage)),
        Err(e) => {
            log::error!("Local storage not accessible: {}", e);
            None
        }
    }
}
