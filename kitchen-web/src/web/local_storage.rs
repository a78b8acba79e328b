//! `window.localStorage` backend

use kitchen_core::storage::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

pub(super) struct LocalStorage {
    inner: web_sys::Storage,
}

fn js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

impl LocalStorage {
    /// Fails when storage is disabled (private mode, blocked cookies)
    pub(super) fn from_window(window: &web_sys::Window) -> StorageResult<Self> {
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is not available".into()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_error(&e)))
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        // QuotaExceededError lands here
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(js_error(&e)))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(js_error(&e)))
    }
}
