//! Storage layer - string key/value persistence
//!
//! The cart store and the reservation log only ever see [`KeyValueStore`];
//! the concrete backend is injected:
//!
//! | Backend | Where |
//! |---------|-------|
//! | [`MemoryStorage`] | tests, ephemeral sessions |
//! | [`FileStorage`] | CLI driver, one JSON file under `WORK_DIR` |
//! | `LocalStorage` | browser binding (`kitchen-web`) |
//!
//! Values are JSON text, matching what the page scripts read and write.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Write rejected: {0}")]
    Rejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        let code = match &err {
            StorageError::Unavailable(_) => ErrorCode::StorageUnavailable,
            StorageError::Serialization(_) => ErrorCode::StorageCorrupted,
            StorageError::Rejected(_) | StorageError::Io(_) => ErrorCode::StorageWriteFailed,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// String-keyed persistence (the `localStorage` contract)
///
/// Single-threaded, synchronous, last write wins.
pub trait KeyValueStore {
    /// Raw value under `key`, `None` when absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Read and parse a JSON value, treating absent, unreadable or corrupt data as `None`
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage read failed, treating as empty");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Corrupt stored value, treating as empty");
            None
        }
    }
}

/// Serialize and persist a JSON value
pub fn write_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> StorageResult<()> {
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw)
}
