//! Locally stored history: reservation log and past orders

use std::rc::Rc;

use shared::error::AppResult;
use shared::models::Reservation;

use crate::storage::{KeyValueStore, StorageError, read_json, write_json};

/// Append-only reservation log under one storage key (JSON array)
pub struct ReservationLog {
    storage: Rc<dyn KeyValueStore>,
    key: String,
}

impl ReservationLog {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Stored entries as written, oldest first; an unreadable log reads as empty
    fn raw(&self) -> Vec<serde_json::Value> {
        read_json(self.storage.as_ref(), &self.key).unwrap_or_default()
    }

    /// Records that match the current schema, oldest first
    pub fn all(&self) -> Vec<Reservation> {
        self.raw()
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect()
    }

    /// Number of stored entries, including ones `all` cannot type
    pub fn count(&self) -> usize {
        self.raw().len()
    }

    /// Append one record and return the new length
    ///
    /// Earlier entries are written back untouched, whatever their shape.
    pub fn append(&self, reservation: Reservation) -> AppResult<usize> {
        let mut all = self.raw();
        all.push(serde_json::to_value(&reservation).map_err(StorageError::from)?);
        write_json(self.storage.as_ref(), &self.key, &all)?;
        tracing::info!(count = all.len(), "Reservation stored");
        Ok(all.len())
    }
}

/// Past orders written by the order page; only the count is read here
pub struct OrderHistory {
    storage: Rc<dyn KeyValueStore>,
    key: String,
}

impl OrderHistory {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Length of the stored array; absent or unparsable counts as 0
    pub fn count(&self) -> usize {
        read_json::<Vec<serde_json::Value>>(self.storage.as_ref(), &self.key)
            .map_or(0, |orders| orders.len())
    }
}
