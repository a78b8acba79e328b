//! Cart Store - persisted line-item mapping
//!
//! Every mutation is read → adjust → write back → notify. Nothing is cached:
//! the persisted value is the source of truth, so writes from another tab
//! are picked up by the next read (last write wins).

use std::rc::Rc;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Cart, CartLine, LineKey};
use shared::types::Price;

use super::event::{CartChange, CartSummary, ChangeKind, Subscribers, SubscriptionId};
use crate::storage::{KeyValueStore, read_json, write_json};

pub struct CartStore {
    storage: Rc<dyn KeyValueStore>,
    key: String,
    subscribers: Subscribers,
}

impl CartStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            subscribers: Subscribers::new(),
        }
    }

    /// Storage key of the persisted mapping
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn subscribe(&self, listener: impl Fn(&CartChange) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // ==================== Reads ====================

    /// Current mapping; absent or unparsable state reads as empty
    pub fn get(&self) -> Cart {
        read_json(self.storage.as_ref(), &self.key).unwrap_or_default()
    }

    pub fn item_count(&self) -> u32 {
        self.get().item_count()
    }

    pub fn total_amount(&self) -> Price {
        self.get().total_amount()
    }

    pub fn quantity_of(&self, key: &LineKey) -> u32 {
        self.get().quantity_of(key)
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.get())
    }

    // ==================== Whole-cart writes ====================

    /// Persist the whole mapping, then notify
    pub fn put(&self, cart: &Cart) -> AppResult<()> {
        self.persist(cart, ChangeKind::Replaced)
    }

    /// Remove persisted state, then notify
    pub fn clear(&self) -> AppResult<()> {
        self.storage.remove(&self.key)?;
        tracing::debug!(key = %self.key, "Cart cleared");
        self.subscribers.notify(&CartChange {
            kind: ChangeKind::Cleared,
            summary: CartSummary::default(),
        });
        Ok(())
    }

    /// Re-read persisted state and notify (another tab wrote it)
    pub fn reconcile(&self) -> CartSummary {
        let summary = self.summary();
        tracing::debug!(items = summary.item_count, "Cart reloaded from storage");
        self.subscribers.notify(&CartChange {
            kind: ChangeKind::Reloaded,
            summary,
        });
        summary
    }

    // ==================== Line mutations ====================

    /// Menu "Add" / specials "Order": insert with quantity 0 if absent, then +1.
    ///
    /// Returns the new quantity.
    pub fn add_or_increment(&self, key: LineKey, name: &str, price: Price) -> AppResult<u32> {
        let mut cart = self.get();
        let line = cart.entry_or_insert(key.clone(), CartLine::new(&key, name, price));
        line.quantity = line.quantity.saturating_add(1);
        let quantity = line.quantity;
        self.persist_line(&cart, key, quantity)?;
        Ok(quantity)
    }

    /// Quick order: make sure the line exists with at least one unit.
    ///
    /// An existing quantity ≥ 1 is left untouched.
    pub fn ensure_at_least_one(&self, key: LineKey, name: &str, price: Price) -> AppResult<u32> {
        let mut cart = self.get();
        let line = cart.entry_or_insert(key.clone(), CartLine::new(&key, name, price));
        if line.quantity < 1 {
            line.quantity = 1;
        }
        let quantity = line.quantity;
        self.persist_line(&cart, key, quantity)?;
        Ok(quantity)
    }

    /// +1 on an existing line
    pub fn increment(&self, key: &LineKey) -> AppResult<u32> {
        let mut cart = self.get();
        let line = cart.get_mut(key).ok_or_else(|| line_not_found(key))?;
        line.quantity = line.quantity.saturating_add(1);
        let quantity = line.quantity;
        self.persist_line(&cart, key.clone(), quantity)?;
        Ok(quantity)
    }

    /// −1 on an existing line, never below zero; zero deletes the line.
    ///
    /// Returns the new quantity (0 = removed).
    pub fn decrement(&self, key: &LineKey) -> AppResult<u32> {
        let mut cart = self.get();
        let line = cart.get_mut(key).ok_or_else(|| line_not_found(key))?;
        line.quantity = line.quantity.saturating_sub(1);
        let quantity = line.quantity;
        if quantity == 0 {
            cart.remove(key);
        }
        self.persist_line(&cart, key.clone(), quantity)?;
        Ok(quantity)
    }

    /// Delete the line unconditionally (absent key is fine)
    pub fn remove(&self, key: &LineKey) -> AppResult<()> {
        let mut cart = self.get();
        cart.remove(key);
        self.persist_line(&cart, key.clone(), 0)
    }

    // ==================== Internals ====================

    fn persist_line(&self, cart: &Cart, key: LineKey, quantity: u32) -> AppResult<()> {
        tracing::debug!(key = %key, quantity, "Cart line updated");
        self.persist(cart, ChangeKind::Line { key, quantity })
    }

    fn persist(&self, cart: &Cart, kind: ChangeKind) -> AppResult<()> {
        if let Err(e) = write_json(self.storage.as_ref(), &self.key, cart) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist cart");
            return Err(e.into());
        }
        self.subscribers.notify(&CartChange {
            kind,
            summary: CartSummary::of(cart),
        });
        Ok(())
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

fn line_not_found(key: &LineKey) -> AppError {
    AppError::with_message(ErrorCode::CartLineNotFound, format!("Cart line {key} not found"))
        .with_detail("key", key.to_string())
}
