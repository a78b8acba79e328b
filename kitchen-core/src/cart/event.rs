//! Cart change notifications
//!
//! ```text
//! CartStore (mutation persisted)
//!        │
//!        └── Subscribers::notify(CartChange)
//!               ├── badge      (always)
//!               ├── cart panel (always)
//!               └── menu       (affected card, or everything)
//! ```
//!
//! Listeners run synchronously inside the mutating call. They may read the
//! store, mutate it again, or (un)subscribe without deadlocking: the listener
//! list is snapshotted before dispatch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shared::models::{Cart, LineKey};
use shared::types::Price;

/// Derived aggregates shown by the badge and the panel summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// Σ quantity
    pub item_count: u32,
    /// Σ price × quantity
    pub total_amount: Price,
}

impl CartSummary {
    pub fn of(cart: &Cart) -> Self {
        Self {
            item_count: cart.item_count(),
            total_amount: cart.total_amount(),
        }
    }
}

/// What changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// One line changed; quantity 0 means the line is gone
    Line { key: LineKey, quantity: u32 },
    /// Whole mapping written via `put`
    Replaced,
    /// Persisted state removed
    Cleared,
    /// Re-read from storage after another tab wrote it
    Reloaded,
}

/// Notification delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartChange {
    pub kind: ChangeKind,
    pub summary: CartSummary,
}

/// Which part of the menu grid needs redrawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRedraw {
    /// Nothing on the menu shows this line (specials)
    None,
    /// Only the card of this menu item
    Card(i64),
    All,
}

/// Views affected by a change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedrawPlan {
    pub badge: bool,
    pub panel: bool,
    pub menu: MenuRedraw,
}

impl ChangeKind {
    pub fn redraw_plan(&self) -> RedrawPlan {
        let menu = match self {
            ChangeKind::Line { key: LineKey::Menu(id), .. } => MenuRedraw::Card(*id),
            ChangeKind::Line { key: LineKey::Special(_), .. } => MenuRedraw::None,
            ChangeKind::Replaced | ChangeKind::Cleared | ChangeKind::Reloaded => MenuRedraw::All,
        };
        RedrawPlan {
            badge: true,
            panel: true,
            menu,
        }
    }
}

/// Subscription handle returned by [`Subscribers::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&CartChange)>;

/// Synchronous observer list
#[derive(Default)]
pub struct Subscribers {
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&CartChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns false when the id was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    pub fn notify(&self, change: &CartChange) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener(change);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(kind: ChangeKind) -> CartChange {
        CartChange {
            kind,
            summary: CartSummary::default(),
        }
    }

    #[test]
    fn test_redraw_plan() {
        let plan = ChangeKind::Line { key: LineKey::Menu(3), quantity: 1 }.redraw_plan();
        assert!(plan.badge && plan.panel);
        assert_eq!(plan.menu, MenuRedraw::Card(3));

        let plan = ChangeKind::Line { key: LineKey::special("s1"), quantity: 0 }.redraw_plan();
        assert_eq!(plan.menu, MenuRedraw::None);

        assert_eq!(ChangeKind::Cleared.redraw_plan().menu, MenuRedraw::All);
        assert_eq!(ChangeKind::Reloaded.redraw_plan().menu, MenuRedraw::All);
    }

    #[test]
    fn test_subscribe_notify_unsubscribe() {
        let subs = Subscribers::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = subs.subscribe(move |c| sink.borrow_mut().push(c.kind.clone()));
        subs.notify(&change(ChangeKind::Cleared));
        assert_eq!(*seen.borrow(), vec![ChangeKind::Cleared]);

        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.notify(&change(ChangeKind::Reloaded));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_listener_may_unsubscribe_itself() {
        let subs = Rc::new(Subscribers::new());
        let calls = Rc::new(Cell::new(0));
        let id_slot: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let (s, c, slot) = (Rc::clone(&subs), Rc::clone(&calls), Rc::clone(&id_slot));
        let id = subs.subscribe(move |_| {
            c.set(c.get() + 1);
            if let Some(id) = slot.get() {
                s.unsubscribe(id);
            }
        });
        id_slot.set(Some(id));

        subs.notify(&change(ChangeKind::Replaced));
        subs.notify(&change(ChangeKind::Replaced));
        assert_eq!(calls.get(), 1);
        assert!(subs.is_empty());
    }
}
