use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::error::ErrorCode;
use shared::models::{Cart, LineKey};

use super::*;
use crate::storage::{KeyValueStore, MemoryStorage};

const CART_KEY: &str = "moms_cart";

fn create_test_store() -> (Rc<MemoryStorage>, CartStore) {
    let storage = Rc::new(MemoryStorage::new());
    let store = CartStore::new(storage.clone(), CART_KEY);
    (storage, store)
}

fn record_changes(store: &CartStore) -> Rc<RefCell<Vec<CartChange>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |change| sink.borrow_mut().push(change.clone()));
    seen
}

fn assert_aggregates_consistent(cart: &Cart, store: &CartStore) {
    let count: u32 = cart.iter().map(|(_, l)| l.quantity).sum();
    let total: i64 = cart.iter().map(|(_, l)| l.price * i64::from(l.quantity)).sum();
    assert_eq!(store.item_count(), count);
    assert_eq!(store.total_amount(), total);
    assert!(cart.iter().all(|(_, l)| l.quantity > 0), "zero-quantity line left behind");
}

// ========================================================================
// Reads
// ========================================================================

#[test]
fn test_get_empty_when_absent() {
    let (_, store) = create_test_store();
    assert!(store.get().is_empty());
    assert_eq!(store.item_count(), 0);
    assert_eq!(store.total_amount(), 0);
}

#[test]
fn test_get_empty_when_corrupt() {
    let storage = Rc::new(MemoryStorage::with_entries([(CART_KEY, "{\"1\": oops")]));
    let store = CartStore::new(storage, CART_KEY);
    assert!(store.get().is_empty());

    // the next write replaces the damaged value
    store.add_or_increment(LineKey::Menu(1), "Butter Chicken", 220).unwrap();
    assert_eq!(store.quantity_of(&LineKey::Menu(1)), 1);
}

#[test]
fn test_get_reads_existing_state() {
    let raw = r#"{"2":{"id":2,"name":"Paneer Tikka","price":180,"quantity":2}}"#;
    let storage = Rc::new(MemoryStorage::with_entries([(CART_KEY, raw)]));
    let store = CartStore::new(storage, CART_KEY);
    assert_eq!(store.item_count(), 2);
    assert_eq!(store.total_amount(), 360);
}

#[test]
fn test_huge_stored_values_do_not_panic() {
    let raw = r#"{"1":{"id":1,"name":"Butter Chicken","price":9223372036854775807,"quantity":4294967295}}"#;
    let storage = Rc::new(MemoryStorage::with_entries([(CART_KEY, raw)]));
    let store = CartStore::new(storage, CART_KEY);
    assert_eq!(store.total_amount(), i64::MAX);

    assert_eq!(store.increment(&LineKey::Menu(1)).unwrap(), u32::MAX);
    assert_eq!(store.add_or_increment(LineKey::Menu(1), "Butter Chicken", 220).unwrap(), u32::MAX);
    assert_eq!(store.summary().item_count, u32::MAX);
}

// ========================================================================
// Mutations
// ========================================================================

#[test]
fn test_add_twice_then_decrement() {
    let (_, store) = create_test_store();
    let key = LineKey::Menu(1);

    assert_eq!(store.add_or_increment(key.clone(), "Butter Chicken", 220).unwrap(), 1);
    assert_eq!(store.add_or_increment(key.clone(), "Butter Chicken", 220).unwrap(), 2);
    assert_eq!(store.decrement(&key).unwrap(), 1);

    let cart = store.get();
    let line = cart.get(&key).unwrap();
    assert_eq!(line.quantity, 1);
    assert_eq!(line.line_total(), 220);
    assert_eq!(store.total_amount(), 220);
}

#[test]
fn test_decrement_to_zero_removes_line() {
    let (_, store) = create_test_store();
    let key = LineKey::Menu(7);
    store.add_or_increment(key.clone(), "Gulab Jamun", 80).unwrap();

    assert_eq!(store.decrement(&key).unwrap(), 0);
    assert!(!store.get().contains(&key));
    assert_eq!(store.item_count(), 0);
}

#[test]
fn test_decrement_stored_zero_quantity_line() {
    // page-written state may hold a zero line; decrement must not underflow
    let raw = r#"{"3":{"id":3,"name":"Dal Makhani","price":150,"quantity":0}}"#;
    let storage = Rc::new(MemoryStorage::with_entries([(CART_KEY, raw)]));
    let store = CartStore::new(storage, CART_KEY);

    assert_eq!(store.decrement(&LineKey::Menu(3)).unwrap(), 0);
    assert!(store.get().is_empty());
}

#[test]
fn test_increment_and_decrement_missing_line() {
    let (_, store) = create_test_store();
    let err = store.increment(&LineKey::Menu(5)).unwrap_err();
    assert_eq!(err.code, ErrorCode::CartLineNotFound);

    let err = store.decrement(&LineKey::special("s1")).unwrap_err();
    assert_eq!(err.code, ErrorCode::CartLineNotFound);
    assert!(store.get().is_empty());
}

#[test]
fn test_remove_is_unconditional() {
    let (_, store) = create_test_store();
    let key = LineKey::Menu(4);
    for _ in 0..5 {
        store.add_or_increment(key.clone(), "Schezwan Noodles", 160).unwrap();
    }
    store.remove(&key).unwrap();
    assert!(store.get().is_empty());

    // absent key
    store.remove(&key).unwrap();
}

#[test]
fn test_ensure_at_least_one() {
    let (_, store) = create_test_store();
    let key = LineKey::Menu(2);

    assert_eq!(store.ensure_at_least_one(key.clone(), "Paneer Tikka", 180).unwrap(), 1);
    // existing quantity is kept, not bumped
    assert_eq!(store.ensure_at_least_one(key.clone(), "Paneer Tikka", 180).unwrap(), 1);

    store.add_or_increment(key.clone(), "Paneer Tikka", 180).unwrap();
    assert_eq!(store.ensure_at_least_one(key.clone(), "Paneer Tikka", 180).unwrap(), 2);
}

#[test]
fn test_special_line_shape() {
    let (storage, store) = create_test_store();
    store
        .add_or_increment(LineKey::special("s1"), "MOM'S Special Thali", 299)
        .unwrap();

    let raw = storage.get(CART_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["special-s1"]["id"], "special-s1");
    assert_eq!(json["special-s1"]["quantity"], 1);
}

#[test]
fn test_clear() {
    let (storage, store) = create_test_store();
    store.add_or_increment(LineKey::Menu(1), "Butter Chicken", 220).unwrap();
    store.add_or_increment(LineKey::special("s2"), "Dragon's Stir-Fry (Veg)", 219).unwrap();

    store.clear().unwrap();
    assert_eq!(store.item_count(), 0);
    assert!(store.get().is_empty());
    assert_eq!(storage.get(CART_KEY).unwrap(), None);
}

#[test]
fn test_put_replaces_mapping() {
    let (_, store) = create_test_store();
    store.add_or_increment(LineKey::Menu(1), "Butter Chicken", 220).unwrap();

    let mut cart = Cart::new();
    let key = LineKey::Menu(11);
    cart.entry_or_insert(key.clone(), shared::models::CartLine::new(&key, "Mango Lassi", 75))
        .quantity = 4;
    store.put(&cart).unwrap();

    assert_eq!(store.get(), cart);
    assert_eq!(store.total_amount(), 300);
}

// ========================================================================
// Notifications
// ========================================================================

#[test]
fn test_mutations_notify_with_summary() {
    let (_, store) = create_test_store();
    let seen = record_changes(&store);

    store.add_or_increment(LineKey::Menu(10), "Masala Chai", 40).unwrap();
    store.increment(&LineKey::Menu(10)).unwrap();
    store.decrement(&LineKey::Menu(10)).unwrap();
    store.remove(&LineKey::Menu(10)).unwrap();
    store.clear().unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 5);
    assert_eq!(
        seen[1],
        CartChange {
            kind: ChangeKind::Line { key: LineKey::Menu(10), quantity: 2 },
            summary: CartSummary { item_count: 2, total_amount: 80 },
        }
    );
    assert_eq!(
        seen[3].kind,
        ChangeKind::Line { key: LineKey::Menu(10), quantity: 0 }
    );
    assert_eq!(seen[4].kind, ChangeKind::Cleared);
    assert_eq!(seen[4].summary, CartSummary::default());
}

#[test]
fn test_failed_write_does_not_notify() {
    let (storage, store) = create_test_store();
    let seen = record_changes(&store);
    storage.set_read_only(true);

    let err = store.add_or_increment(LineKey::Menu(1), "Butter Chicken", 220).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageWriteFailed);
    assert!(seen.borrow().is_empty());
    assert!(store.get().is_empty());
}

#[test]
fn test_reconcile_picks_up_external_write() {
    let (storage, store) = create_test_store();
    let seen = record_changes(&store);

    // another tab writes the same key
    storage
        .put(CART_KEY, r#"{"9":{"id":9,"name":"Chocolate Brownie","price":120,"quantity":2}}"#)
        .unwrap();
    let summary = store.reconcile();

    assert_eq!(summary, CartSummary { item_count: 2, total_amount: 240 });
    assert_eq!(seen.borrow()[0].kind, ChangeKind::Reloaded);
}

#[test]
fn test_listener_can_read_store_during_notify() {
    let storage = Rc::new(MemoryStorage::new());
    let store = Rc::new(CartStore::new(storage, CART_KEY));
    let badge = Rc::new(RefCell::new(0u32));

    let (s, b) = (Rc::downgrade(&store), Rc::clone(&badge));
    store.subscribe(move |_| {
        if let Some(store) = s.upgrade() {
            *b.borrow_mut() = store.item_count();
        }
    });

    store.add_or_increment(LineKey::Menu(12), "Cold Coffee", 85).unwrap();
    store.add_or_increment(LineKey::Menu(12), "Cold Coffee", 85).unwrap();
    assert_eq!(*badge.borrow(), 2);
}

// ========================================================================
// Randomized sequences
// ========================================================================

#[test]
fn test_random_sequences_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    let (_, store) = create_test_store();
    let keys = [
        (LineKey::Menu(1), "Butter Chicken", 220),
        (LineKey::Menu(6), "Honey Chilli Potato", 140),
        (LineKey::Menu(12), "Cold Coffee", 85),
        (LineKey::special("s3"), "Homemade Rasmalai (Chef)", 99),
    ];

    for _ in 0..500 {
        let (key, name, price) = &keys[rng.gen_range(0..keys.len())];
        let before = store.quantity_of(key);
        match rng.gen_range(0..5) {
            0 | 1 => {
                let q = store.add_or_increment(key.clone(), name, *price).unwrap();
                assert_eq!(q, before + 1);
            }
            2 => match store.increment(key) {
                Ok(q) => assert_eq!(q, before + 1),
                Err(e) => {
                    assert_eq!(before, 0);
                    assert_eq!(e.code, ErrorCode::CartLineNotFound);
                }
            },
            3 => match store.decrement(key) {
                Ok(q) => assert_eq!(q, before.saturating_sub(1)),
                Err(_) => assert_eq!(before, 0),
            },
            _ => store.remove(key).unwrap(),
        }
        assert_aggregates_consistent(&store.get(), &store);
    }

    store.clear().unwrap();
    assert_eq!(store.item_count(), 0);
}
