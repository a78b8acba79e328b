//! Cart Model
//!
//! Persisted as a JSON object keyed by line key, e.g.
//!
//! ```json
//! {
//!   "1": { "id": 1, "name": "Butter Chicken", "price": 220, "quantity": 2 },
//!   "special-s1": { "id": "special-s1", "name": "MOM'S Special Thali", "price": 299, "quantity": 1 }
//! }
//! ```
//!
//! The order page reads the same object, so the wire shape must not drift.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};
use crate::types::Price;

const SPECIAL_PREFIX: &str = "special-";

/// Cart line key
///
/// Menu items are keyed by their numeric id, specials by `special-<id>`.
/// Ordering puts menu ids (numerically) before specials.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineKey {
    Menu(i64),
    Special(String),
}

impl LineKey {
    pub fn menu(id: i64) -> Self {
        LineKey::Menu(id)
    }

    pub fn special(id: impl Into<String>) -> Self {
        LineKey::Special(id.into())
    }

    /// The `id` field stored inside the line for this key
    pub fn line_id(&self) -> LineId {
        match self {
            LineKey::Menu(id) => LineId::Number(*id),
            LineKey::Special(_) => LineId::Text(self.to_string()),
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKey::Menu(id) => write!(f, "{id}"),
            LineKey::Special(id) => write!(f, "{SPECIAL_PREFIX}{id}"),
        }
    }
}

impl FromStr for LineKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix(SPECIAL_PREFIX)
            && !rest.is_empty()
        {
            return Ok(LineKey::Special(rest.to_string()));
        }
        s.parse::<i64>().map(LineKey::Menu).map_err(|_| {
            AppError::with_message(ErrorCode::InvalidLineKey, format!("Invalid line key: {s}"))
                .with_detail("key", s)
        })
    }
}

impl Serialize for LineKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LineKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// `id` field of a stored line: integer for menu items, full key for specials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineId {
    Number(i64),
    Text(String),
}

/// One cart line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineId,
    pub name: String,
    /// Unit price in whole rupees
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub quantity: u32,
}

impl CartLine {
    /// New line with quantity 0 (callers bump it right after insert)
    pub fn new(key: &LineKey, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: key.line_id(),
            name: name.into(),
            price,
            quantity: 0,
        }
    }

    /// price × quantity, saturating on absurd stored values
    pub fn line_total(&self) -> Price {
        self.price.saturating_mul(Price::from(self.quantity))
    }
}

/// Cart mapping (line key → line)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: BTreeMap<LineKey, CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.get(key)
    }

    pub fn get_mut(&mut self, key: &LineKey) -> Option<&mut CartLine> {
        self.lines.get_mut(key)
    }

    pub fn contains(&self, key: &LineKey) -> bool {
        self.lines.contains_key(key)
    }

    /// Insert the line if absent, returning a mutable handle either way
    pub fn entry_or_insert(&mut self, key: LineKey, line: CartLine) -> &mut CartLine {
        self.lines.entry(key).or_insert(line)
    }

    pub fn insert(&mut self, key: LineKey, line: CartLine) -> Option<CartLine> {
        self.lines.insert(key, line)
    }

    pub fn remove(&mut self, key: &LineKey) -> Option<CartLine> {
        self.lines.remove(key)
    }

    /// Quantity for a key (0 when absent)
    pub fn quantity_of(&self, key: &LineKey) -> u32 {
        self.lines.get(key).map(|l| l.quantity).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LineKey, &CartLine)> {
        self.lines.iter()
    }

    /// Σ quantity
    pub fn item_count(&self) -> u32 {
        self.lines
            .values()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Σ price × quantity
    pub fn total_amount(&self) -> Price {
        self.lines
            .values()
            .fold(0, |acc: Price, l| acc.saturating_add(l.line_total()))
    }
}
