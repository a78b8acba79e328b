//! Cart panel and floating badge

use shared::models::{Cart, CartLine, LineKey};
use shared::types::Price;
use shared::util::format_price;

use crate::cart::CartSummary;
use crate::command::UiCommand;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// One line in the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    pub key: LineKey,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
    /// `₹220 × 2 = ₹440`
    pub detail_label: String,
    pub increment: UiCommand,
    pub decrement: UiCommand,
    pub remove: UiCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartPanelView {
    Empty { message: String },
    Filled { rows: Vec<CartRowView>, total_label: String },
}

impl CartPanelView {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Floating cart button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub count: u32,
    /// `Cart (N)`
    pub label: String,
}

pub fn detail_label(line: &CartLine, currency: &str) -> String {
    format!(
        "{} × {} = {}",
        format_price(currency, line.price),
        line.quantity,
        format_price(currency, line.line_total())
    )
}

pub fn project_cart_row(key: &LineKey, line: &CartLine, currency: &str) -> CartRowView {
    CartRowView {
        key: key.clone(),
        name: line.name.clone(),
        unit_price: line.price,
        quantity: line.quantity,
        line_total: line.line_total(),
        detail_label: detail_label(line, currency),
        increment: UiCommand::Increment(key.clone()),
        decrement: UiCommand::Decrement(key.clone()),
        remove: UiCommand::Remove(key.clone()),
    }
}

/// Rows in line-key order, plus the grand total
pub fn project_cart_panel(cart: &Cart, currency: &str) -> CartPanelView {
    if cart.is_empty() {
        return CartPanelView::Empty {
            message: EMPTY_CART_MESSAGE.to_string(),
        };
    }
    let rows = cart
        .iter()
        .map(|(key, line)| project_cart_row(key, line, currency))
        .collect();
    CartPanelView::Filled {
        rows,
        total_label: format_price(currency, cart.total_amount()),
    }
}

pub fn project_badge(summary: &CartSummary) -> BadgeView {
    BadgeView {
        count: summary.item_count,
        label: format!("Cart ({})", summary.item_count),
    }
}
