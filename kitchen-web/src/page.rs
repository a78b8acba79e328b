//! Page contract
//!
//! Element ids and selectors the page markup provides, plus the data
//! attributes the binding puts on generated buttons. Every lookup in the
//! binding is optional: a missing element just disables that feature.

use kitchen_core::UiCommand;
use kitchen_core::forms::FormStatus;
use shared::models::{CategoryFilter, LineKey};

// ========== Menu / specials ==========
pub const MENU_GRID: &str = "menu-grid";
pub const SPECIALS_GRID: &str = "specials-grid";
pub const CATEGORY_BUTTONS: &str = ".category-controls button[data-cat]";
pub const CATEGORY_ATTR: &str = "data-cat";

// ========== Cart chrome (created when absent) ==========
pub const FLOATING_CART: &str = "floating-cart";
pub const CART_COUNT: &str = "cart-count";
pub const CART_PANEL: &str = "cart-panel";
pub const CART_ITEMS: &str = "cart-items";
pub const CART_SUMMARY: &str = "cart-summary";
pub const CLEAR_CART: &str = "clear-cart";
pub const CLOSE_CART: &str = "close-cart";
pub const CHECKOUT_BTN: &str = "checkout-btn";
pub const VIEW_ORDERS: &str = "view-orders";

// ========== Forms ==========
pub const RESERVE_FORM: &str = "reserve-form";
pub const RESERVE_MSG: &str = "reserve-msg";
pub const R_NAME: &str = "r-name";
pub const R_DATE: &str = "r-date";
pub const R_TIME: &str = "r-time";
pub const R_PEOPLE: &str = "r-people";
pub const R_PHONE: &str = "r-phone";
pub const CONTACT_FORM: &str = "contact-form";
pub const CONTACT_MSG: &str = "contact-msg";
pub const C_NAME: &str = "c-name";
pub const C_EMAIL: &str = "c-email";
pub const C_MESSAGE: &str = "c-message";

// ========== Misc ==========
pub const YEAR: &str = "year";
pub const MOBILE_TOGGLE: &str = "mobile-toggle";
pub const MAIN_NAV: &str = "main-nav";
pub const IN_PAGE_NAV_LINKS: &str = ".main-nav a[href^=\"#\"]";

// ========== Data attributes ==========
pub const ACTION_ATTR: &str = "data-action";
pub const VALUE_ATTR: &str = "data-value";
/// Placeholder to use if the image fails
pub const FALLBACK_ATTR: &str = "data-fallback";
/// Set once the placeholder was swapped in
pub const FALLEN_BACK_ATTR: &str = "data-fallen-back";

/// Id of a menu card's Add/Qty button
pub fn add_button_id(item_id: i64) -> String {
    format!("add-{item_id}")
}

/// `data-action` / `data-value` pair for a button that dispatches `command`
///
/// Only commands carried by generated buttons have an encoding.
pub fn command_attrs(command: &UiCommand) -> Option<(&'static str, String)> {
    let attrs = match command {
        UiCommand::AddToCart(id) => ("add", id.to_string()),
        UiCommand::OrderNow(id) => ("order", id.to_string()),
        UiCommand::OrderSpecial(id) => ("special", id.clone()),
        UiCommand::Increment(key) => ("inc", key.to_string()),
        UiCommand::Decrement(key) => ("dec", key.to_string()),
        UiCommand::Remove(key) => ("remove", key.to_string()),
        UiCommand::SelectCategory(filter) => ("category", filter.as_str().to_string()),
        _ => return None,
    };
    Some(attrs)
}

/// Inverse of [`command_attrs`]; `None` for unknown actions or bad values
pub fn command_from_attrs(action: &str, value: &str) -> Option<UiCommand> {
    let command = match action {
        "add" => UiCommand::AddToCart(value.parse().ok()?),
        "order" => UiCommand::OrderNow(value.parse().ok()?),
        "special" if !value.is_empty() => UiCommand::OrderSpecial(value.to_string()),
        "inc" => UiCommand::Increment(value.parse::<LineKey>().ok()?),
        "dec" => UiCommand::Decrement(value.parse::<LineKey>().ok()?),
        "remove" => UiCommand::Remove(value.parse::<LineKey>().ok()?),
        "category" => UiCommand::SelectCategory(value.parse::<CategoryFilter>().ok()?),
        _ => return None,
    };
    Some(command)
}

/// Message colour under a form
pub fn status_color(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Accepted => "green",
        FormStatus::Rejected => "crimson",
    }
}

/// A `storage` event concerns the cart when it names the cart key, or has
/// no key at all (`localStorage.clear()` in another tab)
pub fn storage_event_affects_cart(event_key: Option<&str>, cart_key: &str) -> bool {
    event_key.is_none_or(|key| key == cart_key)
}
