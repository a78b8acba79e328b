//! UI commands and host effects
//!
//! Every click handler on the page maps to one [`UiCommand`]. Dispatching it
//! mutates the cart (subscribers redraw) and returns an [`Effect`] the host
//! has to carry out itself: navigation, dialogs, or view state it owns.

use shared::models::{CategoryFilter, LineKey};

/// User intent, one per control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Category button
    SelectCategory(CategoryFilter),
    /// Menu card "Add"
    AddToCart(i64),
    /// Menu card "Order": at least one unit, then go to the order page
    OrderNow(i64),
    /// Specials card "Order"
    OrderSpecial(String),
    /// Cart panel "+"
    Increment(LineKey),
    /// Cart panel "-"
    Decrement(LineKey),
    /// Cart panel "Remove"
    Remove(LineKey),
    /// Floating cart button
    OpenCart,
    CloseCart,
    /// Cart panel "Clear" (asks first)
    ClearCart,
    /// Follow-up of a confirmed [`UiCommand::ClearCart`]
    ConfirmClearCart,
    Checkout,
    /// Cart panel "Orders"
    ViewOrders,
}

/// What the host must do after a dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Relative redirect
    Navigate(String),
    Alert(String),
    /// Ask the user; dispatch `on_confirm` only if they accept
    Confirm {
        message: String,
        on_confirm: Box<UiCommand>,
    },
    /// Category filter changed, rebuild the menu grid
    MenuFilterChanged(CategoryFilter),
    /// Show or hide the cart panel (showing also redraws it)
    PanelVisibility(bool),
}
