//! View models
//!
//! Pure projections of catalog + cart state. Nothing here touches storage
//! or the DOM; the browser binding and the CLI both render from these.

mod cart_panel;
mod menu;
mod specials;

pub use cart_panel::{
    BadgeView, CartPanelView, CartRowView, EMPTY_CART_MESSAGE, detail_label, project_badge,
    project_cart_panel, project_cart_row,
};
pub use menu::{
    CategoryButtonView, MenuCardView, MenuView, add_label, project_category_buttons,
    project_menu, project_menu_card,
};
pub use specials::{SpecialCardView, project_special_card, project_specials};
