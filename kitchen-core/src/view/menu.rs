//! Menu grid projection

use shared::models::{Cart, Category, CategoryFilter, LineKey, MenuItem};
use shared::util::format_price;

use crate::catalog::Catalog;
use crate::command::UiCommand;
use crate::placeholder::{DEFAULT_HEIGHT, DEFAULT_WIDTH, ImageSource};

/// One menu card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCardView {
    pub item_id: i64,
    pub name: String,
    pub description: String,
    /// e.g. `₹220`
    pub price_label: String,
    pub image: ImageSource,
    /// `Add`, or `Qty: N` once the item is in the cart
    pub add_label: String,
    pub add: UiCommand,
    pub order: UiCommand,
}

/// Menu grid contents for one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub filter: CategoryFilter,
    pub cards: Vec<MenuCardView>,
}

/// Category button state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButtonView {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub active: bool,
}

pub fn add_label(quantity: u32) -> String {
    if quantity > 0 {
        format!("Qty: {quantity}")
    } else {
        "Add".to_string()
    }
}

pub fn project_menu_card(item: &MenuItem, cart: &Cart, currency: &str) -> MenuCardView {
    let quantity = cart.quantity_of(&LineKey::Menu(item.id));
    MenuCardView {
        item_id: item.id,
        name: item.name.clone(),
        description: item.description.clone(),
        price_label: format_price(currency, item.price),
        image: ImageSource::new(&item.name, &item.image, DEFAULT_WIDTH, DEFAULT_HEIGHT),
        add_label: add_label(quantity),
        add: UiCommand::AddToCart(item.id),
        order: UiCommand::OrderNow(item.id),
    }
}

/// One card per catalog item matching the filter, labels reflecting the cart
pub fn project_menu(
    catalog: &Catalog,
    cart: &Cart,
    filter: CategoryFilter,
    currency: &str,
) -> MenuView {
    let cards = catalog
        .filter(filter)
        .map(|item| project_menu_card(item, cart, currency))
        .collect();
    MenuView { filter, cards }
}

/// "All" followed by every category; exactly one button is active
pub fn project_category_buttons(active: CategoryFilter) -> Vec<CategoryButtonView> {
    std::iter::once((CategoryFilter::All, "All"))
        .chain(
            Category::ALL
                .iter()
                .map(|c| (CategoryFilter::Only(*c), c.label())),
        )
        .map(|(filter, label)| CategoryButtonView {
            filter,
            label,
            active: filter == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CartLine;

    fn cart_with(id: i64, quantity: u32) -> Cart {
        let mut cart = Cart::new();
        let key = LineKey::Menu(id);
        cart.entry_or_insert(key.clone(), CartLine::new(&key, "x", 1))
            .quantity = quantity;
        cart
    }

    #[test]
    fn test_add_label() {
        assert_eq!(add_label(0), "Add");
        assert_eq!(add_label(3), "Qty: 3");
    }

    #[test]
    fn test_project_menu_all() {
        let catalog = Catalog::builtin();
        let view = project_menu(&catalog, &Cart::new(), CategoryFilter::All, "₹");
        assert_eq!(view.cards.len(), 12);
        assert!(view.cards.iter().all(|c| c.add_label == "Add"));

        let first = &view.cards[0];
        assert_eq!(first.name, "Butter Chicken");
        assert_eq!(first.price_label, "₹220");
        assert_eq!(first.image.src, "images/butter-chicken.jpg");
        assert_eq!(first.add, UiCommand::AddToCart(1));
        assert_eq!(first.order, UiCommand::OrderNow(1));
    }

    #[test]
    fn test_project_menu_filtered_reflects_cart() {
        let catalog = Catalog::builtin();
        let cart = cart_with(11, 2);
        let view = project_menu(&catalog, &cart, CategoryFilter::Only(Category::Beverages), "₹");

        let ids: Vec<i64> = view.cards.iter().map(|c| c.item_id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
        assert_eq!(view.cards[1].add_label, "Qty: 2");
        assert_eq!(view.cards[0].add_label, "Add");
    }

    #[test]
    fn test_category_buttons_single_active() {
        let buttons = project_category_buttons(CategoryFilter::Only(Category::Desserts));
        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[0].label, "All");
        let active: Vec<_> = buttons.iter().filter(|b| b.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Desserts");
    }
}
