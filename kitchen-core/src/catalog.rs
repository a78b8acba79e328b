//! Catalog - built-in menu and chef's specials
//!
//! Read-only reference data defined at startup. Image paths are relative to
//! the page; missing files degrade to generated placeholders.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryFilter, MenuItem, SpecialItem};
use shared::types::Price;

/// (id, category, name, description, price, image)
const MENU: &[(i64, Category, &str, &str, Price, &str)] = &[
    (1, Category::Indian, "Butter Chicken", "Creamy tomato gravy, tender chicken", 220, "images/butter-chicken.jpg"),
    (2, Category::Indian, "Paneer Tikka", "Grilled marinated paneer, smoky spices", 180, "images/paneer-tikka.jpg"),
    (3, Category::Indian, "Dal Makhani", "Slow-cooked black lentils, buttered", 150, "images/dal-makhani.jpg"),
    (4, Category::Chinese, "Schezwan Noodles", "Spicy noodles with veggies", 160, "images/schezwan-noodles.jpg"),
    (5, Category::Chinese, "Veg Manchurian", "Crispy veg balls in tangy sauce", 170, "images/veg-manchurian.jpg"),
    (6, Category::Chinese, "Honey Chilli Potato", "Sweet & spicy wok-fried potato", 140, "images/honey-chilli-potato.jpg"),
    (7, Category::Desserts, "Gulab Jamun", "Classic syrupy Indian sweet", 80, "images/gulab-jamun.jpg"),
    (8, Category::Desserts, "Rasmalai", "Soft cheese discs in sweet milk", 90, "images/rasmalai.jpg"),
    (9, Category::Desserts, "Chocolate Brownie", "Warm fudge brownie with ice cream", 120, "images/chocolate-brownie.jpg"),
    (10, Category::Beverages, "Masala Chai", "Traditional spiced tea", 40, "images/masala-chai.jpg"),
    (11, Category::Beverages, "Mango Lassi", "Creamy mango yogurt drink", 75, "images/mango-lassi.jpg"),
    (12, Category::Beverages, "Cold Coffee", "Iced coffee with milk & ice cream", 85, "images/cold-coffee.jpg"),
];

/// (id, title, price, image)
const SPECIALS: &[(&str, &str, Price, &str)] = &[
    ("s1", "MOM'S Special Thali", 299, "images/special-thali.jpg"),
    ("s2", "Dragon's Stir-Fry (Veg)", 219, "images/dragons-stirfry.jpg"),
    ("s3", "Homemade Rasmalai (Chef)", 99, "images/rasmalai-chef.jpg"),
];

/// Menu + specials
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
    specials: Vec<SpecialItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>, specials: Vec<SpecialItem>) -> Self {
        Self { items, specials }
    }

    /// The restaurant's fixed menu
    pub fn builtin() -> Self {
        let items = MENU
            .iter()
            .map(|&(id, category, name, description, price, image)| MenuItem {
                id,
                category,
                name: name.to_string(),
                description: description.to_string(),
                price,
                image: image.to_string(),
            })
            .collect();
        let specials = SPECIALS
            .iter()
            .map(|&(id, title, price, image)| SpecialItem {
                id: id.to_string(),
                title: title.to_string(),
                price,
                image: image.to_string(),
            })
            .collect();
        Self { items, specials }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn specials(&self) -> &[SpecialItem] {
        &self.specials
    }

    /// Items matching the filter, in catalog order
    pub fn filter(&self, filter: CategoryFilter) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| filter.matches(item.category))
    }

    pub fn item(&self, id: i64) -> AppResult<&MenuItem> {
        self.items.iter().find(|item| item.id == id).ok_or_else(|| {
            AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {id} not found"))
                .with_detail("id", id)
        })
    }

    pub fn special(&self, id: &str) -> AppResult<&SpecialItem> {
        self.specials.iter().find(|s| s.id == id).ok_or_else(|| {
            AppError::with_message(ErrorCode::SpecialNotFound, format!("Special {id} not found"))
                .with_detail("id", id)
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.items().len(), 12);
        assert_eq!(catalog.specials().len(), 3);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let catalog = Catalog::builtin();
        let all = CategoryFilter::All;
        assert_eq!(catalog.filter(all).count(), catalog.items().len());
    }

    #[test]
    fn test_filter_by_category_only_matches() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            let filter = CategoryFilter::Only(category);
            let items: Vec<_> = catalog.filter(filter).collect();
            assert_eq!(items.len(), 3);
            assert!(items.iter().all(|i| i.category == category));
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.item(1).unwrap().price, 220);
        assert_eq!(catalog.special("s2").unwrap().title, "Dragon's Stir-Fry (Veg)");

        assert_eq!(catalog.item(99).unwrap_err().code, ErrorCode::MenuItemNotFound);
        assert_eq!(catalog.special("s9").unwrap_err().code, ErrorCode::SpecialNotFound);
    }
}
