//! Chef's specials grid

use shared::models::SpecialItem;
use shared::util::format_price;

use crate::catalog::Catalog;
use crate::command::UiCommand;
use crate::placeholder::{ImageSource, SPECIAL_HEIGHT, SPECIAL_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCardView {
    pub id: String,
    pub title: String,
    pub price_label: String,
    pub image: ImageSource,
    pub order: UiCommand,
}

pub fn project_special_card(special: &SpecialItem, currency: &str) -> SpecialCardView {
    SpecialCardView {
        id: special.id.clone(),
        title: special.title.clone(),
        price_label: format_price(currency, special.price),
        image: ImageSource::new(&special.title, &special.image, SPECIAL_WIDTH, SPECIAL_HEIGHT),
        order: UiCommand::OrderSpecial(special.id.clone()),
    }
}

pub fn project_specials(catalog: &Catalog, currency: &str) -> Vec<SpecialCardView> {
    catalog
        .specials()
        .iter()
        .map(|s| project_special_card(s, currency))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_specials() {
        let cards = project_specials(&Catalog::builtin(), "₹");
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].id, "s1");
        assert_eq!(cards[0].price_label, "₹299");
        assert_eq!(cards[0].order, UiCommand::OrderSpecial("s1".to_string()));

        let svg = urlencoding::decode(
            cards[1]
                .image
                .fallback
                .trim_start_matches("data:image/svg+xml;utf8,"),
        )
        .unwrap()
        .into_owned();
        assert!(svg.contains("width='800' height='600'"));
    }
}
