//! Menu Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};
use crate::types::Price;

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Indian,
    Chinese,
    Desserts,
    Beverages,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Indian,
        Category::Chinese,
        Category::Desserts,
        Category::Beverages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Indian => "indian",
            Category::Chinese => "chinese",
            Category::Desserts => "desserts",
            Category::Beverages => "beverages",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Indian => "Indian",
            Category::Chinese => "Chinese",
            Category::Desserts => "Desserts",
            Category::Beverages => "Beverages",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indian" => Ok(Category::Indian),
            "chinese" => Ok(Category::Chinese),
            "desserts" => Ok(Category::Desserts),
            "beverages" => Ok(Category::Beverages),
            other => Err(AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Unknown category: {other}"),
            )
            .with_detail("category", other)),
        }
    }
}

/// Category filter driven by the `data-cat` attribute of the category buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No filter
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Menu item entity (read-only catalog data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub category: Category,
    pub name: String,
    pub description: String,
    /// Price in whole rupees
    pub price: Price,
    /// Relative image path, empty when the item has no picture
    pub image: String,
}

/// Chef's special (read-only catalog data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialItem {
    pub id: String,
    pub title: String,
    pub price: Price,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("indian".parse::<Category>().unwrap(), Category::Indian);
        assert_eq!(" Desserts ".parse::<Category>().unwrap(), Category::Desserts);

        let err = "pizza".parse::<Category>().unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[test]
    fn test_filter_parse_and_match() {
        let all: CategoryFilter = "all".parse().unwrap();
        assert_eq!(all, CategoryFilter::All);
        assert!(Category::ALL.iter().all(|c| all.matches(*c)));

        let chinese: CategoryFilter = "chinese".parse().unwrap();
        assert!(chinese.matches(Category::Chinese));
        assert!(!chinese.matches(Category::Indian));
        assert_eq!(chinese.to_string(), "chinese");
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&Category::Beverages).unwrap();
        assert_eq!(json, "\"beverages\"");
    }
}
