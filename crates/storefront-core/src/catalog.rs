//! Menu Catalog
//!
//! Ordered categories and their items. Built once per session and never
//! mutated afterwards; the filter engine only reads it.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Category identifier as used by the filter buttons (e.g. "mains")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single dish on the menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    name: String,
    description: String,
    price: Option<String>,
    category: CategoryId,
    /// Lowercased name, precomputed for search
    name_key: String,
    /// Lowercased name + description + price, precomputed for search
    text_key: String,
}

impl MenuItem {
    pub fn new(category: CategoryId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::build(category, name.into(), description.into(), None)
    }

    pub fn with_price(
        category: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self::build(category, name.into(), description.into(), Some(price.into()))
    }

    fn build(category: CategoryId, name: String, description: String, price: Option<String>) -> Self {
        let mut text = format!("{} {}", name, description);
        if let Some(price) = &price {
            text.push(' ');
            text.push_str(price);
        }
        Self {
            name_key: name.to_lowercase(),
            text_key: text.to_lowercase(),
            name,
            description,
            price,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    /// Full searchable text (name, description and price)
    pub fn searchable_text(&self) -> String {
        match &self.price {
            Some(price) => format!("{} {} {}", self.name, self.description, price),
            None => format!("{} {}", self.name, self.description),
        }
    }

    /// Whether this item matches an already normalized (trimmed, lowercased) term
    pub(crate) fn matches_normalized(&self, term: &str) -> bool {
        term.is_empty() || self.name_key.contains(term) || self.text_key.contains(term)
    }
}

/// A menu section holding an ordered list of items
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    id: CategoryId,
    title: String,
    items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(id: CategoryId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append an item described by name/description; its category is this one
    pub fn with_item(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.items.push(MenuItem::new(self.id.clone(), name, description));
        self
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

/// The full menu for a filtering session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate category ids.
    ///
    /// Ids are stored trimmed, on the category and on each of its items.
    pub fn new(categories: Vec<MenuCategory>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut trimmed = Vec::with_capacity(categories.len());
        for (index, mut category) in categories.into_iter().enumerate() {
            let id = category.id.as_str().trim();
            if id.is_empty() {
                return Err(CatalogError::BlankCategoryId(index));
            }
            if !seen.insert(id.to_string()) {
                return Err(CatalogError::DuplicateCategory(id.to_string()));
            }
            if id.len() != category.id.as_str().len() {
                let id = CategoryId::new(id);
                for item in &mut category.items {
                    item.category = id.clone();
                }
                category.id = id;
            }
            trimmed.push(category);
        }
        Ok(Self { categories: trimmed })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a menu document (see `MenuDocument`) and validate it
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: MenuDocument = serde_json::from_str(json)?;
        let categories = document
            .categories
            .into_iter()
            .map(|raw| {
                let id = CategoryId::new(raw.id.trim());
                let mut category = MenuCategory::new(id.clone(), raw.title);
                for item in raw.items {
                    category.push(MenuItem::build(id.clone(), item.name, item.description, item.price));
                }
                category
            })
            .collect();
        let catalog = Self::new(categories)?;
        tracing::debug!(
            categories = catalog.categories.len(),
            items = catalog.item_count(),
            "menu catalog parsed"
        );
        Ok(catalog)
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// ========================
// Wire format
// ========================

#[derive(Deserialize)]
struct MenuDocument {
    #[serde(default)]
    categories: Vec<RawCategory>,
}

#[derive(Deserialize)]
struct RawCategory {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Deserialize)]
struct RawItem {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_ids_stored_trimmed() {
        let catalog = Catalog::new(vec![
            MenuCategory::new(" mains ".into(), "Mains").with_item("Steak", "Grilled"),
        ])
        .unwrap();
        let mains = CategoryId::from("mains");

        let category = catalog.category(&mains).expect("trimmed id should be found");
        assert_eq!(category.id().as_str(), "mains");
        assert_eq!(category.items()[0].category(), &mains);
        assert!(crate::CategorySelector::from_token("mains").matches(category.id()));
    }

    #[test]
    fn test_padded_duplicate_rejected() {
        let categories = vec![
            MenuCategory::new("mains".into(), "Mains"),
            MenuCategory::new("mains ".into(), "Also Mains"),
        ];
        assert_eq!(
            Catalog::new(categories),
            Err(CatalogError::DuplicateCategory("mains".to_string()))
        );
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let categories = vec![
            MenuCategory::new("mains".into(), "Mains"),
            MenuCategory::new("mains".into(), "More Mains"),
        ];
        assert_eq!(
            Catalog::new(categories),
            Err(CatalogError::DuplicateCategory("mains".to_string()))
        );
    }

    #[test]
    fn test_blank_category_rejected() {
        let categories = vec![
            MenuCategory::new("drinks".into(), "Drinks"),
            MenuCategory::new("  ".into(), "Nameless"),
        ];
        assert_eq!(Catalog::new(categories), Err(CatalogError::BlankCategoryId(1)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "categories": [
                {"id": " starters ", "title": "Starters", "items": [
                    {"name": "Soup", "description": "chicken soup", "price": "$6"},
                    {"name": "Salad", "description": "greek salad"}
                ]},
                {"id": "mains", "title": "Mains", "items": []}
            ]
        }"#;

        let catalog = Catalog::from_json(json).expect("valid menu");
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.item_count(), 2);

        let starters = catalog.category(&"starters".into()).expect("trimmed id");
        assert_eq!(starters.title(), "Starters");
        assert_eq!(starters.items()[0].price(), Some("$6"));
        assert_eq!(starters.items()[0].category().as_str(), "starters");
        assert_eq!(starters.items()[1].searchable_text(), "Salad greek salad");
    }

    #[test]
    fn test_from_json_rejects_duplicates_after_trim() {
        let json = r#"{"categories": [{"id": "mains"}, {"id": "mains "}]}"#;
        assert_eq!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateCategory("mains".to_string()))
        );
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(Catalog::from_json("{not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_search_keys_are_lowercased() {
        let item = MenuItem::with_price("mains".into(), "Tomato Pasta", "Fresh BASIL", "$12");
        assert!(item.matches_normalized("basil"));
        assert!(item.matches_normalized("$12"));
        assert!(item.matches_normalized(""));
        assert!(!item.matches_normalized("Basil"));
    }
}
