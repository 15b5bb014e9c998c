use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecord {
    #[serde(rename = "product_name")]
    pub name: String,
    pub ingredients: Vec<String>,
}

impl ProductRecord {
    pub fn new(name: String, ingredients: Vec<String>) -> Result<Self, CoreError> {
        if name.is_empty() {
            return Err(CoreError::Configuration(
                "product_name must not be empty".to_string(),
            ));
        }

        Ok(Self { name, ingredients })
    }
}

/// Products in load order. Duplicate names are kept.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<ProductRecord>,
}

impl ProductCatalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// First product, in load order, whose name contains `query`
    /// case-insensitively.
    ///
    /// `query` is not trimmed: callers that want whitespace-insensitive
    /// lookups must trim it themselves. An empty query matches the first
    /// product.
    pub fn find_first(&self, query: &str) -> Option<&ProductRecord> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .find(|product| product.name.to_lowercase().contains(&query))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, ingredients: &[&str]) -> ProductRecord {
        ProductRecord::new(
            name.to_string(),
            ingredients.iter().map(|i| i.to_string()).collect(),
        )
        .unwrap()
    }

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            product("Trail Mix", &["oats", "peanut butter", "raisins"]),
            product("Milk Chocolate Bar", &["sugar", "cocoa butter", "milk powder"]),
            product("Dark Chocolate Bar", &["cocoa mass", "sugar"]),
            product("Milk Chocolate Bar", &["sugar", "whole milk"]),
        ])
    }

    #[test]
    fn test_find_first_is_case_insensitive() {
        let catalog = catalog();

        let upper = catalog.find_first("MILK").unwrap();
        let lower = catalog.find_first("milk").unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.name, "Milk Chocolate Bar");
    }

    #[test]
    fn test_find_first_returns_first_duplicate_in_load_order() {
        let catalog = catalog();

        let found = catalog.find_first("milk chocolate").unwrap();

        assert_eq!(found.ingredients, vec!["sugar", "cocoa butter", "milk powder"]);
    }

    #[test]
    fn test_empty_query_matches_first_record() {
        let catalog = catalog();

        assert_eq!(catalog.find_first("").unwrap().name, "Trail Mix");
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let catalog = catalog();

        assert!(catalog.find_first(" trail").is_none());
        assert_eq!(catalog.find_first("trail").unwrap().name, "Trail Mix");
    }

    #[test]
    fn test_no_match_yields_none() {
        assert!(catalog().find_first("granola").is_none());
        assert!(ProductCatalog::default().find_first("").is_none());
    }

    #[test]
    fn test_product_requires_name() {
        let result = ProductRecord::new(String::new(), vec![]);

        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }
}
