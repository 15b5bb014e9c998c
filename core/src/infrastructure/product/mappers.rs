use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::entities::{ProductCatalog, ProductRecord},
};

#[derive(Debug, Deserialize)]
pub struct ProductModel {
    pub product_name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

impl TryFrom<(usize, ProductModel)> for ProductRecord {
    type Error = CoreError;

    fn try_from((position, model): (usize, ProductModel)) -> Result<Self, Self::Error> {
        let name = model.product_name.ok_or_else(|| {
            CoreError::Configuration(format!(
                "product at position {position} is missing required field 'product_name'"
            ))
        })?;

        let ingredients = model.ingredients.ok_or_else(|| {
            CoreError::Configuration(format!(
                "product '{name}' is missing required field 'ingredients'"
            ))
        })?;

        ProductRecord::new(name, ingredients).map_err(|e| {
            CoreError::Configuration(format!("product at position {position}: {e}"))
        })
    }
}

/// Parses a catalog document: a JSON array of products, kept in file order.
pub fn parse_catalog(source: &str) -> Result<ProductCatalog, CoreError> {
    let document: serde_json::Value = serde_json::from_str(source)
        .map_err(|e| CoreError::Configuration(format!("product catalog is not valid JSON: {e}")))?;

    let entries = document.as_array().ok_or_else(|| {
        CoreError::Configuration("product catalog must be an array of products".to_string())
    })?;

    let products = entries
        .iter()
        .enumerate()
        .map(|(position, value)| {
            let model = ProductModel::deserialize(value).map_err(|e| {
                CoreError::Configuration(format!(
                    "product at position {position} is malformed: {e}"
                ))
            })?;
            ProductRecord::try_from((position, model))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProductCatalog::new(products))
}
