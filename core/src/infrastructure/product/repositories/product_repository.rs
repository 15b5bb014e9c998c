use std::{fs, path::Path, sync::Arc};

use tracing::{error, info};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product::{
            entities::{ProductCatalog, ProductRecord},
            ports::ProductRepository,
        },
    },
    infrastructure::product::mappers::parse_catalog,
};

#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    catalog: Arc<ProductCatalog>,
}

impl InMemoryProductRepository {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read product catalog {}: {}", path.display(), e);
            CoreError::Configuration(format!(
                "failed to read product catalog {}: {e}",
                path.display()
            ))
        })?;

        let catalog = parse_catalog(&source)?;
        info!(
            products = catalog.len(),
            "loaded product catalog from {}",
            path.display()
        );

        Ok(Self::new(catalog))
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_first_by_name(&self, query: &str) -> Option<ProductRecord> {
        self.catalog.find_first(query).cloned()
    }

    fn count(&self) -> usize {
        self.catalog.len()
    }
}
