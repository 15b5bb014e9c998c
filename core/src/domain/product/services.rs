use tracing::debug;

use crate::domain::{
    allergen::ports::AllergenRepository,
    common::services::Service,
    detection::ports::TextExtractor,
    product::{
        entities::ProductRecord,
        ports::{ProductRepository, ProductService},
    },
};

impl<A, P, T> ProductService for Service<A, P, T>
where
    A: AllergenRepository,
    P: ProductRepository,
    T: TextExtractor,
{
    fn find_product(&self, query: &str) -> Option<ProductRecord> {
        let product = self.product_repository.find_first_by_name(query);

        match &product {
            Some(product) => debug!(query, product = %product.name, "product found"),
            None => debug!(query, "product not found"),
        }

        product
    }

    fn count_products(&self) -> usize {
        self.product_repository.count()
    }
}
