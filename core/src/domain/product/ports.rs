use crate::domain::product::entities::ProductRecord;

/// Read-only access to the product catalog loaded at startup.
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    fn find_first_by_name(&self, query: &str) -> Option<ProductRecord>;

    fn count(&self) -> usize;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductService: Send + Sync {
    /// `None` is the ordinary "product not found" outcome.
    fn find_product(&self, query: &str) -> Option<ProductRecord>;

    fn count_products(&self) -> usize;
}
