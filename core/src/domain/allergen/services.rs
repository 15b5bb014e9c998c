use crate::domain::{
    allergen::{
        entities::AllergyDefinition,
        ports::{AllergenRepository, AllergenService},
    },
    common::services::Service,
    detection::ports::TextExtractor,
    product::ports::ProductRepository,
};

impl<A, P, T> AllergenService for Service<A, P, T>
where
    A: AllergenRepository,
    P: ProductRepository,
    T: TextExtractor,
{
    fn list_allergies(&self) -> Vec<AllergyDefinition> {
        self.allergen_repository.list_allergies()
    }

    fn list_selectable_allergies(&self) -> Vec<String> {
        self.allergen_repository.list_selectable_ids()
    }
}
