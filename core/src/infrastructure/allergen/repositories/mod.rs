pub mod allergen_repository;

pub use allergen_repository::InMemoryAllergenRepository;
