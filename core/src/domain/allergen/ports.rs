use crate::domain::allergen::entities::AllergyDefinition;

/// Read-only access to the allergen taxonomy loaded at startup.
#[cfg_attr(test, mockall::automock)]
pub trait AllergenRepository: Send + Sync {
    fn list_allergies(&self) -> Vec<AllergyDefinition>;

    fn get_allergy(&self, allergy_id: &str) -> Option<AllergyDefinition>;

    fn list_selectable_ids(&self) -> Vec<String>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AllergenService: Send + Sync {
    fn list_allergies(&self) -> Vec<AllergyDefinition>;

    /// Identifiers classified as direct allergens, in taxonomy order.
    fn list_selectable_allergies(&self) -> Vec<String>;
}
