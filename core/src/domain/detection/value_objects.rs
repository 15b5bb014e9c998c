use std::collections::BTreeSet;

/// The caller's chosen allergy identifiers for a single request.
pub type SelectedAllergies = BTreeSet<String>;

#[derive(Debug, Clone)]
pub struct DetectAllergensInput {
    pub ingredient_texts: Vec<String>,
    pub selected_allergies: SelectedAllergies,
}

#[derive(Debug, Clone)]
pub struct CheckTextInput {
    pub text: String,
    pub selected_allergies: SelectedAllergies,
}

#[derive(Debug, Clone)]
pub struct CheckProductInput {
    pub query: String,
    pub selected_allergies: SelectedAllergies,
}

#[derive(Debug, Clone)]
pub struct ScanLabelInput {
    pub image_data: Vec<u8>,
    pub selected_allergies: SelectedAllergies,
}
