pub mod get_allergies;
pub mod get_taxonomy;
