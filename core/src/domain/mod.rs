pub mod allergen;
pub mod common;
pub mod detection;
pub mod product;
