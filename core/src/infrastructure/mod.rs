pub mod allergen;
pub mod ocr;
pub mod product;
