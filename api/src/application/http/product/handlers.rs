pub mod get_product;
