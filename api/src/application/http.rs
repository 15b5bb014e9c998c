pub mod allergy;
pub mod detection;
pub mod health;
pub mod product;
pub mod server;
