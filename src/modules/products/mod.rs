// Products module

pub mod models;
pub mod services;

pub use models::{Category, CreateProductPayload, Product, UpdateProductPayload};
pub use services::ProductClient;
