mod product;

pub use product::{Category, CreateProductPayload, Product, UpdateProductPayload};
