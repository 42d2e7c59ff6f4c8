//! Products API client library
//!
//! Async client for the `/api/v1/products` REST resource: listing (plain and
//! tax-aware), single reads, creation, partial updates and deletion.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::products;
pub use modules::taxes;
pub use modules::transport;

pub use crate::core::{AppError, Result};
pub use products::{Category, CreateProductPayload, Product, ProductClient, UpdateProductPayload};
