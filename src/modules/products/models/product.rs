// Product DTOs exchanged with the products API.
//
// Products are materialized per response and never cached. `taxes` is a
// derived attribute: it never appears on the wire from the server and is only
// filled in by the tax-aware listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, read-only on the client
    #[serde(deserialize_with = "string_or_number")]
    id: String,

    pub title: String,

    pub price: f64,

    pub description: String,

    pub images: Vec<String>,

    pub category: Category,

    #[serde(
        rename = "creationAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Derived tax amount (price × 0.19, never negative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxes: Option<f64>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        images: Vec<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: description.into(),
            images,
            category,
            creation_at: None,
            updated_at: None,
            taxes: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Category the product belongs to
///
/// Only the commonly used keys are typed. Anything else the server sends is
/// kept in `extra` so the object survives a decode/encode cycle intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Body of `POST /api/v1/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub category_id: String,
}

/// Body of `PUT /api/v1/products/{id}`
///
/// Partial update: only the fields that are set get serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

/// Product identifiers arrive as strings or as numbers depending on the backend
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
