//! Clothing item model, write payload, and list projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Sizes handed out by the seeder.
pub const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClothingItem {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub brand: String,
    pub color: String,
    pub size: String,
    pub material: String,
    pub price: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /Clothing` and `PUT /Clothing/{id}`.
///
/// Missing or null fields deserialize to empty strings so they are reported
/// by validation rather than rejected by the decoder. Numbers and booleans
/// are kept as their text form, so `"price": 39` stores `"39"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ClothingItemInput {
    #[serde(default, deserialize_with = "text_or_scalar")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "text_or_scalar")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub kind: String,
    #[serde(default, deserialize_with = "text_or_scalar")]
    #[validate(length(min = 1, message = "Brand is required"))]
    pub brand: String,
    #[serde(default, deserialize_with = "text_or_scalar")]
    #[validate(length(min = 1, message = "Color is required"))]
    pub color: String,
    #[serde(default, deserialize_with = "text_or_scalar")]
    #[validate(length(min = 1, message = "Size is required"))]
    pub size: String,
    #[serde(default, deserialize_with = "text_or_scalar")]
    #[validate(length(min = 1, message = "Material is required"))]
    pub material: String,
    #[serde(default, deserialize_with = "text_or_scalar")]
    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,
    #[serde(default, deserialize_with = "text_or_scalar")]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn text_or_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
    })
}

/// Summary DTO for collection views.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClothingItemSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub brand: String,
}
