use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::asset::UploadedAsset;

/// Domain representation of a persisted product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name_product: String,
    /// Longer description shown to users.
    pub description: String,
    /// Unit price, strictly positive.
    pub price: f64,
    /// URL of the product image on the asset host.
    pub file_url: String,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new product.
///
/// Only constructible from an [`UploadedAsset`], so the stored URL is always
/// the one returned by the asset host.
#[derive(Debug, Clone)]
pub struct NewProductRecord {
    name_product: String,
    description: String,
    price: f64,
    file_url: String,
    created_at: NaiveDateTime,
}

impl NewProductRecord {
    /// Build a new product payload with the current timestamp.
    pub fn new(
        name_product: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        asset: &UploadedAsset,
    ) -> Self {
        Self {
            name_product: name_product.into(),
            description: description.into(),
            price,
            file_url: asset.secure_url.clone(),
            created_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn name_product(&self) -> &str {
        &self.name_product
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn file_url(&self) -> &str {
        &self.file_url
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
