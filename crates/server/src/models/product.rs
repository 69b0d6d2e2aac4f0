//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cakery_core::ProductId;

/// A catalog product.
///
/// Timestamps are owned by the service layer: `created_at` is set once at
/// creation, `updated_at` is reset on every mutation, so `updated_at` never
/// precedes `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier; `None` until the first save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub stock_quantity: i32,
    /// Customer ratings, in arrival order.
    #[serde(default)]
    pub ratings: Vec<Rating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A customer rating, owned by its parent product.
///
/// Ratings are append-only: never edited or removed individually, and no
/// aggregate score is maintained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Client-supplied product fields, shared by create and update requests.
///
/// An update replaces every one of these fields on the stored product,
/// whether or not the caller meant to change them. Callers must resend the
/// full record or lose data; see [`crate::services::products`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub stock_quantity: i32,
}
