//! Product Model

use serde::{Deserialize, Serialize};

use super::{Comment, Image, ImageCreate};
use crate::types::{FieldPatch, PriceInput};

/// Product view returned by the API
///
/// `comments` and `images` are omitted when empty, `thumbnail` when the
/// product has no images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Image>,
}

/// Create product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<PriceInput>,
    pub images: Option<Vec<ImageCreate>>,
}

/// Partial product update
///
/// Only keys present in the body are written; an explicit `null` clears
/// the column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "FieldPatch::is_missing")]
    pub title: FieldPatch<String>,
    #[serde(default, skip_serializing_if = "FieldPatch::is_missing")]
    pub description: FieldPatch<String>,
    #[serde(default, skip_serializing_if = "FieldPatch::is_missing")]
    pub price: FieldPatch<PriceInput>,
}

/// Normalized search filter
///
/// `None` fields contribute no predicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_from: Option<f64>,
    pub price_to: Option<f64>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price_from.is_none()
            && self.price_to.is_none()
    }
}

/// Result of a product creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreated {
    pub product_id: String,
    pub message: String,
}

/// Thumbnail swap payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailUpdate {
    pub new_thumbnail_id: String,
}

/// Plain `{ message }` body returned by mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
