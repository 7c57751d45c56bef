//! Similar Product Model

use serde::{Deserialize, Serialize};

/// Snapshot of a product linked as similar to `product_id`
///
/// `id` is the similar product's id. Title, description and price are
/// copied at link time and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarProduct {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub product_id: String,
}

/// One `productId -> similarId` link request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarPair {
    pub product_id: String,
    pub similar_id: String,
}
