//! Product Image Model

use serde::{Deserialize, Serialize};

/// Image attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub product_id: String,
    pub url: String,
    pub main: bool,
}

/// Image entry of a create / add-images payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCreate {
    pub url: String,
    #[serde(default)]
    pub main: bool,
}

/// Attach images to an existing product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddImagesPayload {
    pub product_id: String,
    #[serde(default)]
    pub images: Vec<ImageCreate>,
}
