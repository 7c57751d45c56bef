//! Comment Model

use serde::{Deserialize, Serialize};

/// Customer comment on a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Create comment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreate {
    pub product_id: String,
    pub name: String,
    pub email: String,
    pub body: String,
}
