//! Similarity edge row

use shared::models::SimilarProduct;
use shared::util::parse_price;

/// Row of the `similars` table
///
/// `title`, `description` and `price` are a snapshot of the product
/// referenced by `similar_id`, taken when the edge was created.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SimilarEntity {
    pub row_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub product_id: String,
    pub similar_id: String,
}

impl From<SimilarEntity> for SimilarProduct {
    fn from(row: SimilarEntity) -> Self {
        SimilarProduct {
            id: row.similar_id,
            title: row.title.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            price: parse_price(row.price.as_deref()),
            product_id: row.product_id,
        }
    }
}
