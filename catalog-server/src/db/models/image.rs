//! Image row

use shared::models::Image;

/// Row of the `images` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ImageEntity {
    pub image_id: String,
    pub url: String,
    pub product_id: String,
    /// 0/1 flag
    pub main: i64,
}

impl From<ImageEntity> for Image {
    fn from(row: ImageEntity) -> Self {
        Image {
            id: row.image_id,
            product_id: row.product_id,
            url: row.url,
            main: row.main != 0,
        }
    }
}
