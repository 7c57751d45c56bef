//! Product row

use std::collections::HashMap;

use shared::models::{Comment, Image, Product};
use shared::util::parse_price;

/// Row of the `products` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductEntity {
    pub product_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<i64>,
}

impl From<ProductEntity> for Product {
    fn from(row: ProductEntity) -> Self {
        Product {
            id: row.product_id,
            title: row.title.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            price: parse_price(row.price.as_deref()),
            category: row.category.unwrap_or(0),
            comments: Vec::new(),
            images: Vec::new(),
            thumbnail: None,
        }
    }
}

/// Display thumbnail: the `main` image, else the first one
pub fn select_thumbnail(images: &[Image]) -> Option<Image> {
    images
        .iter()
        .find(|img| img.main)
        .or_else(|| images.first())
        .cloned()
}

/// Attach each product's comments and images, preserving their order
pub fn assemble_products(
    rows: Vec<ProductEntity>,
    comments: Vec<Comment>,
    images: Vec<Image>,
) -> Vec<Product> {
    let mut comments_by_product: HashMap<String, Vec<Comment>> = HashMap::new();
    for comment in comments {
        comments_by_product
            .entry(comment.product_id.clone())
            .or_default()
            .push(comment);
    }
    let mut images_by_product: HashMap<String, Vec<Image>> = HashMap::new();
    for image in images {
        images_by_product
            .entry(image.product_id.clone())
            .or_default()
            .push(image);
    }

    rows.into_iter()
        .map(|row| {
            let mut product = Product::from(row);
            product.comments = comments_by_product.remove(&product.id).unwrap_or_default();
            product.images = images_by_product.remove(&product.id).unwrap_or_default();
            product.thumbnail = select_thumbnail(&product.images);
            product
        })
        .collect()
}
