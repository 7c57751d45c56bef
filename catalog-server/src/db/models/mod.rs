//! Database Models
//!
//! Storage rows (`*Entity`) and their conversion into the API views in
//! `shared::models`. Conversions are pure and never fail.

pub mod comment;
pub mod image;
pub mod product;
pub mod similar;

// Re-exports
pub use comment::CommentEntity;
pub use image::ImageEntity;
pub use product::{ProductEntity, assemble_products, select_thumbnail};
pub use similar::SimilarEntity;
