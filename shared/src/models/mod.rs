//! Data models
//!
//! API view types and request payloads, shared between the catalog server
//! and its clients. Storage rows live in `catalog-server::db::models`.

pub mod comment;
pub mod image;
pub mod product;
pub mod similar;

// Re-exports
pub use comment::*;
pub use image::*;
pub use product::*;
pub use similar::*;
