//! 服务层 - 目录核心服务
//!
//! - [`CatalogService`] - 商品、图片、评论与相似商品

pub mod catalog;

pub use catalog::{CatalogError, CatalogService};
