//! Shared types for the product catalog
//!
//! API view models, request payloads, the unified error system and small
//! utilities used by the server and its clients.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use types::{FieldPatch, PriceInput};
