//! Repository Module
//!
//! SQL access for the catalog tables. Every function takes any SQLite
//! executor (or, for batched statements, anything that can hand out a
//! connection), so the same call works on the pool or inside a transaction.

pub mod comment;
pub mod image;
pub mod product;
pub mod similar;

use shared::error::ErrorCode;
use thiserror::Error;

/// Catalog error taxonomy
///
/// `NotFound` and `InvalidInput` carry the client-facing message and the
/// error code reported in the response envelope. `Storage` is never shown
/// to clients.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{message}")]
    NotFound { code: ErrorCode, message: String },

    #[error("{message}")]
    InvalidInput { code: ErrorCode, message: String },

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl CatalogError {
    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn product_not_found(id: &str) -> Self {
        Self::not_found(
            ErrorCode::ProductNotFound,
            format!("Product with id {id} is not found"),
        )
    }

    /// Validation failure with the generic code
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::invalid_with(ErrorCode::ValidationFailed, message)
    }

    pub fn invalid_with(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            code,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Result type for repository and catalog operations
pub type RepoResult<T> = Result<T, CatalogError>;
