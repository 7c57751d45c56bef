//! 统一错误处理
//!
//! Re-exports the shared error system and bridges [`CatalogError`] into
//! [`AppError`]. Storage failures are logged here with their detail and
//! leave the boundary as a generic 500.

use crate::db::repository::CatalogError;

pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { code, message } => AppError::with_message(code, message),
            CatalogError::InvalidInput { code, message } => {
                AppError::with_message(code, message)
            }
            CatalogError::Storage(e) => {
                tracing::error!(target: "database", error = %e, "Storage failure");
                AppError::with_message(ErrorCode::DatabaseError, "Internal server error")
            }
        }
    }
}
