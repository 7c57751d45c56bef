//! Unified error system for the catalog service
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by range
//! - [`AppError`]: Error type with code, message and optional details
//! - [`ApiResponse`]: Error envelope returned to clients
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::ImagesEmpty, "Images array is empty");
//! assert_eq!(ApiResponse::error(&err).code, 6101);
//!
//! let err = AppError::validation("Incorrect new thumbnail id")
//!     .with_detail("field", "newThumbnailId");
//! assert_eq!(ApiResponse::error(&err).code, 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
