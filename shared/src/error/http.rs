//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound
            | Self::ProductNotFound
            | Self::OthersNotFound
            | Self::CommentNotFound
            | Self::SimilarNotFound => StatusCode::NOT_FOUND,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::ProductInvalidPrice
            | Self::ImagesEmpty
            | Self::ThumbnailInvalid
            | Self::SimilarsEmpty => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
