//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use crate::db::repository::CatalogError;

// ── Text length limits ──────────────────────────────────────────────

/// Person names on comments
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Comment bodies
pub const MAX_COMMENT_BODY_LEN: usize = 2000;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        tracing::warn!(field, "Validation failed: empty");
        return Err(CatalogError::invalid(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        tracing::warn!(field, len, max_len, "Validation failed: too long");
        return Err(CatalogError::invalid(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Minimal shape check: `local@domain`, both sides non-empty
pub fn validate_email(value: &str) -> Result<(), CatalogError> {
    match value.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => {
            tracing::warn!("Validation failed: malformed email");
            Err(CatalogError::invalid("email is not a valid address"))
        }
    }
}
