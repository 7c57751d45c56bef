//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`QueryBuilder`](query_builder::QueryBuilder) - 动态 WHERE 子句
//! - 日志、输入校验

pub mod error;
pub mod logger;
pub mod query_builder;
pub mod result;
pub mod validation;

// Re-export error types from the error module (which re-exports from shared)
pub use error::{ApiResponse, AppError, ErrorCategory, ErrorCode};
pub use result::AppResult;
