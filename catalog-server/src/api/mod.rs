//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 商品、图片、缩略图与相似商品接口
//! - [`comments`] - 评论接口

pub mod comments;
pub mod health;
pub mod products;

use axum::Router;
use http::{Method, Uri};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(products::router())
        .merge(comments::router())
        .fallback(route_not_found)
}

/// Unknown paths answer with the error envelope instead of an empty 404
async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Router bound to `state` with CORS and request tracing
pub fn build_app(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    build_router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
