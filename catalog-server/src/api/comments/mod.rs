//! Comment API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /comments | GET, POST | 列表 / 创建 |
//! | /comments/{id} | GET, DELETE | 单条评论 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/comments", comment_routes())
}

fn comment_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
