//! Comment API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Comment, CommentCreate, MessageResponse};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /comments
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Comment>>> {
    let comments = state.catalog.list_comments().await?;
    Ok(Json(comments))
}

/// GET /comments/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Comment>> {
    let comment = state.catalog.get_comment(&id).await?;
    Ok(Json(comment))
}

/// POST /comments - 商品必须存在
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CommentCreate>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let comment = state.catalog.create_comment(payload).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// DELETE /comments/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.catalog.delete_comment(&id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Comment with id:{id} has been removed!"
    ))))
}
