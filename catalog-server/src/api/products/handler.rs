//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::models::{
    AddImagesPayload, MessageResponse, Product, ProductCreate, ProductCreated, ProductFilter,
    ProductPatch, SimilarPair, SimilarProduct, ThumbnailUpdate,
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Raw search query string; blank values are treated as absent
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchQuery {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_from: Option<String>,
    pub price_to: Option<String>,
}

impl ProductSearchQuery {
    /// Normalize into a [`ProductFilter`], rejecting non-numeric price bounds
    pub fn into_filter(self) -> AppResult<ProductFilter> {
        Ok(ProductFilter {
            title: non_blank(self.title),
            description: non_blank(self.description),
            price_from: parse_bound("priceFrom", self.price_from)?,
            price_to: parse_bound("priceTo", self.price_to)?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bound(field: &str, value: Option<String>) -> AppResult<Option<f64>> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => {
            tracing::warn!(field, value = %raw, "Rejected search bound");
            Err(AppError::validation(format!("{field} must be a number")).with_detail("field", field))
        }
    }
}

// =============================================================================
// Product Handlers
// =============================================================================

/// GET /products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.catalog.list_all().await?;
    Ok(Json(products))
}

/// GET /products/search - 按条件过滤商品
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<ProductSearchQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = query.into_filter()?;
    let products = state.catalog.search(&filter).await?;
    Ok(Json(products))
}

/// GET /products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.catalog.get_by_id(&id).await?;
    Ok(Json(product))
}

/// POST /products - 创建商品 (可附带图片)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<ProductCreated>)> {
    let created = state.catalog.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /products/{id} - 部分更新
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> AppResult<Json<MessageResponse>> {
    let message = state.catalog.patch_product(&id, patch).await?;
    Ok(Json(MessageResponse::new(message)))
}

/// DELETE /products/{id} - 删除商品及其图片、评论、相似关系
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.catalog.delete_product(&id).await?;
    Ok(StatusCode::OK)
}

// =============================================================================
// Images & Comments
// =============================================================================

/// POST /products/add-images
pub async fn add_images(
    State(state): State<ServerState>,
    Json(payload): Json<AddImagesPayload>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let message = state.catalog.add_images(payload).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new(message))))
}

/// POST /products/remove-images - body 为图片 id 数组
pub async fn remove_images(
    State(state): State<ServerState>,
    Json(ids): Json<Vec<String>>,
) -> AppResult<Json<MessageResponse>> {
    state.catalog.remove_images(&ids).await?;
    Ok(Json(MessageResponse::new("Images have been removed!")))
}

/// POST /products/remove-images/{id}
pub async fn remove_product_images(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.catalog.remove_images_for_product(&id).await?;
    Ok(Json(MessageResponse::new("Images have been removed!")))
}

/// POST /products/remove-comments/{id}
pub async fn remove_product_comments(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.catalog.remove_comments(&id).await?;
    Ok(Json(MessageResponse::new("Comments have been removed!")))
}

/// POST /products/update-thumbnail/{id}
pub async fn update_thumbnail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ThumbnailUpdate>,
) -> AppResult<Json<MessageResponse>> {
    state
        .catalog
        .swap_thumbnail(&id, &payload.new_thumbnail_id)
        .await?;
    Ok(Json(MessageResponse::new("New product thumbnail has been set!")))
}

// =============================================================================
// Similars
// =============================================================================

/// GET /products/similars/{id}
pub async fn list_similars(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<SimilarProduct>>> {
    let similars = state.catalog.get_similars(&id).await?;
    Ok(Json(similars))
}

/// GET /products/others/{id} - 既不是自身也未被关联的商品
pub async fn list_others(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let others = state.catalog.get_others(&id).await?;
    Ok(Json(others))
}

/// POST /products/add-similar
pub async fn add_similars(
    State(state): State<ServerState>,
    Json(pairs): Json<Vec<SimilarPair>>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.catalog.add_similars(pairs).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Similar products have been added!")),
    ))
}

/// POST /products/remove-similars/{id} - body 为 similarId 数组
pub async fn remove_similars(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(similar_ids): Json<Vec<String>>,
) -> AppResult<Json<MessageResponse>> {
    state.catalog.remove_similars(&id, &similar_ids).await?;
    Ok(Json(MessageResponse::new("Similar products have been removed!")))
}

/// POST /products/remove-all-similars/{id}
pub async fn remove_all_similars(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.catalog.remove_all_similars(&id).await?;
    Ok(Json(MessageResponse::new("Similar products have been removed!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn query(price_from: Option<&str>, price_to: Option<&str>) -> ProductSearchQuery {
        ProductSearchQuery {
            price_from: price_from.map(str::to_string),
            price_to: price_to.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_values_are_absent() {
        let filter = ProductSearchQuery {
            title: Some("  ".to_string()),
            description: Some(String::new()),
            price_from: Some(String::new()),
            price_to: None,
        }
        .into_filter()
        .unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_numeric_bounds_parse() {
        let filter = query(Some("5"), Some(" 15.5 ")).into_filter().unwrap();
        assert_eq!(filter.price_from, Some(5.0));
        assert_eq!(filter.price_to, Some(15.5));
    }

    #[test]
    fn test_non_numeric_bound_rejected() {
        let err = query(Some("cheap"), None).into_filter().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }
}
