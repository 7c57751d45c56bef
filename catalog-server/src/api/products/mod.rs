//! Product API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /products | GET, POST | 列表 / 创建 |
//! | /products/search | GET | 按标题、描述、价格区间过滤 |
//! | /products/{id} | GET, PATCH, DELETE | 单个商品 |
//! | /products/add-images | POST | 追加图片 |
//! | /products/remove-images | POST | 按 id 批量删除图片 |
//! | /products/remove-images/{id} | POST | 删除商品全部图片 |
//! | /products/remove-comments/{id} | POST | 删除商品全部评论 |
//! | /products/update-thumbnail/{id} | POST | 切换缩略图 |
//! | /products/similars/{id} | GET | 相似商品 |
//! | /products/others/{id} | GET | 非相似商品 |
//! | /products/add-similar | POST | 建立相似关系 |
//! | /products/remove-similars/{id} | POST | 解除指定相似关系 |
//! | /products/remove-all-similars/{id} | POST | 解除全部相似关系 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/search", get(handler::search))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
        // Images
        .route("/add-images", post(handler::add_images))
        .route("/remove-images", post(handler::remove_images))
        .route("/remove-images/{id}", post(handler::remove_product_images))
        .route("/remove-comments/{id}", post(handler::remove_product_comments))
        .route("/update-thumbnail/{id}", post(handler::update_thumbnail))
        // Similars
        .route("/similars/{id}", get(handler::list_similars))
        .route("/others/{id}", get(handler::list_others))
        .route("/add-similar", post(handler::add_similars))
        .route("/remove-similars/{id}", post(handler::remove_similars))
        .route("/remove-all-similars/{id}", post(handler::remove_all_similars))
}
