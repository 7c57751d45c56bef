//! Image Repository

use shared::models::ImageCreate;
use shared::util::new_id;
use sqlx::{Acquire, Executor, Sqlite, SqliteConnection};

use super::RepoResult;
use crate::db::models::ImageEntity;
use crate::utils::query_builder::{BIND_CHUNK, QueryBuilder, placeholders, rows_per_chunk};

/// Images of every product selected by `scope`, insertion order
///
/// `scope` is a predicate over `products`; it is evaluated as a subquery so
/// the statement binds only the filter values.
pub async fn find_for_products(
    conn: impl Executor<'_, Database = Sqlite>,
    scope: &QueryBuilder,
) -> RepoResult<Vec<ImageEntity>> {
    let sql = format!(
        r#"
        SELECT image_id, url, product_id, main FROM images
        WHERE product_id IN (SELECT product_id FROM products{})
        ORDER BY rowid
        "#,
        scope.build_where_clause()
    );
    let rows = scope
        .apply_bindings_as(sqlx::query_as::<_, ImageEntity>(&sql))
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

/// Rows flagged `main` for a product
pub async fn find_main(
    conn: impl Executor<'_, Database = Sqlite>,
    product_id: &str,
) -> RepoResult<Vec<ImageEntity>> {
    let rows = sqlx::query_as::<_, ImageEntity>(
        "SELECT image_id, url, product_id, main FROM images WHERE product_id = ? AND main = 1",
    )
    .bind(product_id)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

/// Rows matching both the product and the image id
pub async fn find_in_product(
    conn: impl Executor<'_, Database = Sqlite>,
    product_id: &str,
    image_id: &str,
) -> RepoResult<Vec<ImageEntity>> {
    let rows = sqlx::query_as::<_, ImageEntity>(
        "SELECT image_id, url, product_id, main FROM images WHERE product_id = ? AND image_id = ?",
    )
    .bind(product_id)
    .bind(image_id)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

/// Bulk insert with fresh ids; `main` flags are stored as given
///
/// Rows go out in multi-row statements sized by [`rows_per_chunk`]. Run it
/// inside a transaction when all rows must land together.
pub async fn insert_many<'c>(
    conn: &'c mut SqliteConnection,
    product_id: &str,
    images: &[ImageCreate],
) -> RepoResult<u64> {
    if images.is_empty() {
        return Ok(0);
    }
    let conn = conn.acquire().await?;
    let mut inserted = 0;
    for chunk in images.chunks(rows_per_chunk(4)) {
        let values = vec![format!("({})", placeholders(4)); chunk.len()].join(", ");
        let sql = format!("INSERT INTO images (image_id, url, product_id, main) VALUES {values}");

        let mut query = sqlx::query(&sql);
        for image in chunk {
            query = query
                .bind(new_id())
                .bind(image.url.clone())
                .bind(product_id.to_string())
                .bind(i64::from(image.main));
        }
        inserted += query.execute(&mut *conn).await?.rows_affected();
    }
    Ok(inserted)
}

/// Move the `main` flag from `current_id` to `target_id` in one statement
///
/// The target branch is checked first, so `current_id == target_id`
/// leaves the image flagged.
pub async fn swap_main(
    conn: impl Executor<'_, Database = Sqlite>,
    current_id: &str,
    target_id: &str,
) -> RepoResult<u64> {
    let result = sqlx::query(
        r#"
        UPDATE images
        SET main = CASE WHEN image_id = ? THEN 1 WHEN image_id = ? THEN 0 ELSE main END
        WHERE image_id IN (?, ?)
        "#,
    )
    .bind(target_id)
    .bind(current_id)
    .bind(target_id)
    .bind(current_id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

/// Delete by image id, [`BIND_CHUNK`] ids per statement
pub async fn delete_by_ids<'c>(
    conn: &'c mut SqliteConnection,
    ids: &[String],
) -> RepoResult<u64> {
    let conn = conn.acquire().await?;
    let mut removed = 0;
    for chunk in ids.chunks(BIND_CHUNK) {
        let mut builder = QueryBuilder::new();
        builder.add_in_condition("image_id", chunk);
        let sql = format!("DELETE FROM images{}", builder.build_where_clause());
        removed += builder
            .apply_bindings(sqlx::query(&sql))
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }
    Ok(removed)
}

pub async fn delete_by_product(
    conn: impl Executor<'_, Database = Sqlite>,
    product_id: &str,
) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM images WHERE product_id = ?")
        .bind(product_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
