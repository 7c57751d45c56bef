//! Similarity Edge Repository

use sqlx::{Acquire, Executor, Sqlite, SqliteConnection};

use super::RepoResult;
use crate::db::models::SimilarEntity;
use crate::utils::query_builder::{BIND_CHUNK, QueryBuilder, placeholders, rows_per_chunk};

/// Edges owned by `product_id`, ordered by snapshot title
pub async fn find_by_product(
    conn: impl Executor<'_, Database = Sqlite>,
    product_id: &str,
) -> RepoResult<Vec<SimilarEntity>> {
    let rows = sqlx::query_as::<_, SimilarEntity>(
        r#"
        SELECT row_id, title, description, price, product_id, similar_id
        FROM similars
        WHERE product_id = ?
        ORDER BY title
        "#,
    )
    .bind(product_id)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

/// Multi-row insert, batched by [`rows_per_chunk`]
pub async fn insert_many<'c>(
    conn: &'c mut SqliteConnection,
    edges: &[SimilarEntity],
) -> RepoResult<u64> {
    if edges.is_empty() {
        return Ok(0);
    }
    let conn = conn.acquire().await?;
    let mut inserted = 0;
    for chunk in edges.chunks(rows_per_chunk(6)) {
        let values = vec![format!("({})", placeholders(6)); chunk.len()].join(", ");
        let sql = format!(
            "INSERT INTO similars (row_id, title, description, price, product_id, similar_id) VALUES {values}"
        );

        let mut query = sqlx::query(&sql);
        for edge in chunk {
            query = query
                .bind(edge.row_id.clone())
                .bind(edge.title.clone())
                .bind(edge.description.clone())
                .bind(edge.price.clone())
                .bind(edge.product_id.clone())
                .bind(edge.similar_id.clone());
        }
        inserted += query.execute(&mut *conn).await?.rows_affected();
    }
    Ok(inserted)
}

/// Unlink the given similar ids from one owner
pub async fn delete_for_owner<'c>(
    conn: &'c mut SqliteConnection,
    product_id: &str,
    similar_ids: &[String],
) -> RepoResult<u64> {
    let conn = conn.acquire().await?;
    let mut removed = 0;
    for chunk in similar_ids.chunks(BIND_CHUNK - 1) {
        let mut builder = QueryBuilder::new();
        builder
            .add_condition("product_id = ?")
            .bind_text(product_id)
            .add_in_condition("similar_id", chunk);
        let sql = format!("DELETE FROM similars{}", builder.build_where_clause());
        removed += builder
            .apply_bindings(sqlx::query(&sql))
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }
    Ok(removed)
}

pub async fn delete_by_owner(
    conn: impl Executor<'_, Database = Sqlite>,
    product_id: &str,
) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM similars WHERE product_id = ?")
        .bind(product_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

/// Remove every edge that points at `similar_id`
pub async fn delete_by_target(
    conn: impl Executor<'_, Database = Sqlite>,
    similar_id: &str,
) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM similars WHERE similar_id = ?")
        .bind(similar_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
