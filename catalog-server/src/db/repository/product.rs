//! Product Repository

use sqlx::{Acquire, Executor, Sqlite, SqliteConnection};

use super::RepoResult;
use crate::db::models::ProductEntity;
use crate::utils::query_builder::{BIND_CHUNK, QueryBuilder, search_key};

/// Products matching the builder's predicate, insertion order
///
/// An empty builder lists every product.
pub async fn search(
    conn: impl Executor<'_, Database = Sqlite>,
    builder: &QueryBuilder,
) -> RepoResult<Vec<ProductEntity>> {
    let sql = format!(
        "SELECT product_id, title, description, price, category FROM products{} ORDER BY rowid",
        builder.build_where_clause()
    );
    let rows = builder
        .apply_bindings_as(sqlx::query_as::<_, ProductEntity>(&sql))
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(
    conn: impl Executor<'_, Database = Sqlite>,
    id: &str,
) -> RepoResult<Option<ProductEntity>> {
    let row = sqlx::query_as::<_, ProductEntity>(
        "SELECT product_id, title, description, price, category FROM products WHERE product_id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(row)
}

/// Products whose id is in `ids`, looked up [`BIND_CHUNK`] ids at a time
pub async fn find_by_ids<'c>(
    conn: &'c mut SqliteConnection,
    ids: &[String],
) -> RepoResult<Vec<ProductEntity>> {
    let conn = conn.acquire().await?;
    let mut rows = Vec::with_capacity(ids.len());
    for chunk in ids.chunks(BIND_CHUNK) {
        let mut builder = QueryBuilder::new();
        builder.add_in_condition("product_id", chunk);
        let sql = format!(
            "SELECT product_id, title, description, price, category FROM products{}",
            builder.build_where_clause()
        );
        let found = builder
            .apply_bindings_as(sqlx::query_as::<_, ProductEntity>(&sql))
            .fetch_all(&mut *conn)
            .await?;
        rows.extend(found);
    }
    Ok(rows)
}

/// Products other than `id` that `id` does not link to, ordered by title
pub async fn find_others(
    conn: impl Executor<'_, Database = Sqlite>,
    id: &str,
) -> RepoResult<Vec<ProductEntity>> {
    let rows = sqlx::query_as::<_, ProductEntity>(
        r#"
        SELECT p.product_id, p.title, p.description, p.price, p.category
        FROM products p
        LEFT JOIN similars s ON s.similar_id = p.product_id AND s.product_id = ?
        WHERE p.product_id != ? AND s.row_id IS NULL
        ORDER BY p.title
        "#,
    )
    .bind(id)
    .bind(id)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

pub async fn insert(
    conn: impl Executor<'_, Database = Sqlite>,
    id: &str,
    title: Option<&str>,
    description: Option<&str>,
    price: Option<&str>,
) -> RepoResult<()> {
    sqlx::query(
        r#"
        INSERT INTO products (product_id, title, description, price, title_search, description_search)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(price)
    .bind(title.map(search_key))
    .bind(description.map(search_key))
    .execute(conn)
    .await?;
    Ok(())
}

/// Overwrite title, description and price, refreshing the search columns
pub async fn update_fields(
    conn: impl Executor<'_, Database = Sqlite>,
    id: &str,
    title: Option<&str>,
    description: Option<&str>,
    price: Option<&str>,
) -> RepoResult<u64> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET title = ?, description = ?, price = ?, title_search = ?, description_search = ?
        WHERE product_id = ?
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(price)
    .bind(title.map(search_key))
    .bind(description.map(search_key))
    .bind(id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(conn: impl Executor<'_, Database = Sqlite>, id: &str) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM products WHERE product_id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
