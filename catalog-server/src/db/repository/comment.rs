//! Comment Repository

use sqlx::{Executor, Sqlite};

use super::RepoResult;
use crate::db::models::CommentEntity;
use crate::utils::query_builder::QueryBuilder;

pub async fn find_all(conn: impl Executor<'_, Database = Sqlite>) -> RepoResult<Vec<CommentEntity>> {
    let rows = sqlx::query_as::<_, CommentEntity>(
        "SELECT comment_id, name, email, body, product_id FROM comments ORDER BY rowid",
    )
    .fetch_all(conn)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(
    conn: impl Executor<'_, Database = Sqlite>,
    id: &str,
) -> RepoResult<Option<CommentEntity>> {
    let row = sqlx::query_as::<_, CommentEntity>(
        "SELECT comment_id, name, email, body, product_id FROM comments WHERE comment_id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(row)
}

/// Comments of every product selected by `scope`, insertion order
pub async fn find_for_products(
    conn: impl Executor<'_, Database = Sqlite>,
    scope: &QueryBuilder,
) -> RepoResult<Vec<CommentEntity>> {
    let sql = format!(
        r#"
        SELECT comment_id, name, email, body, product_id FROM comments
        WHERE product_id IN (SELECT product_id FROM products{})
        ORDER BY rowid
        "#,
        scope.build_where_clause()
    );
    let rows = scope
        .apply_bindings_as(sqlx::query_as::<_, CommentEntity>(&sql))
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

pub async fn insert(
    conn: impl Executor<'_, Database = Sqlite>,
    comment: &CommentEntity,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO comments (comment_id, name, email, body, product_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&comment.comment_id)
    .bind(&comment.name)
    .bind(&comment.email)
    .bind(&comment.body)
    .bind(&comment.product_id)
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn delete_by_id(conn: impl Executor<'_, Database = Sqlite>, id: &str) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_by_product(
    conn: impl Executor<'_, Database = Sqlite>,
    product_id: &str,
) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM comments WHERE product_id = ?")
        .bind(product_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
