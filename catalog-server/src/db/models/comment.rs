//! Comment row

use shared::models::Comment;

/// Row of the `comments` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentEntity {
    pub comment_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
    pub product_id: String,
}

impl From<CommentEntity> for Comment {
    fn from(row: CommentEntity) -> Self {
        Comment {
            id: row.comment_id,
            product_id: row.product_id,
            name: row.name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            body: row.body.unwrap_or_default(),
        }
    }
}
