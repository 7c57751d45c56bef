//! Comment desk

use shared::error::ErrorCode;
use shared::models::{Comment, CommentCreate};
use shared::util::new_id;

use super::{CatalogError, CatalogService, RepoResult};
use crate::db::models::CommentEntity;
use crate::db::repository::{comment, product};
use crate::utils::validation::{
    MAX_COMMENT_BODY_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, validate_email, validate_required_text,
};

impl CatalogService {
    pub async fn list_comments(&self) -> RepoResult<Vec<Comment>> {
        let rows = comment::find_all(&self.pool).await?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    pub async fn get_comment(&self, id: &str) -> RepoResult<Comment> {
        comment::find_by_id(&self.pool, id)
            .await?
            .map(Comment::from)
            .ok_or_else(|| comment_not_found(id))
    }

    pub async fn create_comment(&self, payload: CommentCreate) -> RepoResult<Comment> {
        validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
        validate_email(&payload.email)?;
        validate_required_text(&payload.body, "body", MAX_COMMENT_BODY_LEN)?;

        let mut tx = self.begin_write().await?;
        if product::find_by_id(&mut *tx, &payload.product_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::invalid(format!(
                "Product with id {} is not found",
                payload.product_id
            )));
        }

        let entity = CommentEntity {
            comment_id: new_id(),
            name: Some(payload.name),
            email: Some(payload.email),
            body: Some(payload.body),
            product_id: payload.product_id,
        };
        comment::insert(&mut *tx, &entity).await?;
        tx.commit().await?;

        tracing::info!(
            comment_id = %entity.comment_id,
            product_id = %entity.product_id,
            "Comment created"
        );
        Ok(Comment::from(entity))
    }

    pub async fn delete_comment(&self, id: &str) -> RepoResult<()> {
        let removed = comment::delete_by_id(&self.pool, id).await?;
        if removed == 0 {
            return Err(comment_not_found(id));
        }
        tracing::info!(comment_id = %id, "Comment deleted");
        Ok(())
    }
}

fn comment_not_found(id: &str) -> CatalogError {
    CatalogError::not_found(
        ErrorCode::CommentNotFound,
        format!("Comment with id {id} is not found"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::test_support::{seed, service};

    fn payload(product_id: &str) -> CommentCreate {
        CommentCreate {
            product_id: product_id.to_string(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            body: "Works well".to_string(),
        }
    }

    #[tokio::test]
    async fn test_comment_lifecycle() {
        let svc = service().await;
        let id = seed(&svc, "Book", 10.0).await;

        let created = svc.create_comment(payload(&id)).await.unwrap();
        assert_eq!(created.product_id, id);
        assert_eq!(svc.get_comment(&created.id).await.unwrap(), created);
        assert_eq!(svc.list_comments().await.unwrap(), vec![created.clone()]);

        let product = svc.get_by_id(&id).await.unwrap();
        assert_eq!(product.comments, vec![created.clone()]);

        svc.delete_comment(&created.id).await.unwrap();
        assert!(svc.get_comment(&created.id).await.unwrap_err().is_not_found());
        assert!(svc.delete_comment(&created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_comment_requires_existing_product() {
        let svc = service().await;
        let err = svc.create_comment(payload("ghost")).await.unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_comment_field_validation() {
        let svc = service().await;
        let id = seed(&svc, "Book", 10.0).await;

        let mut bad = payload(&id);
        bad.name = "  ".to_string();
        assert!(svc.create_comment(bad).await.unwrap_err().is_invalid_input());

        let mut bad = payload(&id);
        bad.email = "not-an-email".to_string();
        assert!(svc.create_comment(bad).await.unwrap_err().is_invalid_input());

        let mut bad = payload(&id);
        bad.body = "x".repeat(MAX_COMMENT_BODY_LEN + 1);
        assert!(svc.create_comment(bad).await.unwrap_err().is_invalid_input());

        assert!(svc.list_comments().await.unwrap().is_empty());
    }
}
