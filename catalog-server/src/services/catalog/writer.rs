//! Write side: product lifecycle, images and bulk comment removal

use shared::error::ErrorCode;
use shared::models::{AddImagesPayload, ImageCreate, ProductCreate, ProductCreated, ProductPatch};
use shared::types::FieldPatch;
use shared::util::new_id;

use super::{CatalogError, CatalogService, RepoResult};
use crate::db::repository::{comment, image, product, similar};
use crate::utils::validation::{MAX_URL_LEN, validate_required_text};

impl CatalogService {
    /// Insert a product and its images in one transaction
    pub async fn create_product(&self, payload: ProductCreate) -> RepoResult<ProductCreated> {
        let title = non_empty(payload.title);
        let description = non_empty(payload.description);
        let price = match payload.price {
            Some(p) => p.into_stored().map_err(invalid_price)?,
            None => None,
        };
        let images = payload.images.unwrap_or_default();
        validate_images(&images)?;

        let id = new_id();
        warn_on_multiple_main(&id, &images);

        let mut tx = self.begin_write().await?;
        product::insert(
            &mut *tx,
            &id,
            title.as_deref(),
            description.as_deref(),
            price.as_deref(),
        )
        .await?;
        image::insert_many(&mut *tx, &id, &images).await?;
        tx.commit().await?;

        tracing::info!(product_id = %id, images = images.len(), "Product created");

        Ok(ProductCreated {
            message: format!("Product with id:{id} have been added!"),
            product_id: id,
        })
    }

    /// Apply the keys present in `patch`, keeping the stored value for absent ones
    pub async fn patch_product(&self, id: &str, patch: ProductPatch) -> RepoResult<String> {
        let price = match patch.price {
            FieldPatch::Value(p) => match p.into_stored().map_err(invalid_price)? {
                Some(stored) => FieldPatch::Value(stored),
                None => FieldPatch::Null,
            },
            FieldPatch::Null => FieldPatch::Null,
            FieldPatch::Missing => FieldPatch::Missing,
        };

        let mut tx = self.begin_write().await?;
        let current = product::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| CatalogError::product_not_found(id))?;

        let title = patch.title.resolve(current.title);
        let description = patch.description.resolve(current.description);
        let price = price.resolve(current.price);

        product::update_fields(
            &mut *tx,
            id,
            title.as_deref(),
            description.as_deref(),
            price.as_deref(),
        )
        .await?;
        tx.commit().await?;

        tracing::info!(product_id = %id, "Product updated");
        Ok(format!("Product id:{id} has been updated!"))
    }

    /// Delete a product and everything that references it
    pub async fn delete_product(&self, id: &str) -> RepoResult<()> {
        let mut tx = self.begin_write().await?;

        if product::find_by_id(&mut *tx, id).await?.is_none() {
            return Err(CatalogError::product_not_found(id));
        }

        let images = image::delete_by_product(&mut *tx, id).await?;
        let comments = comment::delete_by_product(&mut *tx, id).await?;
        let inbound = similar::delete_by_target(&mut *tx, id).await?;
        let outbound = similar::delete_by_owner(&mut *tx, id).await?;
        product::delete(&mut *tx, id).await?;

        tx.commit().await?;

        tracing::info!(
            product_id = %id,
            images,
            comments,
            similars = inbound + outbound,
            "Product deleted"
        );
        Ok(())
    }

    pub async fn add_images(&self, payload: AddImagesPayload) -> RepoResult<String> {
        if payload.images.is_empty() {
            return Err(CatalogError::invalid_with(
                ErrorCode::ImagesEmpty,
                "Images array is empty",
            ));
        }
        validate_images(&payload.images)?;
        warn_on_multiple_main(&payload.product_id, &payload.images);

        let mut tx = self.begin_write().await?;
        let inserted = image::insert_many(&mut *tx, &payload.product_id, &payload.images).await?;
        tx.commit().await?;
        tracing::info!(product_id = %payload.product_id, inserted, "Images added");

        Ok(format!(
            "Images for a product id:{} have been added!",
            payload.product_id
        ))
    }

    pub async fn remove_images(&self, ids: &[String]) -> RepoResult<u64> {
        if ids.is_empty() {
            return Err(CatalogError::invalid_with(
                ErrorCode::ImagesEmpty,
                "Images array is empty",
            ));
        }
        let mut tx = self.begin_write().await?;
        let removed = image::delete_by_ids(&mut *tx, ids).await?;
        tx.commit().await?;
        tracing::info!(requested = ids.len(), removed, "Images removed");
        Ok(removed)
    }

    pub async fn remove_images_for_product(&self, product_id: &str) -> RepoResult<u64> {
        let removed = image::delete_by_product(&self.pool, product_id).await?;
        tracing::info!(product_id = %product_id, removed, "Product images removed");
        Ok(removed)
    }

    pub async fn remove_comments(&self, product_id: &str) -> RepoResult<u64> {
        let removed = comment::delete_by_product(&self.pool, product_id).await?;
        tracing::info!(product_id = %product_id, removed, "Product comments removed");
        Ok(removed)
    }
}

fn invalid_price(message: String) -> CatalogError {
    CatalogError::invalid_with(ErrorCode::ProductInvalidPrice, message)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn validate_images(images: &[ImageCreate]) -> RepoResult<()> {
    for img in images {
        validate_required_text(&img.url, "url", MAX_URL_LEN)?;
    }
    Ok(())
}

/// More than one `main` image is stored as sent
fn warn_on_multiple_main(product_id: &str, images: &[ImageCreate]) {
    let mains = images.iter().filter(|img| img.main).count();
    if mains > 1 {
        tracing::warn!(product_id = %product_id, mains, "Payload flags more than one main image");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::test_support::{image as new_image, product as new_product, seed, service};
    use crate::utils::query_builder::{BIND_CHUNK, QueryBuilder};
    use shared::models::{CommentCreate, SimilarPair};
    use shared::types::PriceInput;

    #[tokio::test]
    async fn test_create_without_images() {
        let svc = service().await;
        let created = svc.create_product(new_product("Book", 10.0)).await.unwrap();
        assert_eq!(
            created.message,
            format!("Product with id:{} have been added!", created.product_id)
        );

        let product = svc.get_by_id(&created.product_id).await.unwrap();
        assert_eq!(product.title, "Book");
        assert_eq!(product.price, 10.0);
        assert!(product.thumbnail.is_none());
    }

    #[tokio::test]
    async fn test_create_stores_empty_fields_as_null() {
        let svc = service().await;
        let created = svc
            .create_product(ProductCreate {
                title: Some(String::new()),
                description: None,
                price: Some(PriceInput::Text(String::new())),
                images: Some(vec![new_image("a.png", true)]),
            })
            .await
            .unwrap();

        let row = product::find_by_id(svc.pool(), &created.product_id)
            .await
            .unwrap()
            .unwrap();
        assert!(row.title.is_none());
        assert!(row.price.is_none());

        let product = svc.get_by_id(&created.product_id).await.unwrap();
        assert_eq!(product.title, "");
        assert_eq!(product.price, 0.0);
        assert!(product.thumbnail.unwrap().main);
    }

    #[tokio::test]
    async fn test_create_keeps_every_main_flag() {
        let svc = service().await;
        let mut payload = new_product("Lamp", 20.0);
        payload.images = Some(vec![
            new_image("side.png", false),
            new_image("front.png", true),
            new_image("back.png", true),
        ]);
        let created = svc.create_product(payload).await.unwrap();

        let product = svc.get_by_id(&created.product_id).await.unwrap();
        let flags: Vec<(&str, bool)> = product
            .images
            .iter()
            .map(|img| (img.url.as_str(), img.main))
            .collect();
        assert_eq!(
            flags,
            vec![("side.png", false), ("front.png", true), ("back.png", true)]
        );
        assert_eq!(product.thumbnail.unwrap().url, "front.png");

        // With two mains the thumbnail cannot be swapped
        let err = svc
            .swap_thumbnail(&created.product_id, &product.images[0].id)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Incorrect product id");
    }

    #[tokio::test]
    async fn test_create_rejects_bad_price() {
        let svc = service().await;
        let err = svc
            .create_product(ProductCreate {
                price: Some(PriceInput::Text("ten".to_string())),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_patch_empty_body_changes_nothing() {
        let svc = service().await;
        let id = seed(&svc, "Book", 10.0).await;
        let before = svc.get_by_id(&id).await.unwrap();

        svc.patch_product(&id, ProductPatch::default()).await.unwrap();
        assert_eq!(svc.get_by_id(&id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_patch_null_clears_and_value_sets() {
        let svc = service().await;
        let id = seed(&svc, "Book", 10.0).await;

        let patch: ProductPatch =
            serde_json::from_str(r#"{"title": null, "price": 12.5}"#).unwrap();
        let message = svc.patch_product(&id, patch).await.unwrap();
        assert_eq!(message, format!("Product id:{id} has been updated!"));

        let product = svc.get_by_id(&id).await.unwrap();
        assert_eq!(product.title, "");
        assert_eq!(product.description, "Book description");
        assert_eq!(product.price, 12.5);
    }

    #[tokio::test]
    async fn test_patch_missing_product() {
        let svc = service().await;
        let err = svc
            .patch_product("nope", ProductPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_cascades_everywhere() {
        let svc = service().await;
        let p = seed(&svc, "P", 1.0).await;
        let q = seed(&svc, "Q", 2.0).await;
        let r = seed(&svc, "R", 3.0).await;

        svc.add_images(AddImagesPayload {
            product_id: p.clone(),
            images: vec![new_image("p.png", true)],
        })
        .await
        .unwrap();
        svc.create_comment(CommentCreate {
            product_id: p.clone(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            body: "Great".to_string(),
        })
        .await
        .unwrap();
        svc.add_similars(vec![
            SimilarPair {
                product_id: p.clone(),
                similar_id: q.clone(),
            },
            SimilarPair {
                product_id: q.clone(),
                similar_id: p.clone(),
            },
        ])
        .await
        .unwrap();

        svc.delete_product(&p).await.unwrap();

        assert!(svc.get_by_id(&p).await.unwrap_err().is_not_found());
        assert!(svc.list_comments().await.unwrap().is_empty());
        assert!(svc.get_similars(&q).await.unwrap().is_empty());
        let others: Vec<String> = svc
            .get_others(&q)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(others, vec![r]);

        let mut scope = QueryBuilder::new();
        scope.add_condition("product_id = ?").bind_text(p.as_str());
        assert!(image::find_for_products(svc.pool(), &scope).await.unwrap().is_empty());
        let orphans = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM images WHERE product_id = ?")
            .bind(&p)
            .fetch_one(svc.pool())
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let svc = service().await;
        assert!(svc.delete_product("ghost").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_add_images_empty_is_invalid() {
        let svc = service().await;
        let id = seed(&svc, "Book", 10.0).await;
        let err = svc
            .add_images(AddImagesPayload {
                product_id: id,
                images: vec![],
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Images array is empty");
    }

    #[tokio::test]
    async fn test_remove_images_by_id_and_by_product() {
        let svc = service().await;
        let id = seed(&svc, "Book", 10.0).await;
        svc.add_images(AddImagesPayload {
            product_id: id.clone(),
            images: vec![
                new_image("a.png", true),
                new_image("b.png", false),
                new_image("c.png", false),
            ],
        })
        .await
        .unwrap();

        let images = svc.get_by_id(&id).await.unwrap().images;
        let removed = svc.remove_images(&[images[1].id.clone()]).await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(svc.get_by_id(&id).await.unwrap().images.len(), 2);

        assert!(svc.remove_images(&[]).await.unwrap_err().is_invalid_input());

        assert_eq!(svc.remove_images_for_product(&id).await.unwrap(), 2);
        assert!(svc.get_by_id(&id).await.unwrap().images.is_empty());
        assert_eq!(svc.remove_images_for_product(&id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_images_beyond_one_bind_chunk() {
        let svc = service().await;
        let id = seed(&svc, "Gallery", 1.0).await;
        let keep = seed(&svc, "Keep", 1.0).await;
        let count = BIND_CHUNK + 7;

        let images = (0..count)
            .map(|n| new_image(&format!("{n}.png"), n == 0))
            .collect();
        let message = svc
            .add_images(AddImagesPayload {
                product_id: id.clone(),
                images,
            })
            .await
            .unwrap();
        assert_eq!(message, format!("Images for a product id:{id} have been added!"));
        svc.add_images(AddImagesPayload {
            product_id: keep.clone(),
            images: vec![new_image("keep.png", true)],
        })
        .await
        .unwrap();

        let product = svc.get_by_id(&id).await.unwrap();
        assert_eq!(product.images.len(), count);
        assert_eq!(product.images[count - 1].url, format!("{}.png", count - 1));

        let ids: Vec<String> = product.images.iter().map(|img| img.id.clone()).collect();
        assert_eq!(svc.remove_images(&ids).await.unwrap(), count as u64);
        assert!(svc.get_by_id(&id).await.unwrap().images.is_empty());
        assert_eq!(svc.get_by_id(&keep).await.unwrap().images.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_comments_always_succeeds() {
        let svc = service().await;
        assert_eq!(svc.remove_comments("nobody").await.unwrap(), 0);
    }
}
