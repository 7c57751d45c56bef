//! Thumbnail swap

use shared::error::ErrorCode;

use super::{CatalogError, CatalogService, RepoResult};
use crate::db::repository::image;

impl CatalogService {
    /// Move the `main` flag of `product_id` to `new_thumbnail_id`
    ///
    /// Requires exactly one current main image and exactly one matching
    /// target image. Both checks and the flip share one write transaction,
    /// so concurrent swaps on the same product serialize.
    pub async fn swap_thumbnail(&self, product_id: &str, new_thumbnail_id: &str) -> RepoResult<()> {
        let mut tx = self.begin_write().await?;

        let mains = image::find_main(&mut *tx, product_id).await?;
        let [current] = mains.as_slice() else {
            tracing::warn!(product_id = %product_id, mains = mains.len(), "Thumbnail swap rejected");
            return Err(CatalogError::invalid_with(
                ErrorCode::ThumbnailInvalid,
                "Incorrect product id",
            ));
        };

        let target = image::find_in_product(&mut *tx, product_id, new_thumbnail_id).await?;
        if target.len() != 1 {
            tracing::warn!(
                product_id = %product_id,
                new_thumbnail_id = %new_thumbnail_id,
                "Thumbnail swap rejected: unknown target"
            );
            return Err(CatalogError::invalid_with(
                ErrorCode::ThumbnailInvalid,
                "Incorrect new thumbnail id",
            ));
        }

        image::swap_main(&mut *tx, &current.image_id, new_thumbnail_id).await?;
        tx.commit().await?;

        tracing::info!(
            product_id = %product_id,
            from = %current.image_id,
            to = %new_thumbnail_id,
            "Thumbnail replaced"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::services::catalog::test_support::{image as new_image, seed, service};
    use shared::models::{AddImagesPayload, Product};

    fn mains(product: &Product) -> Vec<&str> {
        product
            .images
            .iter()
            .filter(|img| img.main)
            .map(|img| img.url.as_str())
            .collect()
    }

    async fn with_images(svc: &CatalogService, images: Vec<(&str, bool)>) -> String {
        let id = seed(svc, "Book", 10.0).await;
        svc.add_images(AddImagesPayload {
            product_id: id.clone(),
            images: images
                .into_iter()
                .map(|(url, main)| new_image(url, main))
                .collect(),
        })
        .await
        .unwrap();
        id
    }

    #[tokio::test]
    async fn test_swap_moves_main_flag() {
        let svc = service().await;
        let id = with_images(&svc, vec![("a.png", false), ("b.png", true)]).await;

        let product = svc.get_by_id(&id).await.unwrap();
        assert_eq!(product.thumbnail.as_ref().unwrap().url, "b.png");
        let a = product.images[0].id.clone();

        svc.swap_thumbnail(&id, &a).await.unwrap();

        let product = svc.get_by_id(&id).await.unwrap();
        assert_eq!(product.thumbnail.as_ref().unwrap().url, "a.png");
        assert_eq!(mains(&product), vec!["a.png"]);
    }

    #[tokio::test]
    async fn test_swap_to_current_is_noop() {
        let svc = service().await;
        let id = with_images(&svc, vec![("a.png", true), ("b.png", false)]).await;
        let before = svc.get_by_id(&id).await.unwrap();
        let a = before.images[0].id.clone();

        svc.swap_thumbnail(&id, &a).await.unwrap();

        let after = svc.get_by_id(&id).await.unwrap();
        assert_eq!(before, after);
        assert_eq!(mains(&after), vec!["a.png"]);
    }

    #[tokio::test]
    async fn test_swap_requires_exactly_one_current() {
        let svc = service().await;
        let id = with_images(&svc, vec![("a.png", false), ("b.png", false)]).await;
        let b = svc.get_by_id(&id).await.unwrap().images[1].id.clone();

        let err = svc.swap_thumbnail(&id, &b).await.unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Incorrect product id");

        let id = with_images(&svc, vec![("c.png", true), ("d.png", true)]).await;
        let err = svc.swap_thumbnail(&id, "whatever").await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect product id");
    }

    #[tokio::test]
    async fn test_swap_rejects_foreign_target() {
        let svc = service().await;
        let id = with_images(&svc, vec![("a.png", true)]).await;
        let other = with_images(&svc, vec![("x.png", true)]).await;
        let foreign = svc.get_by_id(&other).await.unwrap().images[0].id.clone();

        let err = svc.swap_thumbnail(&id, &foreign).await.unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Incorrect new thumbnail id");

        // Nothing changed on either product
        assert_eq!(mains(&svc.get_by_id(&id).await.unwrap()), vec!["a.png"]);
        assert_eq!(mains(&svc.get_by_id(&other).await.unwrap()), vec!["x.png"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_swaps_keep_one_main() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}", dir.path().join("catalog.db").display());
        let db = DbService::new(&url, 8).await.unwrap();
        let svc = CatalogService::new(db.pool.clone());

        let mut products = Vec::new();
        for n in 0..4 {
            let id = seed(&svc, &format!("Product {n}"), 1.0).await;
            svc.add_images(AddImagesPayload {
                product_id: id.clone(),
                images: vec![new_image("a.png", true), new_image("b.png", false)],
            })
            .await
            .unwrap();
            let images: Vec<String> = svc
                .get_by_id(&id)
                .await
                .unwrap()
                .images
                .into_iter()
                .map(|img| img.id)
                .collect();
            products.push((id, images));
        }

        let mut tasks = Vec::new();
        for worker in 0..8usize {
            let svc = svc.clone();
            let products = products.clone();
            tasks.push(tokio::spawn(async move {
                for round in 0..10usize {
                    for (id, images) in &products {
                        let target = &images[(round + worker) % images.len()];
                        svc.swap_thumbnail(id, target).await?;
                    }
                }
                Ok::<_, CatalogError>(())
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        for (id, _) in &products {
            let product = svc.get_by_id(id).await.unwrap();
            assert_eq!(mains(&product).len(), 1, "product {id}");
        }
    }
}
