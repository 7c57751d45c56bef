//! Read side: product listings and the denormalized product view

use shared::error::ErrorCode;
use shared::models::{Comment, Image, Product, ProductFilter, SimilarProduct};

use super::{CatalogError, CatalogService, RepoResult};
use crate::db::models::assemble_products;
use crate::db::repository::{comment, image, product, similar};
use crate::utils::query_builder::QueryBuilder;

impl CatalogService {
    /// All products with their comments and images
    pub async fn list_all(&self) -> RepoResult<Vec<Product>> {
        self.load_products(&QueryBuilder::new()).await
    }

    /// Products matching `filter`; an empty filter matches everything
    pub async fn search(&self, filter: &ProductFilter) -> RepoResult<Vec<Product>> {
        let products = self.load_products(&QueryBuilder::from_filter(filter)).await?;
        tracing::debug!(matched = products.len(), "Product search");
        Ok(products)
    }

    pub async fn get_by_id(&self, id: &str) -> RepoResult<Product> {
        let mut scope = QueryBuilder::new();
        scope.add_condition("product_id = ?").bind_text(id);
        self.load_products(&scope)
            .await?
            .pop()
            .ok_or_else(|| CatalogError::product_not_found(id))
    }

    /// Similarity snapshots owned by `id`, ordered by title
    pub async fn get_similars(&self, id: &str) -> RepoResult<Vec<SimilarProduct>> {
        let rows = similar::find_by_product(&self.pool, id).await?;
        Ok(rows.into_iter().map(SimilarProduct::from).collect())
    }

    /// Products that are neither `id` nor linked from it, ordered by title
    ///
    /// An empty result is reported as `NotFound`.
    pub async fn get_others(&self, id: &str) -> RepoResult<Vec<Product>> {
        let rows = product::find_others(&self.pool, id).await?;
        if rows.is_empty() {
            return Err(CatalogError::not_found(
                ErrorCode::OthersNotFound,
                format!("Other products not similar to id {id} are not found"),
            ));
        }
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Products selected by `scope`, then their comments and images
    ///
    /// The relation queries reuse `scope` as a subquery, so no statement
    /// binds one value per product.
    async fn load_products(&self, scope: &QueryBuilder) -> RepoResult<Vec<Product>> {
        let rows = product::search(&self.pool, scope).await?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let comments: Vec<Comment> = comment::find_for_products(&self.pool, scope)
            .await?
            .into_iter()
            .map(Comment::from)
            .collect();
        let images: Vec<Image> = image::find_for_products(&self.pool, scope)
            .await?
            .into_iter()
            .map(Image::from)
            .collect();

        Ok(assemble_products(rows, comments, images))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::test_support::{image as new_image, seed, service};
    use crate::utils::query_builder::BIND_CHUNK;
    use shared::models::{AddImagesPayload, CommentCreate, SimilarPair};

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let svc = service().await;
        let err = svc.get_by_id("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product with id missing is not found");
    }

    #[tokio::test]
    async fn test_empty_filter_equals_list_all() {
        let svc = service().await;
        seed(&svc, "Book", 10.0).await;
        seed(&svc, "Pen", 3.0).await;

        let all = svc.list_all().await.unwrap();
        let searched = svc.search(&ProductFilter::default()).await.unwrap();
        assert_eq!(all, searched);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Book");
    }

    #[tokio::test]
    async fn test_search_price_range() {
        let svc = service().await;
        seed(&svc, "Cheap", 3.0).await;
        let mid = seed(&svc, "Mid", 10.0).await;
        seed(&svc, "Pricey", 20.0).await;

        let filter = ProductFilter {
            price_from: Some(5.0),
            price_to: Some(15.0),
            ..Default::default()
        };
        let found = svc.search(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, mid);
        assert_eq!(found[0].price, 10.0);
    }

    #[tokio::test]
    async fn test_search_title_is_case_insensitive_contains() {
        let svc = service().await;
        seed(&svc, "Red Book", 10.0).await;
        seed(&svc, "Blue pen", 3.0).await;

        let filter = ProductFilter {
            title: Some("book".to_string()),
            ..Default::default()
        };
        let found = svc.search(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Red Book");

        let filter = ProductFilter {
            title: Some("nothing".to_string()),
            ..Default::default()
        };
        assert!(svc.search(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let svc = service().await;
        let apples = seed(&svc, "Äpfel Öl", 4.0).await;
        seed(&svc, "Birnen", 2.0).await;

        for needle in ["äpfel", "ÄPFEL", "öl", "Äpfel ö"] {
            let filter = ProductFilter {
                title: Some(needle.to_string()),
                ..Default::default()
            };
            let found = svc.search(&filter).await.unwrap();
            assert_eq!(found.len(), 1, "needle {needle}");
            assert_eq!(found[0].id, apples);
        }

        let filter = ProductFilter {
            description: Some("ÄPFEL ÖL DESCRIPTION".to_string()),
            ..Default::default()
        };
        assert_eq!(svc.search(&filter).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_follows_patched_title() {
        let svc = service().await;
        let id = seed(&svc, "Straße", 4.0).await;

        let patch: shared::models::ProductPatch =
            serde_json::from_str(r#"{"title": "Ĳssel Kaas"}"#).unwrap();
        svc.patch_product(&id, patch).await.unwrap();

        let by = |title: &str| ProductFilter {
            title: Some(title.to_string()),
            ..Default::default()
        };
        assert!(svc.search(&by("straße")).await.unwrap().is_empty());
        assert_eq!(svc.search(&by("ĳSSEL")).await.unwrap()[0].id, id);
    }

    #[tokio::test]
    async fn test_catalog_larger_than_one_bind_chunk() {
        let svc = service().await;
        let mut ids = Vec::with_capacity(BIND_CHUNK + 1);
        for n in 0..=BIND_CHUNK {
            ids.push(seed(&svc, &format!("Item {n:04}"), n as f64).await);
        }
        let first = ids[0].clone();
        let last = ids[BIND_CHUNK].clone();

        svc.add_images(AddImagesPayload {
            product_id: last.clone(),
            images: vec![new_image("last.png", true)],
        })
        .await
        .unwrap();
        svc.create_comment(CommentCreate {
            product_id: first.clone(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            body: "First!".to_string(),
        })
        .await
        .unwrap();

        let all = svc.list_all().await.unwrap();
        assert_eq!(all.len(), BIND_CHUNK + 1);
        assert_eq!(all[0].comments.len(), 1);
        assert_eq!(all[BIND_CHUNK].thumbnail.as_ref().unwrap().url, "last.png");

        let found = svc
            .search(&ProductFilter {
                title: Some("item".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found, all);
    }

    #[tokio::test]
    async fn test_product_view_attaches_images_and_thumbnail() {
        let svc = service().await;
        let id = seed(&svc, "Lamp", 20.0).await;
        let other = seed(&svc, "Desk", 50.0).await;

        svc.add_images(AddImagesPayload {
            product_id: id.clone(),
            images: vec![new_image("a.png", false), new_image("b.png", false)],
        })
        .await
        .unwrap();

        let product = svc.get_by_id(&id).await.unwrap();
        assert_eq!(product.images.len(), 2);
        assert_eq!(product.thumbnail.unwrap().url, "a.png");

        let desk = svc.get_by_id(&other).await.unwrap();
        assert!(desk.images.is_empty());
        assert!(desk.thumbnail.is_none());
    }

    #[tokio::test]
    async fn test_others_excludes_self_and_linked() {
        let svc = service().await;
        let x = seed(&svc, "X", 1.0).await;
        let y = seed(&svc, "Y", 2.0).await;
        let z = seed(&svc, "A-Z", 3.0).await;

        svc.add_similars(vec![SimilarPair {
            product_id: x.clone(),
            similar_id: y.clone(),
        }])
        .await
        .unwrap();

        let others = svc.get_others(&x).await.unwrap();
        let ids: Vec<&str> = others.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec![z.as_str()]);

        // Links are directional
        let others = svc.get_others(&y).await.unwrap();
        let titles: Vec<&str> = others.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A-Z", "X"]);
    }

    #[tokio::test]
    async fn test_others_empty_is_not_found() {
        let svc = service().await;
        let only = seed(&svc, "Only", 1.0).await;
        let err = svc.get_others(&only).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
