//! Similar-product links
//!
//! Each edge stores a snapshot of the linked product's title, description
//! and price. Snapshots are not refreshed when the product changes.

use std::collections::{BTreeSet, HashMap};

use shared::error::ErrorCode;
use shared::models::SimilarPair;
use shared::util::new_id;

use super::{CatalogError, CatalogService, RepoResult};
use crate::db::models::{ProductEntity, SimilarEntity};
use crate::db::repository::{product, similar};

impl CatalogService {
    /// Link each `productId` to its `similarId`
    pub async fn add_similars(&self, pairs: Vec<SimilarPair>) -> RepoResult<u64> {
        if pairs.is_empty() {
            return Err(CatalogError::invalid_with(
                ErrorCode::SimilarsEmpty,
                "Similar array is empty",
            ));
        }
        if let Some(pair) = pairs.iter().find(|p| p.product_id == p.similar_id) {
            return Err(CatalogError::invalid(format!(
                "Product {} cannot be similar to itself",
                pair.product_id
            )));
        }

        let wanted: Vec<String> = pairs
            .iter()
            .map(|p| p.similar_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let mut tx = self.begin_write().await?;
        let found: HashMap<String, ProductEntity> = product::find_by_ids(&mut *tx, &wanted)
            .await?
            .into_iter()
            .map(|row| (row.product_id.clone(), row))
            .collect();

        let mut edges = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let Some(snapshot) = found.get(&pair.similar_id) else {
                tracing::warn!(similar_id = %pair.similar_id, "Link rejected: unknown product");
                return Err(CatalogError::invalid(format!(
                    "Product with id {} is not found",
                    pair.similar_id
                )));
            };
            edges.push(SimilarEntity {
                row_id: new_id(),
                title: snapshot.title.clone(),
                description: snapshot.description.clone(),
                price: snapshot.price.clone(),
                product_id: pair.product_id,
                similar_id: pair.similar_id,
            });
        }

        let inserted = similar::insert_many(&mut *tx, &edges).await?;
        tx.commit().await?;
        tracing::info!(inserted, "Similar products linked");
        Ok(inserted)
    }

    /// Unlink `similar_ids` from `product_id`; nothing removed is `NotFound`
    pub async fn remove_similars(&self, product_id: &str, similar_ids: &[String]) -> RepoResult<u64> {
        let removed = if similar_ids.is_empty() {
            0
        } else {
            let mut tx = self.begin_write().await?;
            let removed = similar::delete_for_owner(&mut *tx, product_id, similar_ids).await?;
            tx.commit().await?;
            removed
        };

        if removed == 0 {
            return Err(CatalogError::not_found(
                ErrorCode::SimilarNotFound,
                "No similar product has been removed",
            ));
        }

        tracing::info!(product_id = %product_id, removed, "Similar products unlinked");
        Ok(removed)
    }

    pub async fn remove_all_similars(&self, product_id: &str) -> RepoResult<u64> {
        let removed = similar::delete_by_owner(&self.pool, product_id).await?;
        tracing::info!(product_id = %product_id, removed, "All similar products unlinked");
        Ok(removed)
    }
}
