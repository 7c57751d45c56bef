//! Catalog Service - products, images, comments and similar-product links
//!
//! The service owns an injected [`SqlitePool`]; each operation awaits its
//! storage calls in order. Multi-statement writes (create, delete, thumbnail
//! swap, batched image and similar-link changes) run inside a transaction
//! opened with `BEGIN IMMEDIATE`, so the write lock is taken up front and a
//! competing writer waits on `busy_timeout` instead of failing mid-way.
//!
//! | file | operations |
//! |------|------------|
//! | `reader.rs` | list, search, get, similars, others |
//! | `writer.rs` | create, patch, delete, images, bulk comment removal |
//! | `thumbnail.rs` | thumbnail swap |
//! | `similars.rs` | link / unlink similar products |
//! | `comments.rs` | single comment CRUD |

mod comments;
mod reader;
mod similars;
mod thumbnail;
mod writer;

use sqlx::{Sqlite, SqlitePool, Transaction};

pub use crate::db::repository::{CatalogError, RepoResult};

/// Catalog query / mutation engine
#[derive(Clone)]
pub struct CatalogService {
    pool: SqlitePool,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("pool_size", &self.pool.size())
            .finish()
    }
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open a write transaction holding the database write lock
    async fn begin_write(&self) -> RepoResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }
}
