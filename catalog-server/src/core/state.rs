use crate::core::{Config, Result};
use crate::db::DbService;
use crate::services::CatalogService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是浅拷贝 (内部为 `Arc` / 连接池句柄)，可直接作为 axum State。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | catalog | CatalogService | 目录读写服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub catalog: CatalogService,
}

impl ServerState {
    /// 打开数据库、执行迁移并构建服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        Ok(Self::from_db(config.clone(), db))
    }

    /// 基于已有连接池构建 (测试使用)
    pub fn from_db(config: Config, db: DbService) -> Self {
        let catalog = CatalogService::new(db.pool.clone());
        Self {
            config,
            db,
            catalog,
        }
    }
}
