//! Catalog Server - 商品目录服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SQLite 连接池、迁移、实体与仓储
//! - **目录服务** (`services`): 商品读写、缩略图切换、相似商品、评论
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # 连接池、实体、仓储
//! ├── services/      # 目录业务逻辑
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误桥接、日志、校验、查询构建
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use services::{CatalogError, CatalogService};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 `.env` 并初始化日志
///
/// `.env` 不存在时忽略；格式错误时返回错误。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) | Err(dotenv::Error::Io(_)) => {}
        Err(e) => return Err(e.into()),
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#
    );
}
