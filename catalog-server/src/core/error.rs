use thiserror::Error;

use crate::utils::AppError;

/// 启动与运行期错误 (非请求级)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库初始化失败: {0}")]
    Database(#[from] AppError),

    #[error("无法绑定地址 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务异常: {0}")]
    Serve(#[source] std::io::Error),
}

/// 服务器级 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
