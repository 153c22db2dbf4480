// 文件共享 HTTP 接口模块
//
// 模块结构:
// - config: 服务地址配置 (ApiConfig)
// - error: 错误类型 (ApiError)
// - client: HTTP 客户端核心 (ShareClient)
// - manager: 全局运行时与客户端管理 (ApiManager)

pub mod client;
pub mod config;
pub mod error;
pub mod manager;

// 公开导出
pub use client::ShareClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use manager::ApiManager;
