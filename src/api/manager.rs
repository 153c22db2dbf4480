// 全局 API 管理器

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;
use tracing::info;

use super::client::ShareClient;
use super::config::ApiConfig;

/// 全局 API 管理器
/// 负责管理 Tokio 运行时和文件共享客户端实例
pub struct ApiManager {
    /// Tokio 运行时，用于执行所有 HTTP 异步任务
    runtime: Runtime,
    /// 当前客户端，服务地址变更时整体替换
    client: RwLock<Arc<ShareClient>>,
}

impl ApiManager {
    /// 创建新的 API 管理器
    fn new() -> Self {
        // 创建多线程 Tokio 运行时
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("api-worker")
            .build()
            .expect("Failed to create API Tokio runtime");

        // 从持久化设置恢复服务地址，读取失败时使用默认地址
        let config = crate::services::storage::load_settings()
            .map(|s| ApiConfig::new(s.server.base_url))
            .unwrap_or_default();

        Self {
            runtime,
            client: RwLock::new(Arc::new(ShareClient::new(config))),
        }
    }

    /// 获取全局单例
    pub fn global() -> &'static ApiManager {
        static MANAGER: Lazy<ApiManager> = Lazy::new(|| ApiManager::new());
        &MANAGER
    }

    /// 获取 Tokio 运行时引用
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// 获取当前客户端
    pub fn client(&self) -> Arc<ShareClient> {
        self.client.read().unwrap().clone()
    }

    /// 服务地址变更后重建客户端，地址未变化时保留原实例
    pub fn reconfigure(&self, config: ApiConfig) {
        let mut guard = self.client.write().unwrap();
        if guard.config() != &config {
            info!("[API] Reconfiguring client: {}", config.base_url);
            *guard = Arc::new(ShareClient::new(config));
        }
    }
}
