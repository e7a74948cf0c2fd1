//! 业务逻辑服务层

mod location_update_service;

pub use location_update_service::LocationUpdateService;

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::config::HandlerConfig;
use crate::traits::AssetStore;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的资源存储实现。
pub struct ServiceContext {
    /// 照片资源存储
    pub asset_store: Arc<dyn AssetStore>,
    /// 处理器配置
    pub config: HandlerConfig,
    /// 执行存储写入的运行时
    pub worker: Handle,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(asset_store: Arc<dyn AssetStore>, config: HandlerConfig, worker: Handle) -> Self {
        Self {
            asset_store,
            config,
            worker,
        }
    }
}
