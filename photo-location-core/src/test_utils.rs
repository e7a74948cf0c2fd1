//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::sync::RwLock;

use crate::config::HandlerConfig;
use crate::error::{CoreError, CoreResult};
use crate::services::{LocationUpdateService, ServiceContext};
use crate::traits::AssetStore;
use crate::types::{AssetHandle, GeoLocation};

// ===== MockAssetStore =====

pub struct MockAssetStore {
    /// asset id -> last written location
    assets: RwLock<HashMap<String, Option<GeoLocation>>>,
    /// 如果 Some，fetch_asset 返回此错误
    lookup_error: RwLock<Option<String>>,
    /// 如果 Some，set_location 返回此错误
    write_error: RwLock<Option<String>>,
    /// 为 true 时 set_location 直接 panic
    write_panic: AtomicBool,
    lookups: AtomicUsize,
    writes: AtomicUsize,
}

impl MockAssetStore {
    pub fn new() -> Self {
        Self {
            assets: RwLock::new(HashMap::new()),
            lookup_error: RwLock::new(None),
            write_error: RwLock::new(None),
            write_panic: AtomicBool::new(false),
            lookups: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    pub async fn insert(&self, local_id: &str) {
        self.assets.write().await.insert(local_id.to_string(), None);
    }

    pub async fn location_of(&self, local_id: &str) -> Option<GeoLocation> {
        self.assets.read().await.get(local_id).copied().flatten()
    }

    pub async fn set_lookup_error(&self, err: Option<String>) {
        *self.lookup_error.write().await = err;
    }

    pub async fn set_write_error(&self, err: Option<String>) {
        *self.write_error.write().await = err;
    }

    pub fn set_write_panic(&self, panic: bool) {
        self.write_panic.store(panic, Ordering::SeqCst);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Successful writes only
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetStore for MockAssetStore {
    async fn fetch_asset(&self, local_id: &str) -> CoreResult<Option<AssetHandle>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = *self.lookup_error.read().await {
            return Err(CoreError::StoreError(msg.clone()));
        }
        Ok(self
            .assets
            .read()
            .await
            .contains_key(local_id)
            .then(|| AssetHandle::new(local_id)))
    }

    async fn set_location(&self, asset: AssetHandle, location: GeoLocation) -> CoreResult<()> {
        assert!(
            !self.write_panic.load(Ordering::SeqCst),
            "photo library crashed"
        );
        if let Some(ref msg) = *self.write_error.read().await {
            return Err(CoreError::StoreError(msg.clone()));
        }
        self.assets
            .write()
            .await
            .insert(asset.local_id().to_string(), Some(location));
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
///
/// Must be called from inside a tokio runtime.
pub fn create_test_context(config: HandlerConfig) -> (Arc<ServiceContext>, Arc<MockAssetStore>) {
    let store = Arc::new(MockAssetStore::new());
    let ctx = Arc::new(ServiceContext::new(
        store.clone(),
        config,
        Handle::current(),
    ));
    (ctx, store)
}

/// 创建测试用 `LocationUpdateService`
pub fn create_test_service() -> (LocationUpdateService, Arc<MockAssetStore>) {
    create_test_service_with_config(HandlerConfig::default())
}

pub fn create_test_service_with_config(
    config: HandlerConfig,
) -> (LocationUpdateService, Arc<MockAssetStore>) {
    let (ctx, store) = create_test_context(config);
    (LocationUpdateService::new(ctx), store)
}
