//! 位置更新服务

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::CompletionContext;
use crate::types::{UpdateOutcome, UpdateRequest};

/// 位置更新服务
///
/// Runs validate → resolve → mutate for one request and produces exactly
/// one [`UpdateOutcome`]. Nothing is retried; retry policy belongs to the
/// caller.
#[derive(Clone)]
pub struct LocationUpdateService {
    ctx: Arc<ServiceContext>,
}

impl LocationUpdateService {
    /// 创建位置更新服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 更新资源位置
    pub async fn update_location(&self, request: UpdateRequest) -> UpdateOutcome {
        let local_id = request.local_id().to_string();
        match self.apply(request).await {
            Ok(()) => {
                log::info!("Location updated for asset {local_id}");
                UpdateOutcome::Success
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Location update rejected for asset {local_id}: {e}");
                } else {
                    log::error!("Location update failed for asset {local_id}: {e}");
                }
                UpdateOutcome::from(e)
            }
        }
    }

    /// Run the update on the worker runtime and deliver the outcome on `context`
    ///
    /// Returns immediately. `completion` runs exactly once, also when the
    /// asset store panics.
    pub fn submit<F>(
        &self,
        request: UpdateRequest,
        context: Arc<dyn CompletionContext>,
        completion: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(UpdateOutcome) + Send + 'static,
    {
        let service = self.clone();
        log::debug!("Dispatching location update for asset {}", request.local_id());
        self.ctx.worker.spawn(async move {
            let local_id = request.local_id().to_string();
            let outcome = AssertUnwindSafe(service.update_location(request))
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| {
                    let detail = panic_detail(payload.as_ref());
                    log::error!("Location update panicked for asset {local_id}: {detail}");
                    UpdateOutcome::StoreError(detail)
                });
            context.execute(Box::new(move || completion(outcome)));
        })
    }

    /// Future form of [`Self::submit`]
    ///
    /// The sender fires from inside `context`.
    pub fn handle(
        &self,
        request: UpdateRequest,
        context: Arc<dyn CompletionContext>,
    ) -> oneshot::Receiver<UpdateOutcome> {
        let (tx, rx) = oneshot::channel();
        drop(self.submit(request, context, move |outcome| {
            if tx.send(outcome).is_err() {
                log::debug!("Outcome receiver dropped before delivery");
            }
        }));
        rx
    }

    async fn apply(&self, request: UpdateRequest) -> CoreResult<()> {
        request.validate(self.ctx.config.coordinate_policy)?;

        let location = request.location();
        let asset = self
            .ctx
            .asset_store
            .fetch_asset(request.local_id())
            .await?
            .ok_or_else(|| CoreError::AssetNotFound(request.local_id().to_string()))?;

        log::debug!(
            "Resolved asset {}, writing location ({}, {})",
            asset.local_id(),
            location.latitude,
            location.longitude
        );

        self.ctx.asset_store.set_location(asset, location).await
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "asset store panicked".to_string())
}
