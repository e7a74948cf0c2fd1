//! Photo Location Method Channel
//!
//! 将宿主应用的方法调用路由到位置更新服务，并把结果转换为布尔应答。

use std::sync::Arc;

use photo_location_core::{CompletionContext, LocationUpdateService};
use serde_json::Value;
use tokio::sync::oneshot;

mod commands;
mod models;

pub use models::*;

/// 通道名称
pub const CHANNEL_NAME: &str = "io.flutter.flutter.app/photo_location";

/// 唯一支持的方法
pub const METHOD_UPDATE_PHOTO_LOCATION: &str = "updatePhotoLocation";

/// 通道错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Method not implemented: {0}")]
    UnknownOperation(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

/// Method channel handler for photo location updates
///
/// Every reply, including rejections, is delivered through `context`.
pub struct PhotoLocationChannel {
    service: LocationUpdateService,
    context: Arc<dyn CompletionContext>,
}

impl PhotoLocationChannel {
    pub fn new(service: LocationUpdateService, context: Arc<dyn CompletionContext>) -> Self {
        Self { service, context }
    }

    pub fn name(&self) -> &'static str {
        CHANNEL_NAME
    }

    /// 处理一次方法调用
    ///
    /// `result` runs exactly once on the channel's completion context.
    pub fn handle_method_call<F>(&self, call: MethodCall, result: F)
    where
        F: FnOnce(MethodResponse) + Send + 'static,
    {
        match commands::parse_update_request(&call) {
            Ok(request) => {
                drop(self.service.submit(
                    request,
                    Arc::clone(&self.context),
                    move |outcome| result(MethodResponse::from(outcome)),
                ));
            }
            Err(Error::UnknownOperation(method)) => {
                log::warn!("Unhandled method on {CHANNEL_NAME}: {method}");
                self.context
                    .execute(Box::new(move || result(MethodResponse::NotImplemented)));
            }
            Err(e) => {
                log::warn!("Rejected {METHOD_UPDATE_PHOTO_LOCATION} call: {e}");
                self.context.execute(Box::new(move || {
                    result(MethodResponse::Success(Value::Bool(false)));
                }));
            }
        }
    }

    /// Awaitable form of [`Self::handle_method_call`]
    pub async fn invoke(&self, call: MethodCall) -> MethodResponse {
        let (tx, rx) = oneshot::channel();
        self.handle_method_call(call, move |response| {
            let _ = tx.send(response);
        });
        rx.await.unwrap_or_else(|_| {
            log::error!("Completion context dropped the reply");
            MethodResponse::Success(Value::Bool(false))
        })
    }
}
