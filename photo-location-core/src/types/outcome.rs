//! 更新结果类型定义

use serde::Serialize;

use crate::error::CoreError;

/// Result of one location update request
///
/// Exactly one is produced per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "camelCase")]
pub enum UpdateOutcome {
    /// 位置已写入
    Success,
    /// 标识符未匹配到任何资源
    NotFound,
    /// 请求未通过校验，未访问存储
    InvalidInput(String),
    /// 存储查询或写入失败
    StoreError(String),
}

impl UpdateOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<CoreError> for UpdateOutcome {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(reason) => Self::InvalidInput(reason),
            CoreError::AssetNotFound(_) => Self::NotFound,
            CoreError::StoreError(detail) => Self::StoreError(detail),
        }
    }
}
