//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Request rejected before touching the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Identifier did not resolve to an asset
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Store lookup or write failed
    #[error("Store error: {0}")]
    StoreError(String),
}

impl CoreError {
    /// Whether it is expected behavior (bad input, unknown asset), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidInput(_) | Self::AssetNotFound(_) => true,
            Self::StoreError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
