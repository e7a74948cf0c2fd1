//! Asset store abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{AssetHandle, GeoLocation};

/// Platform photo asset store Trait
///
/// The store is an external, already-synchronized resource. Concurrent
/// writes to the same asset are resolved by the store itself.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Resolve an identifier to an asset
    ///
    /// Performs a single exact-match query.
    ///
    /// # Arguments
    /// * `local_id` - Platform-issued asset identifier
    async fn fetch_asset(&self, local_id: &str) -> CoreResult<Option<AssetHandle>>;

    /// Set the location of a resolved asset
    ///
    /// Runs as one store transaction; an `Err` means nothing was committed
    /// from the caller's point of view.
    ///
    /// # Arguments
    /// * `asset` - Handle returned by `fetch_asset`
    /// * `location` - New coordinates
    async fn set_location(&self, asset: AssetHandle, location: GeoLocation) -> CoreResult<()>;
}
