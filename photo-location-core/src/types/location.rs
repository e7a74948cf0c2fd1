//! 位置与请求相关类型定义

use crate::config::CoordinatePolicy;
use crate::error::{CoreError, CoreResult};

/// 地理坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// 纬度 [-90, 90]
    pub latitude: f64,
    /// 经度 [-180, 180]
    pub longitude: f64,
}

impl GeoLocation {
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MAX_LONGITUDE: f64 = 180.0;

    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both coordinates are neither NaN nor infinite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Both coordinates lie within geographic bounds
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        (-Self::MAX_LATITUDE..=Self::MAX_LATITUDE).contains(&self.latitude)
            && (-Self::MAX_LONGITUDE..=Self::MAX_LONGITUDE).contains(&self.longitude)
    }
}

/// 位置更新请求
///
/// Immutable once constructed; consumed by the handler.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    local_id: String,
    location: GeoLocation,
}

impl UpdateRequest {
    #[must_use]
    pub fn new(local_id: impl Into<String>, location: GeoLocation) -> Self {
        Self {
            local_id: local_id.into(),
            location,
        }
    }

    /// Platform-issued asset identifier
    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    /// 校验请求
    ///
    /// The identifier must contain non-whitespace characters and the
    /// coordinates must be finite. Under [`CoordinatePolicy::Strict`] the
    /// coordinates must also be within geographic bounds.
    pub fn validate(&self, policy: CoordinatePolicy) -> CoreResult<()> {
        if self.local_id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "asset identifier is empty".to_string(),
            ));
        }

        if !self.location.is_finite() {
            return Err(CoreError::InvalidInput(format!(
                "coordinates are not finite: ({}, {})",
                self.location.latitude, self.location.longitude
            )));
        }

        if policy == CoordinatePolicy::Strict && !self.location.is_within_bounds() {
            return Err(CoreError::InvalidInput(format!(
                "coordinates out of range: ({}, {})",
                self.location.latitude, self.location.longitude
            )));
        }

        Ok(())
    }
}

/// Store-resolved reference to exactly one asset
///
/// Only lives for a single mutation attempt: the store hands it out from a
/// lookup and takes it back by value when writing.
#[derive(Debug, PartialEq, Eq)]
pub struct AssetHandle {
    local_id: String,
}

impl AssetHandle {
    #[must_use]
    pub fn new(local_id: impl Into<String>) -> Self {
        Self {
            local_id: local_id.into(),
        }
    }

    pub fn local_id(&self) -> &str {
        &self.local_id
    }
}
