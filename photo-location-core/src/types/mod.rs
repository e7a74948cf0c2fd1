//! 类型定义模块

mod location;
mod outcome;

pub use location::{AssetHandle, GeoLocation, UpdateRequest};
pub use outcome::UpdateOutcome;
