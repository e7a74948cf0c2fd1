//! Photo Location Core Library
//!
//! Sets the geographic location of a single photo asset held by a
//! platform-managed asset store, and reports a definitive outcome:
//! - Request validation (`UpdateRequest`, `HandlerConfig`)
//! - Asset resolution and mutation (`LocationUpdateService`)
//! - Outcome delivery on a caller-designated context (`CompletionContext`)
//!
//! The asset store is abstracted through traits so each platform can
//! inject its own adapter.

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{CoordinatePolicy, HandlerConfig};
pub use error::{CoreError, CoreResult};
pub use services::{LocationUpdateService, ServiceContext};
pub use traits::{AssetStore, CompletionContext};
pub use types::{AssetHandle, GeoLocation, UpdateOutcome, UpdateRequest};
