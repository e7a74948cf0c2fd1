//! Platform abstraction trait definition

mod asset_store;
mod completion_context;

pub use asset_store::AssetStore;
pub use completion_context::{
    main_queue, CompletionContext, CompletionTask, ImmediateContext, MainQueue, MainQueueRunner,
    RuntimeContext,
};
