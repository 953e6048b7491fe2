// Application Layer - Dispatch, Normalization, Gateway Operations

pub mod dispatch;
pub mod gateway;
pub mod normalize;
pub mod ui;

#[cfg(test)]
mod dispatch_test;

pub use dispatch::Dispatcher;
pub use gateway::{GatewayClient, SearchQuery, TaskSubmission, PAGE_LIMIT};
pub use normalize::ErrorNormalizer;
pub use ui::UiSession;
