//! HTTP client for the product optimization service.
//!
//! Wraps `reqwest` with service-specific error handling and typed response
//! deserialization. All operations are asynchronous and mutate no local
//! state; callers own the returned values.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{FeedType, ServiceStatus};
