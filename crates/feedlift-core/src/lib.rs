//! Core data model, batch history, and configuration for feedlift.
//!
//! This crate has no network or rendering dependencies: it defines the
//! product and batch types exchanged with the optimization service, the
//! in-memory history of completed batches with its derived dashboard
//! aggregates, and environment-driven configuration.

pub mod config;
pub mod history;
pub mod product;
pub mod template;

pub use config::{load_config, ConfigError, FeedliftConfig};
pub use history::{BatchHistory, DashboardAggregates, StoredBatch};
pub use product::{BatchResult, BatchSummary, FaqEntry, ItemFailure, OptimizedProduct, ProductInput};
