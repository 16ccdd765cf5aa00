//! Polling orchestration for the spot price tracker.
//!
//! This crate provides the tracking loop that ties the data layer
//! together:
//! - Bounded rate-limit retry with server-directed backoff
//! - The single-fetch state machine (request, back off, append, report)
//! - Interval scheduling over a fixed time budget
//! - Summary statistics at the end of a run

/// Prelude module for convenient imports.
pub mod prelude;

/// Tracker configuration.
pub mod config;
/// Report formatting for console output.
pub mod report;
/// Rate-limit retry policy.
pub mod retry;
/// The price tracker and its scheduling loop.
pub mod tracker;

pub use config::TrackerConfig;
pub use retry::RetryPolicy;
pub use tracker::PriceTracker;
