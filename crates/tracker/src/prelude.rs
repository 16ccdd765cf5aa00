//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use spot_tracker::prelude::*;
//! ```

pub use crate::config::TrackerConfig;
pub use crate::report::{format_observation, format_summary};
pub use crate::retry::RetryPolicy;
pub use crate::tracker::PriceTracker;
