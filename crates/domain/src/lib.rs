//! Core domain types for the spot price tracker.
//!
//! This crate holds the pure data model shared by the rest of the
//! workspace: price observations, summary statistics, and the
//! configuration enums that select between them. It has no I/O.

pub mod entities;
pub mod enums;
pub mod metrics;
pub mod value_objects;

pub use entities::Observation;
pub use enums::StatsScope;
pub use value_objects::PriceSummary;
