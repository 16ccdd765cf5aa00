//! External-world adapters for the spot price tracker.
//!
//! This crate provides:
//! - File-backed persistence for the observation history
//! - The price provider abstraction and its CoinGecko implementation
//! - The error taxonomy shared by both

pub mod error;
pub mod history;
pub mod providers;

pub use error::DataError;
pub use history::HistoryStore;
pub use providers::{PriceProvider, PriceQuote};
