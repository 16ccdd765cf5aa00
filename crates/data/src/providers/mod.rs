//! Price provider abstraction and implementations.

mod coingecko;

pub use coingecko::{CoinGeckoProvider, DEFAULT_API_URL};

use crate::error::DataError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// A single spot quote as reported by a price API, before being stamped
/// into an [`Observation`](spot_domain::Observation).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Spot price in quote-currency units.
    pub price: Decimal,
    /// Market capitalization, when reported.
    pub market_cap: Option<Decimal>,
    /// 24-hour change percentage, when reported.
    pub change_24h: Option<Decimal>,
}

/// Source of spot quotes for one asset/quote-currency pair.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetches the current quote for `asset` denominated in `vs_currency`.
    ///
    /// # Errors
    /// Returns [`DataError::RateLimited`] on HTTP 429 (the caller decides
    /// whether to back off and retry), [`DataError::AssetMissing`] when a
    /// successful response does not contain the requested asset, and a
    /// transport or status error otherwise.
    async fn fetch_quote(&self, asset: &str, vs_currency: &str) -> Result<PriceQuote, DataError>;
}
