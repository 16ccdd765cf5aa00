//! CoinGecko `/simple/price` provider.

use crate::error::DataError;
use crate::providers::{PriceProvider, PriceQuote};
use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::debug;

/// Public CoinGecko API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

const USER_AGENT: &str = concat!("spot-tracker/", env!("CARGO_PKG_VERSION"));

/// Spot quote provider backed by the CoinGecko simple-price endpoint.
pub struct CoinGeckoProvider {
    base_url: String,
    client: Client,
}

impl CoinGeckoProvider {
    /// Creates a provider against `base_url` (no trailing slash needed).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    async fn fetch_quote(&self, asset: &str, vs_currency: &str) -> Result<PriceQuote, DataError> {
        let url = format!("{}/simple/price", self.base_url);
        debug!(url = %url, asset, vs_currency, "Fetching spot quote");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("ids", asset),
                ("vs_currencies", vs_currency),
                ("include_market_cap", "true"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        let status = resp.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            return Err(DataError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DataError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = resp.json().await?;
        parse_quote(&payload, asset, vs_currency)
    }
}

/// Extracts a quote for `asset` from a simple-price payload.
///
/// The payload is keyed by asset id; each entry holds the price under the
/// quote currency plus optional `{vs}_market_cap` and `{vs}_24h_change`
/// fields. A payload without the requested asset (or without a price) is a
/// shape error reported with the raw payload.
fn parse_quote(
    payload: &serde_json::Value,
    asset: &str,
    vs_currency: &str,
) -> Result<PriceQuote, DataError> {
    let entry = payload
        .get(asset)
        .ok_or_else(|| DataError::AssetMissing {
            asset: asset.to_string(),
            payload: payload.to_string(),
        })?;

    let price = decimal_field(entry, vs_currency).ok_or_else(|| DataError::AssetMissing {
        asset: asset.to_string(),
        payload: payload.to_string(),
    })?;

    Ok(PriceQuote {
        price,
        market_cap: decimal_field(entry, &format!("{vs_currency}_market_cap")),
        change_24h: decimal_field(entry, &format!("{vs_currency}_24h_change")),
    })
}

fn decimal_field(entry: &serde_json::Value, key: &str) -> Option<Decimal> {
    entry
        .get(key)
        .filter(|v| !v.is_null())
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}
