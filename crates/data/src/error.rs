use thiserror::Error;

/// Errors raised by price providers and the history store.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network-level failure reaching the price API.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response other than a rate limit.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnosis.
        body: String,
    },

    /// HTTP 429 — not terminal, the caller may retry after a backoff.
    #[error("rate limited by upstream (retry after {retry_after:?}s)")]
    RateLimited {
        /// Server-supplied wait in seconds, from the Retry-After header.
        retry_after: Option<u64>,
    },

    /// The requested asset key was absent from an otherwise successful
    /// response.
    #[error("asset `{asset}` missing from response: {payload}")]
    AssetMissing {
        /// Asset identifier that was requested.
        asset: String,
        /// Raw payload, for diagnosis.
        payload: String,
    },

    /// History file could not be read or written.
    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// History file or response payload could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DataError {
    /// Whether the error is a rate-limit signal rather than a terminal
    /// failure.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, DataError::RateLimited { .. })
    }
}
