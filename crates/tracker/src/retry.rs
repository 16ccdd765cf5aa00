//! Rate-limit retry policy.

use std::time::Duration;

/// Policy for retrying a fetch after an upstream rate limit.
///
/// The retry count is explicitly bounded so a persistently limiting
/// upstream cannot wedge the tracker in an infinite wait.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum rate-limit retries per fetch attempt (not counting the
    /// initial request).
    pub max_retries: u32,
    /// Backoff applied when the server supplies no Retry-After value.
    pub default_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            default_backoff: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// The backoff to apply for a rate-limit response.
    ///
    /// Server-directed when the response carried a Retry-After value (in
    /// seconds), otherwise the configured default.
    #[must_use]
    pub fn backoff_for(&self, retry_after: Option<u64>) -> Duration {
        retry_after
            .map(Duration::from_secs)
            .unwrap_or(self.default_backoff)
    }
}
