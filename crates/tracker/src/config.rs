//! Tracker configuration.

use crate::retry::RetryPolicy;
use spot_domain::StatsScope;
use std::time::Duration;

/// Configuration for a tracking run.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Asset identifier as understood by the price API (e.g. "bitcoin").
    pub asset: String,
    /// Quote currency (e.g. "usd").
    pub vs_currency: String,
    /// Time between scheduled fetch attempts.
    pub interval: Duration,
    /// Total time budget for the tracking run.
    pub duration: Duration,
    /// Rate-limit retry policy.
    pub retry: RetryPolicy,
    /// Which slice of the history summary statistics cover.
    pub stats_scope: StatsScope,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            asset: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
            interval: Duration::from_secs(300),
            duration: Duration::from_secs(3600),
            retry: RetryPolicy::default(),
            stats_scope: StatsScope::default(),
        }
    }
}

impl TrackerConfig {
    /// Number of scheduled fetch attempts for this run.
    ///
    /// Integer floor division; an interval longer than the duration yields
    /// zero attempts. A zero interval is treated as a zero budget rather
    /// than dividing by zero.
    #[must_use]
    pub fn attempt_budget(&self) -> u64 {
        let interval = self.interval.as_secs();
        if interval == 0 {
            return 0;
        }
        self.duration.as_secs() / interval
    }
}
