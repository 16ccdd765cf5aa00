//! The price tracker and its scheduling loop.

use crate::config::TrackerConfig;
use crate::report;
use spot_data::{DataError, HistoryStore, PriceProvider};
use spot_domain::metrics::summarize;
use spot_domain::{Observation, PriceSummary, StatsScope};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// Polls a price provider on a schedule and records observations.
///
/// One fetch attempt walks a small state machine: issue the request; on a
/// rate limit, suspend for the server-directed (or default) backoff and
/// reissue, up to the policy ceiling; on success, append the observation
/// to the history store and emit a report; on any other failure, report
/// and produce nothing.
pub struct PriceTracker<P> {
    provider: P,
    store: HistoryStore,
    config: TrackerConfig,
}

impl<P: PriceProvider> PriceTracker<P> {
    /// Creates a tracker over an explicit provider, store, and config.
    #[must_use]
    pub fn new(provider: P, store: HistoryStore, config: TrackerConfig) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// Performs one fetch-and-report cycle.
    ///
    /// Returns the recorded observation, or `None` when the attempt failed
    /// (transport error, malformed payload, or retry ceiling exhausted).
    /// Rate-limit backoffs happen inside this call and an eventual success
    /// still counts as this one attempt.
    pub async fn fetch_once(&mut self) -> Option<Observation> {
        let asset = self.config.asset.clone();
        let vs_currency = self.config.vs_currency.clone();
        let mut rate_limit_retries = 0u32;

        loop {
            match self.provider.fetch_quote(&asset, &vs_currency).await {
                Ok(quote) => {
                    let observation =
                        Observation::captured_now(quote.price, quote.market_cap, quote.change_24h);
                    self.store.append_and_save(observation.clone());

                    println!("{}", report::format_observation(&asset, &vs_currency, &observation));
                    info!(
                        asset = %asset,
                        price = %observation.price,
                        "Recorded observation"
                    );
                    return Some(observation);
                }
                Err(DataError::RateLimited { retry_after }) => {
                    if rate_limit_retries >= self.config.retry.max_retries {
                        error!(
                            asset = %asset,
                            retries = rate_limit_retries,
                            "Rate-limit retry ceiling exhausted, giving up on this attempt"
                        );
                        return None;
                    }

                    let backoff = self.config.retry.backoff_for(retry_after);
                    warn!(
                        asset = %asset,
                        wait_secs = backoff.as_secs(),
                        "Rate limited, backing off before reissuing"
                    );
                    sleep(backoff).await;
                    rate_limit_retries += 1;
                }
                Err(e) => {
                    error!(asset = %asset, error = %e, "Fetch failed, no observation this round");
                    return None;
                }
            }
        }
    }

    /// Tracks price changes over the configured time budget.
    ///
    /// Runs `duration / interval` (floor) sequential fetch attempts with an
    /// inter-attempt wait after each but the last, then returns summary
    /// statistics when at least two observations exist in the configured
    /// scope. A failed attempt consumes its slot; the loop simply proceeds
    /// to the next scheduled attempt.
    pub async fn track_price_changes(&mut self) -> Option<PriceSummary> {
        let num_checks = self.config.attempt_budget();
        let session_start = self.store.len();

        info!(
            asset = %self.config.asset,
            interval_secs = self.config.interval.as_secs(),
            duration_secs = self.config.duration.as_secs(),
            checks = num_checks,
            "Starting tracking run"
        );

        for i in 0..num_checks {
            info!(check = i + 1, total = num_checks, "Scheduled fetch");
            self.fetch_once().await;

            if i < num_checks - 1 {
                debug!(
                    wait_secs = self.config.interval.as_secs(),
                    "Waiting until next check"
                );
                sleep(self.config.interval).await;
            }
        }

        info!(points = self.store.len(), "Price tracking complete");

        let observations = match self.config.stats_scope {
            StatsScope::Lifetime => self.store.observations(),
            StatsScope::Session => &self.store.observations()[session_start..],
        };

        let summary = summarize(observations);
        if let Some(s) = &summary {
            println!("{}", report::format_summary(&self.config.vs_currency, s));
        }
        summary
    }

    /// The recorded history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Observation] {
        self.store.observations()
    }

    /// The tracker configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
