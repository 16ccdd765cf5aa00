//! Command line interface for the spot price tracker.
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use spot_data::providers::{CoinGeckoProvider, DEFAULT_API_URL};
use spot_data::HistoryStore;
use spot_domain::metrics::summarize;
use spot_domain::StatsScope;
use spot_tracker::prelude::*;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "spot-tracker")]
#[command(about = "Spot price tracker with persistent observation history", long_about = None)]
struct Cli {
    /// Asset identifier (CoinGecko coin id, e.g. bitcoin)
    #[arg(short, long, default_value = "bitcoin")]
    asset: String,

    /// Quote currency
    #[arg(long, default_value = "usd")]
    vs_currency: String,

    /// Path to the JSON history file
    #[arg(long, default_value = "price_history.json")]
    history_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the price on a schedule and summarize at the end
    Track {
        /// Seconds between fetch attempts
        #[arg(short, long, default_value_t = 300)]
        interval: u64,

        /// Total tracking duration in seconds
        #[arg(short, long, default_value_t = 3600)]
        duration: u64,

        /// Which slice of the history the summary statistics cover
        #[arg(long, value_enum, default_value_t = ScopeArg::Lifetime)]
        scope: ScopeArg,

        /// Maximum rate-limit retries per fetch attempt
        #[arg(long, default_value_t = 5)]
        max_retries: u32,
    },
    /// Print summary statistics for the stored history without fetching
    Stats,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScopeArg {
    /// Every observation in the persisted history
    Lifetime,
    /// Only observations recorded by this run
    Session,
}

impl From<ScopeArg> for StatsScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Lifetime => StatsScope::Lifetime,
            ScopeArg::Session => StatsScope::Session,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let api_url = env::var("COINGECKO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    match cli.command {
        None => {
            // Default invocation: one fetch-and-report cycle.
            let config = TrackerConfig {
                asset: cli.asset,
                vs_currency: cli.vs_currency,
                ..Default::default()
            };
            let store = HistoryStore::load(&cli.history_file);
            let mut tracker =
                PriceTracker::new(CoinGeckoProvider::new(&api_url), store, config);

            tracker.fetch_once().await;
        }
        Some(Commands::Track {
            interval,
            duration,
            scope,
            max_retries,
        }) => {
            let config = TrackerConfig {
                asset: cli.asset,
                vs_currency: cli.vs_currency,
                interval: Duration::from_secs(interval),
                duration: Duration::from_secs(duration),
                retry: RetryPolicy {
                    max_retries,
                    ..Default::default()
                },
                stats_scope: scope.into(),
            };
            let store = HistoryStore::load(&cli.history_file);
            let mut tracker =
                PriceTracker::new(CoinGeckoProvider::new(&api_url), store, config);

            tracker.track_price_changes().await;
        }
        Some(Commands::Stats) => {
            let store = HistoryStore::load(&cli.history_file);

            match summarize(store.observations()) {
                Some(summary) => {
                    println!("{}", format_summary(&cli.vs_currency, &summary));
                }
                None => {
                    println!(
                        "Not enough data in {} for summary statistics (need at least 2 points)",
                        cli.history_file.display()
                    );
                }
            }
        }
    }

    Ok(())
}
