//! Report formatting for console output.
//!
//! Human-readable text only; not machine-parseable and not part of any
//! contract. Prices are rounded here and nowhere else.

use spot_domain::{Observation, PriceSummary};

const BANNER: &str = "══════════════════════════════════════════════════";

/// Formats a single observation as a banner report.
#[must_use]
pub fn format_observation(asset: &str, vs_currency: &str, observation: &Observation) -> String {
    let vs = vs_currency.to_uppercase();
    let mut out = String::new();

    out.push_str(&format!("\n{BANNER}\n"));
    out.push_str(&format!("{} price ({})\n", asset, observation.timestamp));
    out.push_str(&format!("{BANNER}\n"));
    out.push_str(&format!("Price: ${:.2} {}\n", observation.price, vs));

    if let Some(market_cap) = observation.market_cap {
        out.push_str(&format!("Market Cap: ${market_cap:.2} {vs}\n"));
    }

    if let Some(change) = observation.change_24h {
        let arrow = if change > rust_decimal::Decimal::ZERO {
            "📈"
        } else {
            "📉"
        };
        let sign = if change.is_sign_positive() { "+" } else { "" };
        out.push_str(&format!("24h Change: {sign}{change:.2}% {arrow}\n"));
    }

    out.push_str(BANNER);
    out
}

/// Formats end-of-run summary statistics.
#[must_use]
pub fn format_summary(vs_currency: &str, summary: &PriceSummary) -> String {
    let vs = vs_currency.to_uppercase();
    format!(
        "\nSummary Statistics ({} points)\n\
         Min Price: ${:.2} {vs}\n\
         Max Price: ${:.2} {vs}\n\
         Avg Price: ${:.2} {vs}\n\
         Price Range: ${:.2} {vs}",
        summary.count, summary.min, summary.max, summary.average, summary.range,
    )
}
