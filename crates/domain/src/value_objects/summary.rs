use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary statistics over a sequence of price observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Lowest observed price.
    pub min: Decimal,
    /// Highest observed price.
    pub max: Decimal,
    /// Arithmetic mean of observed prices.
    pub average: Decimal,
    /// Spread between highest and lowest observed price.
    pub range: Decimal,
    /// Number of observations summarized.
    pub count: usize,
}
