use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One timestamped price record for a single asset/quote-currency pair.
///
/// Immutable once created; prices are stored exactly as fetched, with no
/// rounding (rounding happens only at display time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Capture time, serialized as an ISO-8601 string.
    pub timestamp: DateTime<Utc>,
    /// Spot price in quote-currency units.
    pub price: Decimal,
    /// Market capitalization in quote-currency units, when the source
    /// reported one.
    pub market_cap: Option<Decimal>,
    /// 24-hour change as a signed percentage, when the source reported one.
    pub change_24h: Option<Decimal>,
}

impl Observation {
    pub fn new(
        timestamp: DateTime<Utc>,
        price: Decimal,
        market_cap: Option<Decimal>,
        change_24h: Option<Decimal>,
    ) -> Self {
        Self {
            timestamp,
            price,
            market_cap,
            change_24h,
        }
    }

    /// Creates an observation stamped with the current time.
    pub fn captured_now(
        price: Decimal,
        market_cap: Option<Decimal>,
        change_24h: Option<Decimal>,
    ) -> Self {
        Self::new(Utc::now(), price, market_cap, change_24h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_observation_serde_preserves_fields() {
        let obs = Observation::new(
            "2025-06-01T12:00:00Z".parse().unwrap(),
            dec!(43250.17),
            Some(dec!(851000000000)),
            Some(dec!(-2.35)),
        );

        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obs);
        assert_eq!(back.price, dec!(43250.17));
    }

    #[test]
    fn test_observation_optional_fields_roundtrip_as_null() {
        let obs = Observation::new(
            "2025-06-01T12:00:00Z".parse().unwrap(),
            dec!(100),
            None,
            None,
        );

        let json = serde_json::to_string(&obs).unwrap();
        assert!(json.contains("\"market_cap\":null"));

        let back: Observation = serde_json::from_str(&json).unwrap();
        assert!(back.market_cap.is_none());
        assert!(back.change_24h.is_none());
    }
}
