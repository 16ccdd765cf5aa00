use crate::entities::Observation;
use crate::value_objects::PriceSummary;
use rust_decimal::Decimal;

/// Computes summary statistics over a sequence of observations.
///
/// Returns `None` when fewer than two observations exist; a single data
/// point has no meaningful spread.
pub fn summarize(observations: &[Observation]) -> Option<PriceSummary> {
    if observations.len() < 2 {
        return None;
    }

    let mut min = observations[0].price;
    let mut max = observations[0].price;
    let mut sum = Decimal::ZERO;

    for obs in observations {
        if obs.price < min {
            min = obs.price;
        }
        if obs.price > max {
            max = obs.price;
        }
        sum += obs.price;
    }

    let count = observations.len();
    Some(PriceSummary {
        min,
        max,
        average: sum / Decimal::from(count as u64),
        range: max - min,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn obs(price: Decimal) -> Observation {
        Observation::new(Utc::now(), price, None, None)
    }

    #[test]
    fn test_summarize_three_points() {
        let history = vec![obs(dec!(100)), obs(dec!(200)), obs(dec!(300))];

        let summary = summarize(&history).unwrap();
        assert_eq!(summary.min, dec!(100));
        assert_eq!(summary.max, dec!(300));
        assert_eq!(summary.average, dec!(200));
        assert_eq!(summary.range, dec!(200));
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_summarize_needs_two_points() {
        assert!(summarize(&[]).is_none());
        assert!(summarize(&[obs(dec!(100))]).is_none());
        assert!(summarize(&[obs(dec!(100)), obs(dec!(100))]).is_some());
    }

    #[test]
    fn test_summarize_exact_prices_no_rounding() {
        let history = vec![obs(dec!(0.000001)), obs(dec!(0.000003))];

        let summary = summarize(&history).unwrap();
        assert_eq!(summary.average, dec!(0.000002));
        assert_eq!(summary.range, dec!(0.000002));
    }
}
