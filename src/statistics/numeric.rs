//! Shared numeric helpers for the statistics pass.
//!
//! This module provides the median of a numeric sequence and the
//! one-decimal rounding applied to averages.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Returns the median of `values`, or 0 for an empty slice.
///
/// The input does not need to be sorted. For an odd number of values the
/// median is the middle element of the sorted sequence; for an even number
/// it is the arithmetic mean of the two middle elements.
///
/// # Examples
///
/// ```
/// use employee_stats::statistics::median;
///
/// assert_eq!(median(&[30.0, 10.0, 20.0]), 20.0);
/// assert_eq!(median(&[10.0, 20.0, 30.0, 40.0]), 25.0);
/// assert_eq!(median(&[]), 0.0);
/// ```
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Rounds `value` to one decimal place, half away from zero.
///
/// The value is snapped to its shortest decimal form before rounding, so a
/// binary float stored just under a midpoint (34.45 is held as 34.4499…)
/// still rounds the way its decimal rendering reads: 34.45 gives 34.5,
/// while a genuine 34.4499 gives 34.4.
///
/// # Examples
///
/// ```
/// use employee_stats::statistics::round_to_one_decimal;
///
/// assert_eq!(round_to_one_decimal(34.45), 34.5);
/// assert_eq!(round_to_one_decimal(34.4499), 34.4);
/// assert_eq!(round_to_one_decimal(2.25), 2.3);
/// ```
pub fn round_to_one_decimal(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|decimal| decimal.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|decimal| decimal.to_f64())
        .unwrap_or(value)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn median_lies_within_input_bounds(
            values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..200),
        ) {
            let result = median(&values);
            let lowest = values.iter().copied().fold(f64::INFINITY, f64::min);
            let highest = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(result >= lowest);
            prop_assert!(result <= highest);
        }

        #[test]
        fn median_of_singleton_is_the_value(value in -1_000_000.0f64..1_000_000.0) {
            prop_assert_eq!(median(&[value]), value);
        }

        #[test]
        fn rounding_is_idempotent(value in -10_000.0f64..10_000.0) {
            let once = round_to_one_decimal(value);
            prop_assert_eq!(round_to_one_decimal(once), once);
        }

        #[test]
        fn rounding_moves_less_than_half_a_step(value in -10_000.0f64..10_000.0) {
            let rounded = round_to_one_decimal(value);
            prop_assert!((rounded - value).abs() < 0.051);
        }
    }
}
