//! Birth instant synthesis for a requested age range.
//!
//! Given an age interval `[min, max)` in whole years and a reference
//! instant, this module computes the window of epoch milliseconds whose
//! ages fall inside the interval and draws uniformly from it.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{AgeRange, MILLIS_PER_YEAR};

/// Returns the inclusive epoch-millisecond bounds for birth instants
/// satisfying `range` at `now`.
///
/// The range is normalized first, so inverted bounds behave like their
/// ordered form. For `min < max`, every millisecond in the window yields a
/// fractional age in `[min, max)`:
///
/// - the lower bound is `floor(now - max * year) + 1`, one millisecond past
///   the oldest admissible instant, which keeps `max` exclusive;
/// - the upper bound is `floor(now - min * year)`, which keeps `min`
///   inclusive.
///
/// If rounding or a degenerate `min == max` range inverts the bounds, they
/// are swapped so the window is never empty. Both bounds are clamped to
/// the instant range `chrono` can represent.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use employee_stats::generator::birth_window;
/// use employee_stats::models::AgeRange;
///
/// let now = DateTime::from_timestamp_millis(1_756_000_000_000).unwrap();
/// let (lower, upper) = birth_window(AgeRange { min: 20, max: 30 }, now);
/// assert_eq!(lower, 809_272_000_001);
/// assert_eq!(upper, 1_124_848_000_000);
/// ```
pub fn birth_window(range: AgeRange, now: DateTime<Utc>) -> (i64, i64) {
    let range = range.normalized();
    let now_ms = now.timestamp_millis() as f64;

    let oldest_exclusive = now_ms - f64::from(range.max) * MILLIS_PER_YEAR;
    let youngest_inclusive = now_ms - f64::from(range.min) * MILLIS_PER_YEAR;

    let lower = clamp_to_instant_range((oldest_exclusive.floor() as i64).saturating_add(1));
    let upper = clamp_to_instant_range(youngest_inclusive.floor() as i64);

    (lower.min(upper), lower.max(upper))
}

/// Draws a uniform birth instant whose fractional age at `now` satisfies
/// `range`.
pub fn random_birthdate<R: Rng>(range: AgeRange, now: DateTime<Utc>, rng: &mut R) -> DateTime<Utc> {
    let (lower, upper) = birth_window(range, now);
    let birth_ms = rng.gen_range(lower..=upper);
    DateTime::from_timestamp_millis(birth_ms)
        .expect("birth window is clamped to the representable instant range")
}

fn clamp_to_instant_range(ms: i64) -> i64 {
    ms.clamp(
        DateTime::<Utc>::MIN_UTC.timestamp_millis(),
        DateTime::<Utc>::MAX_UTC.timestamp_millis(),
    )
}
