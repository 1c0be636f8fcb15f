//! Generation request model.
//!
//! This module defines the age range and record count that drive dataset
//! generation, including the lenient numeric coercion applied to the count.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Age interval requested for generated employees, in whole years.
///
/// The interval is asymmetric: `min` is inclusive and `max` is exclusive.
/// An inverted range is not an error; [`AgeRange::normalized`] swaps the
/// bounds before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Lowest age a generated employee may have, inclusive.
    pub min: i32,
    /// Upper age bound, exclusive.
    pub max: i32,
}

impl AgeRange {
    /// Returns the range with bounds swapped when `min` exceeds `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_stats::models::AgeRange;
    ///
    /// let inverted = AgeRange { min: 40, max: 20 };
    /// assert_eq!(inverted.normalized(), AgeRange { min: 20, max: 40 });
    /// ```
    pub fn normalized(self) -> Self {
        if self.min > self.max {
            AgeRange {
                min: self.max,
                max: self.min,
            }
        } else {
            self
        }
    }
}

/// Parameters for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Requested number of records. Deserialization coerces non-numeric or
    /// missing values to 0 and floors fractional values; negative counts
    /// yield an empty dataset at generation time.
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: i64,
    /// Age interval the generated employees must fall into.
    pub age: AgeRange,
}

/// Coerces the count field from loosely typed input.
///
/// Numbers pass through (fractional values floor), numeric strings parse,
/// and everything else, including non-finite values, becomes 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let numeric = match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(floor_to_i64)),
        Value::String(text) => text.trim().parse::<f64>().ok().map(floor_to_i64),
        _ => None,
    };
    Ok(numeric.unwrap_or(0))
}

fn floor_to_i64(value: f64) -> i64 {
    if value.is_finite() {
        value.floor() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalized_keeps_ordered_range() {
        let range = AgeRange { min: 19, max: 35 };
        assert_eq!(range.normalized(), range);
    }

    #[test]
    fn test_normalized_swaps_inverted_range() {
        let range = AgeRange { min: 35, max: 19 };
        assert_eq!(range.normalized(), AgeRange { min: 19, max: 35 });
    }

    #[test]
    fn test_normalized_keeps_equal_bounds() {
        let range = AgeRange { min: 30, max: 30 };
        assert_eq!(range.normalized(), range);
    }

    #[test]
    fn test_deserialize_integer_count() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"count": 50, "age": {"min": 19, "max": 35}})).unwrap();

        assert_eq!(request.count, 50);
        assert_eq!(request.age, AgeRange { min: 19, max: 35 });
    }

    #[test]
    fn test_deserialize_numeric_string_count() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"count": "25", "age": {"min": 19, "max": 35}})).unwrap();

        assert_eq!(request.count, 25);
    }

    #[test]
    fn test_deserialize_fractional_count_floors() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"count": 3.7, "age": {"min": 19, "max": 35}})).unwrap();

        assert_eq!(request.count, 3);
    }

    #[test]
    fn test_deserialize_non_numeric_count_becomes_zero() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"count": "abc", "age": {"min": 19, "max": 35}})).unwrap();

        assert_eq!(request.count, 0);
    }

    #[test]
    fn test_deserialize_missing_count_becomes_zero() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"age": {"min": 19, "max": 35}})).unwrap();

        assert_eq!(request.count, 0);
    }

    #[test]
    fn test_deserialize_null_count_becomes_zero() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"count": null, "age": {"min": 19, "max": 35}})).unwrap();

        assert_eq!(request.count, 0);
    }

    #[test]
    fn test_deserialize_boolean_count_becomes_zero() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"count": true, "age": {"min": 19, "max": 35}})).unwrap();

        assert_eq!(request.count, 0);
    }

    #[test]
    fn test_deserialize_negative_count_preserved() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"count": -5, "age": {"min": 19, "max": 35}})).unwrap();

        assert_eq!(request.count, -5);
    }

    #[test]
    fn test_deserialize_infinite_string_count_becomes_zero() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"count": "inf", "age": {"min": 19, "max": 35}})).unwrap();

        assert_eq!(request.count, 0);
    }

    #[test]
    fn test_deserialize_rejects_missing_age() {
        let result = serde_json::from_value::<GenerationRequest>(json!({"count": 5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_round_trip() {
        let request = GenerationRequest {
            count: 10,
            age: AgeRange { min: 19, max: 35 },
        };
        let json = serde_json::to_string(&request).unwrap();

        let deserialized: GenerationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }
}
