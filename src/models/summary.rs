//! Statistics summary model.
//!
//! This module contains the [`StatisticsSummary`] type produced by the
//! aggregation pass. Summarizing an empty dataset yields the all-zero
//! default value.

use serde::{Deserialize, Serialize};

use super::Employee;

/// Aggregated statistics over one employee dataset.
///
/// Ages are measured at the instant the summary is computed. The four
/// workload counters only cover the generated workload set, so for
/// externally constructed records carrying other workload values they are
/// not guaranteed to sum to `total`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Number of records in the input dataset.
    pub total: u64,
    /// Number of records with a workload of 10 hours.
    pub workload10: u64,
    /// Number of records with a workload of 20 hours.
    pub workload20: u64,
    /// Number of records with a workload of 30 hours.
    pub workload30: u64,
    /// Number of records with a workload of 40 hours.
    pub workload40: u64,
    /// Mean age in years, rounded to one decimal half away from zero.
    pub average_age: f64,
    /// Lowest whole-year age in the dataset.
    pub min_age: i64,
    /// Highest whole-year age in the dataset.
    pub max_age: i64,
    /// Median of the fractional ages, floored to whole years.
    pub median_age: i64,
    /// Median workload; not floored, so an even-sized dataset may produce
    /// a half value such as 25.5.
    pub median_workload: f64,
    /// Mean workload of female records, rounded to one decimal half away
    /// from zero; 0 when the dataset contains no women.
    pub average_women_workload: f64,
    /// Fresh copy of the dataset, stably sorted ascending by workload.
    /// Records with equal workloads keep their input order.
    pub sorted_by_workload: Vec<Employee>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use chrono::DateTime;

    #[test]
    fn test_default_is_all_zero() {
        let summary = StatisticsSummary::default();

        assert_eq!(summary.total, 0);
        assert_eq!(summary.workload10, 0);
        assert_eq!(summary.workload20, 0);
        assert_eq!(summary.workload30, 0);
        assert_eq!(summary.workload40, 0);
        assert_eq!(summary.average_age, 0.0);
        assert_eq!(summary.min_age, 0);
        assert_eq!(summary.max_age, 0);
        assert_eq!(summary.median_age, 0);
        assert_eq!(summary.median_workload, 0.0);
        assert_eq!(summary.average_women_workload, 0.0);
        assert!(summary.sorted_by_workload.is_empty());
    }

    #[test]
    fn test_summary_round_trip() {
        let summary = StatisticsSummary {
            total: 2,
            workload20: 1,
            workload40: 1,
            average_age: 31.5,
            min_age: 28,
            max_age: 35,
            median_age: 31,
            median_workload: 30.0,
            average_women_workload: 20.0,
            sorted_by_workload: vec![
                Employee {
                    gender: Gender::Female,
                    birthdate: DateTime::from_timestamp_millis(890_000_000_000).unwrap(),
                    name: "Eva".to_string(),
                    surname: "Malá".to_string(),
                    workload: 20,
                },
                Employee {
                    gender: Gender::Male,
                    birthdate: DateTime::from_timestamp_millis(650_000_000_000).unwrap(),
                    name: "Jan".to_string(),
                    surname: "Beran".to_string(),
                    workload: 40,
                },
            ],
            ..StatisticsSummary::default()
        };
        let json = serde_json::to_string(&summary).unwrap();

        let deserialized: StatisticsSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
