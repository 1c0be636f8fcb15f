//! Statistics aggregation for employee datasets.
//!
//! This module computes the full statistics summary for a dataset: one
//! accumulation pass collects the workload tier counters, age figures and
//! women's workload totals, a post-pass derives the averages and medians,
//! and a stable sort produces the workload-ordered view.

mod aggregate;
mod numeric;
mod sort;

pub use numeric::{median, round_to_one_decimal};
pub use sort::sorted_by_workload;

use chrono::{DateTime, Utc};

use crate::models::{Employee, StatisticsSummary};

use aggregate::Aggregates;

/// Computes the statistics summary for `employees`, measuring ages at
/// `now`.
///
/// The input is never modified; the sorted view on the summary is a fresh
/// copy. An empty dataset produces [`StatisticsSummary::default`].
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use employee_stats::models::StatisticsSummary;
/// use employee_stats::statistics::summarize;
///
/// let summary = summarize(&[], Utc::now());
/// assert_eq!(summary, StatisticsSummary::default());
/// ```
pub fn summarize(employees: &[Employee], now: DateTime<Utc>) -> StatisticsSummary {
    let aggregates = Aggregates::collect(employees, now);
    let total = employees.len() as u64;

    let average_age = if total == 0 {
        0.0
    } else {
        round_to_one_decimal(aggregates.age_sum / total as f64)
    };
    let average_women_workload = if aggregates.women == 0 {
        0.0
    } else {
        round_to_one_decimal(aggregates.women_workload_sum as f64 / aggregates.women as f64)
    };

    let workloads: Vec<f64> = aggregates
        .workloads
        .iter()
        .map(|&workload| f64::from(workload))
        .collect();

    StatisticsSummary {
        total,
        workload10: aggregates.workload10,
        workload20: aggregates.workload20,
        workload30: aggregates.workload30,
        workload40: aggregates.workload40,
        average_age,
        min_age: aggregates.min_age.unwrap_or(0),
        max_age: aggregates.max_age.unwrap_or(0),
        median_age: median(&aggregates.ages).floor() as i64,
        median_workload: median(&workloads),
        average_women_workload,
        sorted_by_workload: sorted_by_workload(employees),
    }
}
