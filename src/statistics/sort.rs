//! Stable workload ordering.
//!
//! This module produces the workload-sorted view attached to a summary.

use crate::models::Employee;

/// Returns a fresh copy of `employees` sorted ascending by workload.
///
/// The sort is stable, so records with equal workloads keep their input
/// order. The input slice itself is never modified.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use employee_stats::models::{Employee, Gender};
/// use employee_stats::statistics::sorted_by_workload;
///
/// let make = |name: &str, workload| Employee {
///     gender: Gender::Male,
///     birthdate: DateTime::from_timestamp_millis(650_000_000_000).unwrap(),
///     name: name.to_string(),
///     surname: "Novák".to_string(),
///     workload,
/// };
/// let employees = vec![make("Jan", 40), make("Petr", 10)];
///
/// let sorted = sorted_by_workload(&employees);
/// assert_eq!(sorted[0].name, "Petr");
/// assert_eq!(sorted[1].name, "Jan");
/// ```
pub fn sorted_by_workload(employees: &[Employee]) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by_key(|employee| employee.workload);
    sorted
}
