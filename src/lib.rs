//! Synthetic employee dataset generation and workforce statistics.
//!
//! This crate generates fictitious employee records whose ages fall within
//! a requested range and aggregates datasets into a single statistics
//! summary: workload tier counts, average and median ages, whole-year age
//! extremes, the women's average workload, and a stable workload-sorted
//! view of the records.
//!
//! The crate-root functions read the wall clock, and for generation a
//! thread-local RNG, once per call. The cores underneath
//! ([`generator::generate`] and [`statistics::summarize`]) take the
//! reference instant and the RNG as arguments, so callers needing
//! determinism can inject both.

#![warn(missing_docs)]

pub mod generator;
pub mod models;
pub mod statistics;

use chrono::Utc;
use tracing::{debug, info};

use models::{Employee, GenerationRequest, StatisticsSummary};

/// Generates a dataset for `request` at the current wall-clock time.
///
/// Equivalent to [`generator::generate`] with a fresh `Utc::now()` reading
/// and the thread-local RNG. Produces `max(0, count)` records.
pub fn generate_employee_data(request: &GenerationRequest) -> Vec<Employee> {
    debug!(count = request.count, "generating employee dataset");
    generator::generate(request, Utc::now(), &mut rand::thread_rng())
}

/// Summarizes `employees` with ages measured at the current wall-clock
/// time.
///
/// Equivalent to [`statistics::summarize`] with a fresh `Utc::now()`
/// reading.
pub fn get_employee_statistics(employees: &[Employee]) -> StatisticsSummary {
    debug!(total = employees.len(), "summarizing employee dataset");
    statistics::summarize(employees, Utc::now())
}

/// Generates a dataset for `request` and summarizes it in one step.
///
/// The wall clock is read once; the same instant drives both the birth
/// window and the age measurements, so the summary's age figures line up
/// with the requested range.
///
/// # Examples
///
/// ```
/// use employee_stats::models::{AgeRange, GenerationRequest};
///
/// let request = GenerationRequest {
///     count: 40,
///     age: AgeRange { min: 19, max: 35 },
/// };
/// let summary = employee_stats::run(&request);
/// assert_eq!(summary.total, 40);
/// assert_eq!(summary.sorted_by_workload.len(), 40);
/// ```
pub fn run(request: &GenerationRequest) -> StatisticsSummary {
    let now = Utc::now();
    let mut rng = rand::thread_rng();

    info!(count = request.count, "building employee statistics report");
    let employees = generator::generate(request, now, &mut rng);
    statistics::summarize(&employees, now)
}
