//! Employee record assembly.
//!
//! This module builds complete employee records by combining independent
//! random draws for gender, birth instant, name, surname and workload.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{AgeRange, Employee, Gender, GenerationRequest};

use super::birthdate::random_birthdate;
use super::names::{random_first_name, random_surname};

/// Workload values assigned to generated records, in weekly hours.
pub const WORKLOADS: [u32; 4] = [10, 20, 30, 40];

/// Generates `max(0, count)` employee records for `request`.
///
/// Ages are measured against `now` and all random draws come from `rng`,
/// so a seeded generator reproduces a dataset exactly. A negative count
/// yields an empty vector.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use employee_stats::generator::generate;
/// use employee_stats::models::{AgeRange, GenerationRequest};
///
/// let request = GenerationRequest {
///     count: 3,
///     age: AgeRange { min: 19, max: 35 },
/// };
/// let employees = generate(&request, Utc::now(), &mut rand::thread_rng());
/// assert_eq!(employees.len(), 3);
/// ```
pub fn generate<R: Rng>(
    request: &GenerationRequest,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Employee> {
    let count = request.count.max(0) as usize;
    let range = request.age.normalized();

    let mut employees = Vec::with_capacity(count);
    for _ in 0..count {
        employees.push(generate_one(range, now, rng));
    }
    employees
}

/// Builds a single record; every field is an independent draw.
fn generate_one<R: Rng>(range: AgeRange, now: DateTime<Utc>, rng: &mut R) -> Employee {
    let gender = if rng.gen_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };

    Employee {
        gender,
        birthdate: random_birthdate(range, now, rng),
        name: random_first_name(gender, rng).to_string(),
        surname: random_surname(gender, rng).to_string(),
        workload: WORKLOADS[rng.gen_range(0..WORKLOADS.len())],
    }
}
