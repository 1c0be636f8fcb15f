//! Single-pass accumulation over an employee dataset.
//!
//! This module walks the input once, in order, collecting the workload
//! tier counters, the parallel age and workload sequences, the age sum and
//! whole-year extremes, and the women's workload figures.

use chrono::{DateTime, Utc};

use crate::models::{Employee, Gender};

/// Running totals collected in one pass over a dataset.
#[derive(Debug, Default)]
pub struct Aggregates {
    /// Records with a workload of 10 hours.
    pub workload10: u64,
    /// Records with a workload of 20 hours.
    pub workload20: u64,
    /// Records with a workload of 30 hours.
    pub workload30: u64,
    /// Records with a workload of 40 hours.
    pub workload40: u64,
    /// Fractional ages at the reference instant, in input order.
    pub ages: Vec<f64>,
    /// Workload values in input order.
    pub workloads: Vec<u32>,
    /// Sum of the fractional ages.
    pub age_sum: f64,
    /// Lowest whole-year age seen, if any record has been accumulated.
    pub min_age: Option<i64>,
    /// Highest whole-year age seen, if any record has been accumulated.
    pub max_age: Option<i64>,
    /// Number of female records.
    pub women: u64,
    /// Sum of the female records' workloads.
    pub women_workload_sum: u64,
}

impl Aggregates {
    /// Accumulates every record of `employees`, measuring ages at `now`.
    pub fn collect(employees: &[Employee], now: DateTime<Utc>) -> Self {
        let mut aggregates = Aggregates::default();
        for employee in employees {
            aggregates.accumulate(employee, now);
        }
        aggregates
    }

    fn accumulate(&mut self, employee: &Employee, now: DateTime<Utc>) {
        match employee.workload {
            10 => self.workload10 += 1,
            20 => self.workload20 += 1,
            30 => self.workload30 += 1,
            40 => self.workload40 += 1,
            // out-of-set workloads count toward no tier but stay in the sequences
            _ => {}
        }

        let age = employee.age_in_years(now);
        self.ages.push(age);
        self.workloads.push(employee.workload);
        self.age_sum += age;

        let whole_years = age.floor() as i64;
        self.min_age = Some(
            self.min_age
                .map_or(whole_years, |current| current.min(whole_years)),
        );
        self.max_age = Some(
            self.max_age
                .map_or(whole_years, |current| current.max(whole_years)),
        );

        if employee.gender == Gender::Female {
            self.women += 1;
            self.women_workload_sum += u64::from(employee.workload);
        }
    }
}
