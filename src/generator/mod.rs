//! Dataset generation for synthetic employee records.
//!
//! This module contains the record generator: fixed gender-matched name
//! tables, birth-window computation for a requested age range, uniform
//! workload assignment, and the assembly loop producing a complete dataset.

mod birthdate;
mod dataset;
mod names;

pub use birthdate::{birth_window, random_birthdate};
pub use dataset::{WORKLOADS, generate};
pub use names::{
    FEMALE_FIRST_NAMES, FEMALE_SURNAMES, MALE_FIRST_NAMES, MALE_SURNAMES, random_first_name,
    random_surname,
};
