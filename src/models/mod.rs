//! Core data models for the employee statistics crate.
//!
//! This module contains all the domain models shared by the generator and
//! the aggregator.

mod employee;
mod request;
mod summary;

pub use employee::{Employee, Gender, MILLIS_PER_DAY, MILLIS_PER_YEAR};
pub use request::{AgeRange, GenerationRequest};
pub use summary::StatisticsSummary;
