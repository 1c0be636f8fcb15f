//! Employee model and related types.
//!
//! This module defines the Employee struct and Gender enum shared by the
//! dataset generator and the statistics aggregator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of milliseconds in a day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Number of milliseconds in an average Gregorian year (365.25 days).
pub const MILLIS_PER_YEAR: f64 = 365.25 * MILLIS_PER_DAY;

/// Represents the gender recorded on an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male records draw from the male name and surname tables.
    Male,
    /// Female records draw from the female name and surname tables.
    Female,
}

/// Represents a single synthetic employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The gender assigned to the record.
    pub gender: Gender,
    /// Birth instant in UTC, exchanged as an ISO 8601 string with exactly
    /// three fractional-second digits (e.g. "1990-05-14T08:22:31.123Z").
    #[serde(with = "iso_millis")]
    pub birthdate: DateTime<Utc>,
    /// First name, drawn from the gender-matched name table.
    pub name: String,
    /// Surname, drawn from the gender-matched surname table.
    pub surname: String,
    /// Weekly workload in hours; generated records carry 10, 20, 30 or 40.
    pub workload: u32,
}

impl Employee {
    /// Returns the employee's age in fractional years at `now`.
    ///
    /// The age is the elapsed milliseconds since the birth instant divided
    /// by the average year length of 365.25 days. The result is negative
    /// when the birthdate lies after `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{DateTime, Duration};
    /// use employee_stats::models::{Employee, Gender, MILLIS_PER_YEAR};
    ///
    /// let now = DateTime::from_timestamp_millis(1_756_000_000_000).unwrap();
    /// let employee = Employee {
    ///     gender: Gender::Female,
    ///     birthdate: now - Duration::milliseconds((30.0 * MILLIS_PER_YEAR) as i64),
    ///     name: "Hana".to_string(),
    ///     surname: "Nováková".to_string(),
    ///     workload: 40,
    /// };
    /// assert_eq!(employee.age_in_years(now), 30.0);
    /// ```
    pub fn age_in_years(&self, now: DateTime<Utc>) -> f64 {
        let elapsed_ms = now.timestamp_millis() - self.birthdate.timestamp_millis();
        elapsed_ms as f64 / MILLIS_PER_YEAR
    }
}

/// Serde helpers pinning the birthdate wire form to three fractional-second
/// digits in UTC. Parsing accepts any RFC 3339 offset and converts to UTC.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(birthdate: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&birthdate.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
