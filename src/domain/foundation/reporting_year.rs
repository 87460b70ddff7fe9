//! Reporting year value object (2020-2030 inclusive).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A calendar year accepted for activity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ReportingYear(i32);

impl ReportingYear {
    /// Earliest accepted year.
    pub const MIN: i32 = 2020;

    /// Latest accepted year.
    pub const MAX: i32 = 2030;

    /// Creates a ReportingYear, returning error if out of range.
    pub fn try_new(year: i32) -> Result<Self, ValidationError> {
        if !Self::contains(year) {
            return Err(ValidationError::out_of_range("year", Self::MIN, Self::MAX, year));
        }
        Ok(Self(year))
    }

    /// Creates a ReportingYear, clamping to the valid range.
    ///
    /// Only used for defaults derived from the clock, never for user input.
    pub fn clamped(year: i32) -> Self {
        Self(year.clamp(Self::MIN, Self::MAX))
    }

    /// Returns true if `year` lies inside the accepted range.
    pub fn contains(year: i32) -> bool {
        (Self::MIN..=Self::MAX).contains(&year)
    }

    /// Returns the year as i32.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for ReportingYear {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ReportingYear> for i32 {
    fn from(year: ReportingYear) -> Self {
        year.0
    }
}

impl fmt::Display for ReportingYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
