//! Errors raised by the emissions calculation engine.

use thiserror::Error;

use super::ActivityCategory;
use crate::domain::foundation::{CountryCode, DomainError, ErrorCode};

/// Failures of factor lookup, classification or input validation.
///
/// Factor and classification errors abort the computation that raised them;
/// no partial or zero-filled result is ever returned alongside them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmissionsError {
    #[error("Unknown country: {0}")]
    UnknownCountry(CountryCode),

    #[error("No emission factor for '{key}' in country {country}")]
    UnknownFactor { country: CountryCode, key: String },

    #[error("Factor table for {country} is missing: {}", missing.join(", "))]
    IncompleteFactorTable {
        country: CountryCode,
        missing: Vec<String>,
    },

    #[error("Factor '{key}' for {country} must be finite and non-negative, got {value}")]
    InvalidFactor {
        country: CountryCode,
        key: String,
        value: f64,
    },

    #[error("Emission type '{0}' has no GHG Protocol scope")]
    UnclassifiedEmissionType(String),

    #[error("Emission type '{key}' is not valid for category {category}")]
    InvalidEmissionType {
        category: ActivityCategory,
        key: String,
    },

    #[error("Year {0} is outside the accepted range 2020-2030")]
    InvalidYear(i32),

    #[error("Quantity for month {month} must be a finite non-negative number, got {value}")]
    InvalidQuantity { month: usize, value: f64 },

    #[error("Month index {0} is out of range (0-11)")]
    InvalidMonth(usize),
}

impl EmissionsError {
    /// Returns true for errors raised at the input boundary.
    ///
    /// These leave the targeted row untouched and are reported straight back
    /// to whoever supplied the value.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EmissionsError::InvalidEmissionType { .. }
                | EmissionsError::InvalidYear(_)
                | EmissionsError::InvalidQuantity { .. }
                | EmissionsError::InvalidMonth(_)
        )
    }
}

impl From<EmissionsError> for DomainError {
    fn from(err: EmissionsError) -> Self {
        let code = match &err {
            EmissionsError::UnknownCountry(_) => ErrorCode::UnknownCountry,
            EmissionsError::UnknownFactor { .. } => ErrorCode::UnknownFactor,
            EmissionsError::IncompleteFactorTable { .. } | EmissionsError::InvalidFactor { .. } => {
                ErrorCode::IncompleteFactorTable
            }
            EmissionsError::UnclassifiedEmissionType(_) => ErrorCode::UnclassifiedEmissionType,
            EmissionsError::InvalidEmissionType { .. }
            | EmissionsError::InvalidYear(_)
            | EmissionsError::InvalidQuantity { .. }
            | EmissionsError::InvalidMonth(_) => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
