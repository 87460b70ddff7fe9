//! Country code value object selecting an emission factor table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Upper-case identifier of a country whose emission factors are known,
/// e.g. `UK` or `BRAZIL`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Base country used when no preference has been stored.
    pub const DEFAULT: &'static str = "UK";

    /// Creates a country code, normalising case and surrounding whitespace.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let code = code.as_ref().trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(ValidationError::empty_field("country"));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::invalid_format(
                "country",
                "only letters, digits and underscores are allowed",
            ));
        }
        Ok(Self(code))
    }

    /// The United Kingdom (DESNZ conversion factors).
    pub fn uk() -> Self {
        Self("UK".to_string())
    }

    /// Brazil (SEEG inventory factors).
    pub fn brazil() -> Self {
        Self("BRAZIL".to_string())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_is_normalised_to_upper_case() {
        let code = CountryCode::new(" brazil ").unwrap();
        assert_eq!(code.as_str(), "BRAZIL");
        assert_eq!(code, CountryCode::brazil());
    }

    #[test]
    fn country_code_rejects_empty_input() {
        assert_eq!(
            CountryCode::new("  "),
            Err(ValidationError::empty_field("country"))
        );
    }

    #[test]
    fn country_code_rejects_punctuation() {
        assert!(CountryCode::new("U.K.").is_err());
    }

    #[test]
    fn country_code_default_is_uk() {
        assert_eq!(CountryCode::default(), CountryCode::uk());
    }

    #[test]
    fn country_code_deserializes_with_normalisation() {
        let code: CountryCode = serde_json::from_str("\"uk\"").unwrap();
        assert_eq!(code, CountryCode::uk());
        assert!(serde_json::from_str::<CountryCode>("\"\"").is_err());
    }
}
