//! Emissions engine configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::emissions::{ClassificationMode, FactorRegistry};
use crate::domain::foundation::CountryCode;

/// Emissions engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmissionsConfig {
    /// Country active at startup when no preference is stored
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Optional YAML/JSON file whose tables override or extend the built-ins
    pub factor_file: Option<PathBuf>,

    /// `emission_type` (default) or `category_compat`
    #[serde(default = "default_scope_mode")]
    pub scope_mode: String,
}

impl EmissionsConfig {
    /// Parsed default country.
    pub fn country(&self) -> Result<CountryCode, ValidationError> {
        CountryCode::new(&self.default_country)
            .map_err(|_| ValidationError::UnsupportedCountry(self.default_country.clone()))
    }

    pub fn classification_mode(&self) -> Result<ClassificationMode, ValidationError> {
        self.scope_mode
            .parse()
            .map_err(|_| ValidationError::InvalidScopeMode(self.scope_mode.clone()))
    }

    /// Validate emissions configuration
    ///
    /// Without a factor file the default country must have a built-in table;
    /// with one, the check is deferred until the file has been loaded.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let country = self.country()?;
        self.classification_mode()?;

        match &self.factor_file {
            Some(path) => {
                let extension = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.to_ascii_lowercase());
                if !matches!(extension.as_deref(), Some("yaml" | "yml" | "json")) {
                    return Err(ValidationError::InvalidFactorFile(path.display().to_string()));
                }
            }
            None => {
                if !FactorRegistry::builtin().supports(&country) {
                    return Err(ValidationError::UnsupportedCountry(country.to_string()));
                }
            }
        }
        Ok(())
    }
}

impl Default for EmissionsConfig {
    fn default() -> Self {
        Self {
            default_country: default_country(),
            factor_file: None,
            scope_mode: default_scope_mode(),
        }
    }
}

fn default_country() -> String {
    "UK".to_string()
}

fn default_scope_mode() -> String {
    "emission_type".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EmissionsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.country().unwrap(), CountryCode::uk());
        assert_eq!(config.classification_mode().unwrap(), ClassificationMode::EmissionType);
    }

    #[test]
    fn unsupported_country_without_factor_file() {
        let config = EmissionsConfig {
            default_country: "france".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedCountry(code)) if code == "FRANCE"
        ));
    }

    #[test]
    fn factor_file_defers_country_check() {
        let config = EmissionsConfig {
            default_country: "france".to_string(),
            factor_file: Some(PathBuf::from("factors/france.yaml")),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn factor_file_needs_known_extension() {
        let config = EmissionsConfig {
            factor_file: Some(PathBuf::from("factors.toml")),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidFactorFile(_))));
    }

    #[test]
    fn compat_scope_mode_parses() {
        let config = EmissionsConfig {
            scope_mode: "category-compat".to_string(),
            ..Default::default()
        };
        assert_eq!(config.classification_mode().unwrap(), ClassificationMode::CategoryCompat);
    }
}
