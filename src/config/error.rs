//! Configuration error types

use thiserror::Error;

/// Environment could not be read into [`super::AppConfig`].
#[derive(Debug, Error)]
#[error("Configuration loading failed: {0}")]
pub struct ConfigError(#[from] config::ConfigError);

/// A loaded value the server cannot start with.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Port must not be 0")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 120 seconds")]
    InvalidTimeout,

    #[error("CORS origin must start with http:// or https://: {0}")]
    InvalidCorsOrigin(String),

    #[error("Unsupported default country: {0}")]
    UnsupportedCountry(String),

    #[error("Unknown scope classification mode: {0}")]
    InvalidScopeMode(String),

    #[error("Factor file must have a .yaml, .yml or .json extension: {0}")]
    InvalidFactorFile(String),
}
