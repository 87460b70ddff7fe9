//! Factor Table Source Port - Where emission factor tables come from.
//!
//! Sources only fetch; validation happens when tables are installed in the
//! registry.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::emissions::EmissionFactorTable;
use crate::domain::foundation::{CountryCode, DomainError, ErrorCode};

/// Errors that can occur while fetching factor tables.
#[derive(Debug, thiserror::Error)]
pub enum FactorSourceError {
    #[error("Factor source not found: {0}")]
    NotFound(String),

    #[error("Failed to parse factor tables: {0}")]
    ParseFailed(String),

    #[error("Unsupported factor file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<FactorSourceError> for DomainError {
    fn from(err: FactorSourceError) -> Self {
        DomainError::new(ErrorCode::FactorSourceFailed, err.to_string())
    }
}

/// Port for fetching per-country factor tables.
#[async_trait]
pub trait FactorTableSource: Send + Sync {
    /// Every table the source provides, keyed by country.
    async fn fetch_tables(
        &self,
    ) -> Result<BTreeMap<CountryCode, EmissionFactorTable>, FactorSourceError>;

    /// Human-readable origin used in logs.
    fn describe(&self) -> String;
}
