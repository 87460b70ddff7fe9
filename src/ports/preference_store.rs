//! Preference Store Port - User selections that outlive a process.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CountryCode, DomainError, ErrorCode, SiteId};

/// Errors that can occur while reading or writing preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceStoreError {
    #[error("Failed to serialize preferences: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize preferences: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<PreferenceStoreError> for DomainError {
    fn from(err: PreferenceStoreError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Persisted selections. Absent values fall back to the defaults at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub country: Option<CountryCode>,
    pub active_site: Option<SiteId>,
}

/// Port for loading and saving preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Stored preferences, or defaults if nothing was saved yet.
    async fn load(&self) -> Result<Preferences, PreferenceStoreError>;

    async fn save(&self, preferences: &Preferences) -> Result<(), PreferenceStoreError>;

    /// Replaces the stored country, keeping the other fields.
    async fn save_country(&self, country: &CountryCode) -> Result<(), PreferenceStoreError>;

    /// Replaces the stored active site, keeping the other fields.
    async fn save_active_site(&self, site: SiteId) -> Result<(), PreferenceStoreError>;
}
