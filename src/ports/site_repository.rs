//! Site Repository Port - Persistence of site records.
//!
//! A site is stored as one document (activity rows plus ledger), so every
//! save replaces the whole record atomically. Changes that depend on the
//! stored record go through [`SiteRepository::update`], which holds the
//! adapter's write lock from read to write.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SiteId};
use crate::domain::site::Site;

/// Errors that can occur during site persistence.
#[derive(Debug, thiserror::Error)]
pub enum SiteRepositoryError {
    #[error("Site not found: {0}")]
    NotFound(SiteId),

    #[error("Failed to serialize site: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize site: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Cannot delete the last remaining site")]
    LastSite,

    /// The mutation passed to `update` refused the change.
    #[error("{0}")]
    Rejected(DomainError),
}

/// Mutation applied to a stored site by [`SiteRepository::update`].
pub type SiteUpdate<'a> = Box<dyn FnOnce(&mut Site) -> Result<(), DomainError> + Send + 'a>;

impl From<SiteRepositoryError> for DomainError {
    fn from(err: SiteRepositoryError) -> Self {
        let code = match &err {
            SiteRepositoryError::Rejected(inner) => return inner.clone(),
            SiteRepositoryError::NotFound(_) => ErrorCode::SiteNotFound,
            SiteRepositoryError::LastSite => ErrorCode::LastSite,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for storing and loading sites.
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// Insert or replace a site.
    async fn save(&self, site: &Site) -> Result<(), SiteRepositoryError>;

    /// Load a site by ID, `None` if it was never saved.
    async fn find_by_id(&self, id: SiteId) -> Result<Option<Site>, SiteRepositoryError>;

    /// All stored sites, in insertion order.
    async fn list(&self) -> Result<Vec<Site>, SiteRepositoryError>;

    /// All stored sites, storing `seed` first if the store is empty.
    async fn list_or_seed(&self, seed: &Site) -> Result<Vec<Site>, SiteRepositoryError>;

    /// Applies `apply` to the stored site and saves the result as one step.
    ///
    /// Nothing is written when `apply` fails. Returns the site as saved.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `Rejected` carrying the mutation's error.
    async fn update<'a>(&self, id: SiteId, apply: SiteUpdate<'a>) -> Result<Site, SiteRepositoryError>;

    /// Delete a site. The last stored site is never removed.
    ///
    /// # Errors
    /// `NotFound` if no such site is stored, `LastSite` if it is the only one.
    async fn delete(&self, id: SiteId) -> Result<(), SiteRepositoryError>;
}
