//! LoadWorkspaceHandler - Rebuilds the site workspace from storage.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::site::SiteWorkspace;
use crate::ports::{PreferenceStore, SiteRepository};

/// Loads all sites and the remembered active site.
///
/// An empty store is seeded with the default site, which is saved so later
/// requests can address it by id. Seeding happens under the repository's
/// lock, so concurrent first requests agree on one default site.
pub struct LoadWorkspaceHandler {
    repository: Arc<dyn SiteRepository>,
    preferences: Arc<dyn PreferenceStore>,
}

impl LoadWorkspaceHandler {
    pub fn new(repository: Arc<dyn SiteRepository>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { repository, preferences }
    }

    pub async fn handle(&self) -> Result<SiteWorkspace, DomainError> {
        let preferences = self.preferences.load().await?;
        let seed = SiteWorkspace::new();
        let sites = self.repository.list_or_seed(seed.active_site()).await?;

        if sites.len() == 1 && sites[0].id() == seed.active_id() {
            self.preferences.save_active_site(seed.active_id()).await?;
            info!(site_id = %seed.active_id(), "Seeded workspace with default site");
            return Ok(seed);
        }

        Ok(SiteWorkspace::from_sites(sites, preferences.active_site))
    }
}
