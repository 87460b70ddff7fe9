//! DeleteSiteHandler - Command handler removing a site.

use std::sync::Arc;
use tracing::info;

use super::LoadWorkspaceHandler;
use crate::domain::foundation::{DomainError, SiteId};
use crate::ports::{PreferenceStore, SiteRepository};

#[derive(Debug, Clone)]
pub struct DeleteSiteCommand {
    pub site_id: SiteId,
}

pub struct DeleteSiteHandler {
    repository: Arc<dyn SiteRepository>,
    preferences: Arc<dyn PreferenceStore>,
}

impl DeleteSiteHandler {
    pub fn new(repository: Arc<dyn SiteRepository>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { repository, preferences }
    }

    /// Deletes the site and returns the id of the site now active.
    ///
    /// The repository repeats the last-site check under its own lock, so two
    /// concurrent deletes cannot empty the store.
    pub async fn handle(&self, cmd: DeleteSiteCommand) -> Result<SiteId, DomainError> {
        let mut workspace = LoadWorkspaceHandler::new(self.repository.clone(), self.preferences.clone())
            .handle()
            .await?;

        workspace.delete_site(cmd.site_id)?;
        self.repository.delete(cmd.site_id).await?;
        self.preferences.save_active_site(workspace.active_id()).await?;

        info!(site_id = %cmd.site_id, active_site = %workspace.active_id(), "Site deleted");
        Ok(workspace.active_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryPreferenceStore, InMemorySiteRepository};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::site::Site;

    #[tokio::test]
    async fn last_site_survives() {
        let site = Site::new("Only").unwrap();
        let site_id = site.id();
        let repository = Arc::new(InMemorySiteRepository::with_sites(vec![site]));
        let handler = DeleteSiteHandler::new(repository.clone(), Arc::new(InMemoryPreferenceStore::new()));

        let err = handler.handle(DeleteSiteCommand { site_id }).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::LastSite);
        assert_eq!(repository.site_count().await, 1);
    }

    #[tokio::test]
    async fn deleting_active_site_moves_selection() {
        let a = Site::new("A").unwrap();
        let b = Site::new("B").unwrap();
        let (a_id, b_id) = (a.id(), b.id());
        let repository = Arc::new(InMemorySiteRepository::with_sites(vec![a, b]));
        let preferences = Arc::new(InMemoryPreferenceStore::new());
        preferences.save_active_site(b_id).await.unwrap();

        let active = DeleteSiteHandler::new(repository.clone(), preferences.clone())
            .handle(DeleteSiteCommand { site_id: b_id })
            .await
            .unwrap();

        assert_eq!(active, a_id);
        assert_eq!(preferences.load().await.unwrap().active_site, Some(a_id));
        assert_eq!(repository.site_count().await, 1);
    }

    #[tokio::test]
    async fn concurrent_deletes_keep_one_site() {
        let a = Site::new("A").unwrap();
        let b = Site::new("B").unwrap();
        let (a_id, b_id) = (a.id(), b.id());
        let repository = Arc::new(InMemorySiteRepository::with_sites(vec![a, b]));
        let preferences = Arc::new(InMemoryPreferenceStore::new());

        let first = DeleteSiteHandler::new(repository.clone(), preferences.clone());
        let second = DeleteSiteHandler::new(repository.clone(), preferences.clone());
        let (left, right) = tokio::join!(
            first.handle(DeleteSiteCommand { site_id: a_id }),
            second.handle(DeleteSiteCommand { site_id: b_id })
        );

        assert_eq!([left.is_ok(), right.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(repository.site_count().await, 1);
    }
}
