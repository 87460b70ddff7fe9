//! SwitchSiteHandler - Command handler changing the active site.

use std::sync::Arc;
use tracing::info;

use super::LoadWorkspaceHandler;
use crate::domain::foundation::{DomainError, SiteId};
use crate::domain::site::SiteWorkspace;
use crate::ports::{PreferenceStore, SiteRepository};

#[derive(Debug, Clone)]
pub struct SwitchSiteCommand {
    pub site_id: SiteId,
}

pub struct SwitchSiteHandler {
    repository: Arc<dyn SiteRepository>,
    preferences: Arc<dyn PreferenceStore>,
}

impl SwitchSiteHandler {
    pub fn new(repository: Arc<dyn SiteRepository>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { repository, preferences }
    }

    /// Activates a stored site and remembers the choice.
    pub async fn handle(&self, cmd: SwitchSiteCommand) -> Result<SiteWorkspace, DomainError> {
        let mut workspace = LoadWorkspaceHandler::new(self.repository.clone(), self.preferences.clone())
            .handle()
            .await?;

        workspace.switch_site(cmd.site_id)?;
        self.preferences.save_active_site(cmd.site_id).await?;

        info!(site_id = %cmd.site_id, "Active site changed");
        Ok(workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryPreferenceStore, InMemorySiteRepository};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::site::Site;

    #[tokio::test]
    async fn switch_is_remembered() {
        let a = Site::new("A").unwrap();
        let b = Site::new("B").unwrap();
        let b_id = b.id();
        let repository = Arc::new(InMemorySiteRepository::with_sites(vec![a, b]));
        let preferences = Arc::new(InMemoryPreferenceStore::new());

        let workspace = SwitchSiteHandler::new(repository.clone(), preferences.clone())
            .handle(SwitchSiteCommand { site_id: b_id })
            .await
            .unwrap();

        assert_eq!(workspace.active_site().name(), "B");
        assert_eq!(preferences.load().await.unwrap().active_site, Some(b_id));
    }

    #[tokio::test]
    async fn unknown_site_keeps_previous_choice() {
        let a = Site::new("A").unwrap();
        let a_id = a.id();
        let repository = Arc::new(InMemorySiteRepository::with_sites(vec![a]));
        let preferences = Arc::new(InMemoryPreferenceStore::new());
        preferences.save_active_site(a_id).await.unwrap();

        let err = SwitchSiteHandler::new(repository, preferences.clone())
            .handle(SwitchSiteCommand { site_id: SiteId::new() })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SiteNotFound);
        assert_eq!(preferences.load().await.unwrap().active_site, Some(a_id));
    }
}
