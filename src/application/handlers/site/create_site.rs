//! CreateSiteHandler - Command handler adding a site and making it active.

use std::sync::Arc;

use super::LoadWorkspaceHandler;
use crate::domain::foundation::DomainError;
use crate::domain::site::Site;
use crate::ports::{PreferenceStore, SiteRepository};

#[derive(Debug, Clone)]
pub struct CreateSiteCommand {
    pub name: String,
}

pub struct CreateSiteHandler {
    repository: Arc<dyn SiteRepository>,
    preferences: Arc<dyn PreferenceStore>,
}

impl CreateSiteHandler {
    pub fn new(repository: Arc<dyn SiteRepository>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { repository, preferences }
    }

    pub async fn handle(&self, cmd: CreateSiteCommand) -> Result<Site, DomainError> {
        let mut workspace = LoadWorkspaceHandler::new(self.repository.clone(), self.preferences.clone())
            .handle()
            .await?;

        let site_id = workspace.add_site(&cmd.name)?;
        let site = workspace.active_site().clone();

        self.repository.save(&site).await?;
        self.preferences.save_active_site(site_id).await?;
        Ok(site)
    }
}
