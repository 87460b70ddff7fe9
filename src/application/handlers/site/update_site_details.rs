//! UpdateSiteDetailsHandler - Command handler for a site's name, company and notes.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, SiteId};
use crate::domain::site::Site;
use crate::ports::SiteRepository;

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateSiteDetailsCommand {
    pub site_id: SiteId,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub notes: Option<String>,
}

pub struct UpdateSiteDetailsHandler {
    repository: Arc<dyn SiteRepository>,
}

impl UpdateSiteDetailsHandler {
    pub fn new(repository: Arc<dyn SiteRepository>) -> Self {
        Self { repository }
    }

    /// A blank name is stored as the unnamed-site placeholder.
    pub async fn handle(&self, cmd: UpdateSiteDetailsCommand) -> Result<Site, DomainError> {
        let UpdateSiteDetailsCommand {
            site_id,
            name,
            company_name,
            notes,
        } = cmd;

        let site = self
            .repository
            .update(
                site_id,
                Box::new(move |site: &mut Site| {
                    if let Some(name) = name {
                        site.rename(name);
                    }
                    if let Some(company_name) = company_name {
                        site.set_company_name(company_name);
                    }
                    if let Some(notes) = notes {
                        site.set_notes(notes);
                    }
                    Ok(())
                }),
            )
            .await?;

        info!(site_id = %site_id, name = site.name(), "Site details updated");
        Ok(site)
    }
}
