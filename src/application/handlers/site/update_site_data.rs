//! UpdateSiteDataHandler - Command handler replacing a site's activity rows.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::emissions::CategoryRows;
use crate::domain::foundation::{DomainError, SiteId};
use crate::domain::site::Site;
use crate::ports::SiteRepository;

#[derive(Debug, Clone)]
pub struct UpdateSiteDataCommand {
    pub site_id: SiteId,
    pub data: CategoryRows,
}

/// Replaces every row of a site. Rows that would be rejected by the row
/// setters reject the whole update; the stored site is left unchanged.
pub struct UpdateSiteDataHandler {
    repository: Arc<dyn SiteRepository>,
}

impl UpdateSiteDataHandler {
    pub fn new(repository: Arc<dyn SiteRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateSiteDataCommand) -> Result<Site, DomainError> {
        if let Err(err) = cmd.data.ensure_valid() {
            warn!(site_id = %cmd.site_id, error = %err, "Rejected site data update");
            return Err(err);
        }

        let data = cmd.data;
        let site = self
            .repository
            .update(
                cmd.site_id,
                Box::new(move |site: &mut Site| {
                    *site.data_mut() = data;
                    Ok(())
                }),
            )
            .await?;

        info!(site_id = %cmd.site_id, rows = site.data().row_count(), "Site data updated");
        Ok(site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySiteRepository;
    use crate::domain::emissions::{ActivityCategory, ActivityRow};
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn replaces_rows() {
        let site = Site::new("Depot").unwrap();
        let site_id = site.id();
        let repository = Arc::new(InMemorySiteRepository::with_sites(vec![site]));

        let mut data = CategoryRows::new();
        data.add_row(ActivityCategory::Energy);
        UpdateSiteDataHandler::new(repository.clone())
            .handle(UpdateSiteDataCommand { site_id, data })
            .await
            .unwrap();

        let stored = repository.find_by_id(site_id).await.unwrap().unwrap();
        assert_eq!(stored.data().energy.len(), 1);
    }

    #[tokio::test]
    async fn invalid_rows_leave_site_untouched() {
        let mut site = Site::new("Depot").unwrap();
        site.add_row(ActivityCategory::Water);
        let site_id = site.id();
        let repository = Arc::new(InMemorySiteRepository::with_sites(vec![site]));

        let row: ActivityRow = serde_json::from_value(serde_json::json!({
            "emissionType": "electricity", "year": 2025, "months": [-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        }))
        .unwrap();
        let mut data = CategoryRows::new();
        data.energy.push(row);

        let err = UpdateSiteDataHandler::new(repository.clone())
            .handle(UpdateSiteDataCommand { site_id, data })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("category"), Some(&"energy".to_string()));

        let stored = repository.find_by_id(site_id).await.unwrap().unwrap();
        assert_eq!(stored.data().water.len(), 1);
        assert!(stored.data().energy.is_empty());
    }

    #[tokio::test]
    async fn unknown_site_is_not_found() {
        let repository = Arc::new(InMemorySiteRepository::new());
        let err = UpdateSiteDataHandler::new(repository)
            .handle(UpdateSiteDataCommand {
                site_id: SiteId::new(),
                data: CategoryRows::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SiteNotFound);
    }
}
