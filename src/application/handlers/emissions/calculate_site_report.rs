//! CalculateSiteReportHandler - Query handler producing a site's emissions report.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::CalculationService;
use crate::domain::emissions::EmissionsReport;
use crate::domain::foundation::{DomainError, ErrorCode, SiteId};
use crate::ports::SiteRepository;

/// Query for one site's report under the active country.
#[derive(Debug, Clone)]
pub struct CalculateSiteReportQuery {
    pub site_id: SiteId,
}

/// Report together with the site it describes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReport {
    pub site_id: SiteId,
    pub site_name: String,
    pub report: EmissionsReport,
}

pub struct CalculateSiteReportHandler {
    repository: Arc<dyn SiteRepository>,
    service: Arc<RwLock<CalculationService>>,
}

impl CalculateSiteReportHandler {
    pub fn new(repository: Arc<dyn SiteRepository>, service: Arc<RwLock<CalculationService>>) -> Self {
        Self { repository, service }
    }

    pub async fn handle(&self, query: CalculateSiteReportQuery) -> Result<SiteReport, DomainError> {
        let site = self
            .repository
            .find_by_id(query.site_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SiteNotFound, format!("Site not found: {}", query.site_id))
            })?;

        // The read guard spans the whole pass so a concurrent country switch
        // cannot interleave with it.
        let service = self.service.read().await;
        let report = service.report(site.data())?;
        debug!(site_id = %site.id(), country = %report.country, "Site report computed");

        Ok(SiteReport {
            site_id: site.id(),
            site_name: site.name().to_string(),
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySiteRepository;
    use crate::domain::emissions::ActivityCategory;
    use crate::domain::foundation::CountryCode;
    use crate::domain::site::Site;

    fn handler_with(site: Site) -> (CalculateSiteReportHandler, Arc<RwLock<CalculationService>>) {
        let repository = Arc::new(InMemorySiteRepository::with_sites(vec![site]));
        let service = Arc::new(RwLock::new(CalculationService::default()));
        (CalculateSiteReportHandler::new(repository, service.clone()), service)
    }

    #[tokio::test]
    async fn reports_under_the_active_country() {
        let mut site = Site::new("Office").unwrap();
        site.add_row(ActivityCategory::Water).set_months([10.0; 12]).unwrap();
        let site_id = site.id();
        let (handler, service) = handler_with(site);

        let uk = handler.handle(CalculateSiteReportQuery { site_id }).await.unwrap();
        assert_eq!(uk.site_name, "Office");
        assert!((uk.report.grand_total - 0.04128).abs() < 1e-12);

        service.write().await.set_country(CountryCode::brazil()).unwrap();
        let brazil = handler.handle(CalculateSiteReportQuery { site_id }).await.unwrap();
        assert!((brazil.report.grand_total - 0.05052).abs() < 1e-12);
    }

    #[tokio::test]
    async fn unknown_site_is_not_found() {
        let (handler, _) = handler_with(Site::new("Office").unwrap());
        let err = handler
            .handle(CalculateSiteReportQuery { site_id: SiteId::new() })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SiteNotFound);
    }
}
