//! HTTP DTOs for site endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::emissions::CategoryRows;
use crate::domain::foundation::SiteId;
use crate::domain::site::{Site, SiteWorkspace};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSiteRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSiteDataRequest {
    pub data: CategoryRows,
}

/// Partial update of a site's descriptive fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteDetailsRequest {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub notes: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One entry of the site picker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    pub id: SiteId,
    pub name: String,
    pub company_name: String,
    pub row_count: usize,
    pub active: bool,
}

impl SiteSummary {
    fn from_site(site: &Site, active: SiteId) -> Self {
        Self {
            id: site.id(),
            name: site.name().to_string(),
            company_name: site.company_name().to_string(),
            row_count: site.data().row_count(),
            active: site.id() == active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteListResponse {
    pub active_site: SiteId,
    pub sites: Vec<SiteSummary>,
}

impl From<&SiteWorkspace> for SiteListResponse {
    fn from(workspace: &SiteWorkspace) -> Self {
        let active = workspace.active_id();
        Self {
            active_site: active,
            sites: workspace
                .sites()
                .iter()
                .map(|site| SiteSummary::from_site(site, active))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSiteResponse {
    pub deleted: SiteId,
    pub active_site: SiteId,
}
