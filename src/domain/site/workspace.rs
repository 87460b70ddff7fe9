//! Ordered collection of sites with exactly one active.

use serde::{Deserialize, Serialize};

use super::{Site, WorkspaceError};
use crate::domain::foundation::SiteId;

/// Name of the site every new workspace starts with.
pub const DEFAULT_SITE_NAME: &str = "Headquarters";

/// The user's sites. Never empty; `active` always names a held site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WorkspaceRecord", into = "WorkspaceRecord")]
pub struct SiteWorkspace {
    sites: Vec<Site>,
    active: SiteId,
}

/// Unchecked serialized form.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkspaceRecord {
    sites: Vec<Site>,
    #[serde(default)]
    active_site: Option<SiteId>,
}

impl SiteWorkspace {
    /// A workspace holding a single "Headquarters" site.
    pub fn new() -> Self {
        let site = Self::default_site();
        Self {
            active: site.id(),
            sites: vec![site],
        }
    }

    /// Rebuilds a workspace from stored sites.
    ///
    /// An empty list is seeded with the default site. A missing or stale
    /// active id falls back to the first site.
    pub fn from_sites(sites: Vec<Site>, active: Option<SiteId>) -> Self {
        if sites.is_empty() {
            return Self::new();
        }
        let active = active
            .filter(|id| sites.iter().any(|site| site.id() == *id))
            .unwrap_or_else(|| sites[0].id());
        Self { sites, active }
    }

    fn default_site() -> Site {
        Site::named(DEFAULT_SITE_NAME.to_string())
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn site(&self, id: SiteId) -> Option<&Site> {
        self.sites.iter().find(|site| site.id() == id)
    }

    pub fn active_id(&self) -> SiteId {
        self.active
    }

    pub fn active_site(&self) -> &Site {
        let index = self.active_index();
        &self.sites[index]
    }

    fn active_index(&self) -> usize {
        self.sites
            .iter()
            .position(|site| site.id() == self.active)
            .unwrap_or(0)
    }

    /// Adds a site and makes it active.
    pub fn add_site(&mut self, name: impl AsRef<str>) -> Result<SiteId, WorkspaceError> {
        let site = Site::new(name)?;
        let id = site.id();
        self.sites.push(site);
        self.active = id;
        Ok(id)
    }

    pub fn switch_site(&mut self, id: SiteId) -> Result<(), WorkspaceError> {
        if self.site(id).is_none() {
            return Err(WorkspaceError::SiteNotFound(id));
        }
        self.active = id;
        Ok(())
    }

    /// Removes a site. The last site cannot be deleted; deleting the active
    /// site activates the first remaining one.
    pub fn delete_site(&mut self, id: SiteId) -> Result<Site, WorkspaceError> {
        let index = self
            .sites
            .iter()
            .position(|site| site.id() == id)
            .ok_or(WorkspaceError::SiteNotFound(id))?;
        if self.sites.len() == 1 {
            return Err(WorkspaceError::LastSite);
        }
        let removed = self.sites.remove(index);
        if self.active == id {
            self.active = self.sites[0].id();
        }
        Ok(removed)
    }
}

impl Default for SiteWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl From<WorkspaceRecord> for SiteWorkspace {
    fn from(record: WorkspaceRecord) -> Self {
        Self::from_sites(record.sites, record.active_site)
    }
}

impl From<SiteWorkspace> for WorkspaceRecord {
    fn from(workspace: SiteWorkspace) -> Self {
        Self {
            active_site: Some(workspace.active),
            sites: workspace.sites,
        }
    }
}
