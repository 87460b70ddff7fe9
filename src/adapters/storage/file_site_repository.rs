//! File-based Site Repository Adapter
//!
//! Stores every site in a single `sites.json` document, in the same layout
//! the browser application kept in local storage. Writes go to a temporary
//! file that is renamed over the original. Every read-modify-write holds the
//! write lock for its whole duration.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::foundation::SiteId;
use crate::domain::site::Site;
use crate::ports::{SiteRepository, SiteRepositoryError, SiteUpdate};

const SITES_FILE: &str = "sites.json";

/// File-based storage for site records
#[derive(Debug, Clone)]
pub struct FileSiteRepository {
    base_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileSiteRepository {
    /// Create a repository rooted at `base_path` (created on first save).
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn sites_file(&self) -> PathBuf {
        self.base_path.join(SITES_FILE)
    }

    async fn read_all(&self) -> Result<Vec<Site>, SiteRepositoryError> {
        let path = self.sites_file();
        if !fs::try_exists(&path)
            .await
            .map_err(|e| SiteRepositoryError::IoError(e.to_string()))?
        {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| SiteRepositoryError::IoError(e.to_string()))?;

        serde_json::from_str(&json).map_err(|e| SiteRepositoryError::DeserializationFailed(e.to_string()))
    }

    async fn write_all(&self, sites: &[Site]) -> Result<(), SiteRepositoryError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SiteRepositoryError::IoError(e.to_string()))?;

        let json = serde_json::to_string_pretty(sites)
            .map_err(|e| SiteRepositoryError::SerializationFailed(e.to_string()))?;

        let tmp = self.base_path.join(format!("{}.tmp", SITES_FILE));
        fs::write(&tmp, json)
            .await
            .map_err(|e| SiteRepositoryError::IoError(e.to_string()))?;
        fs::rename(&tmp, self.sites_file())
            .await
            .map_err(|e| SiteRepositoryError::IoError(e.to_string()))?;

        debug!(count = sites.len(), path = %self.sites_file().display(), "Wrote sites file");
        Ok(())
    }
}

#[async_trait]
impl SiteRepository for FileSiteRepository {
    async fn save(&self, site: &Site) -> Result<(), SiteRepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut sites = self.read_all().await?;
        match sites.iter_mut().find(|s| s.id() == site.id()) {
            Some(existing) => *existing = site.clone(),
            None => sites.push(site.clone()),
        }
        self.write_all(&sites).await
    }

    async fn find_by_id(&self, id: SiteId) -> Result<Option<Site>, SiteRepositoryError> {
        Ok(self.read_all().await?.into_iter().find(|s| s.id() == id))
    }

    async fn list(&self) -> Result<Vec<Site>, SiteRepositoryError> {
        self.read_all().await
    }

    async fn list_or_seed(&self, seed: &Site) -> Result<Vec<Site>, SiteRepositoryError> {
        let _guard = self.write_lock.lock().await;
        let sites = self.read_all().await?;
        if !sites.is_empty() {
            return Ok(sites);
        }
        let sites = vec![seed.clone()];
        self.write_all(&sites).await?;
        Ok(sites)
    }

    async fn update<'a>(&self, id: SiteId, apply: SiteUpdate<'a>) -> Result<Site, SiteRepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut sites = self.read_all().await?;
        let site = sites
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(SiteRepositoryError::NotFound(id))?;
        apply(site).map_err(SiteRepositoryError::Rejected)?;
        let updated = site.clone();
        self.write_all(&sites).await?;
        Ok(updated)
    }

    async fn delete(&self, id: SiteId) -> Result<(), SiteRepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut sites = self.read_all().await?;
        let index = sites
            .iter()
            .position(|s| s.id() == id)
            .ok_or(SiteRepositoryError::NotFound(id))?;
        if sites.len() == 1 {
            return Err(SiteRepositoryError::LastSite);
        }
        sites.remove(index);
        self.write_all(&sites).await
    }
}
