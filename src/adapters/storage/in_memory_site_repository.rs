//! In-Memory Site Repository Adapter
//!
//! Keeps sites in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SiteId;
use crate::domain::site::Site;
use crate::ports::{SiteRepository, SiteRepositoryError, SiteUpdate};

/// In-memory storage for site records
#[derive(Debug, Clone, Default)]
pub struct InMemorySiteRepository {
    sites: Arc<RwLock<Vec<Site>>>,
}

impl InMemorySiteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `sites`.
    pub fn with_sites(sites: Vec<Site>) -> Self {
        Self {
            sites: Arc::new(RwLock::new(sites)),
        }
    }

    pub async fn site_count(&self) -> usize {
        self.sites.read().await.len()
    }
}

#[async_trait]
impl SiteRepository for InMemorySiteRepository {
    async fn save(&self, site: &Site) -> Result<(), SiteRepositoryError> {
        let mut sites = self.sites.write().await;
        match sites.iter_mut().find(|s| s.id() == site.id()) {
            Some(existing) => *existing = site.clone(),
            None => sites.push(site.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: SiteId) -> Result<Option<Site>, SiteRepositoryError> {
        Ok(self.sites.read().await.iter().find(|s| s.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Site>, SiteRepositoryError> {
        Ok(self.sites.read().await.clone())
    }

    async fn list_or_seed(&self, seed: &Site) -> Result<Vec<Site>, SiteRepositoryError> {
        let mut sites = self.sites.write().await;
        if sites.is_empty() {
            sites.push(seed.clone());
        }
        Ok(sites.clone())
    }

    async fn update<'a>(&self, id: SiteId, apply: SiteUpdate<'a>) -> Result<Site, SiteRepositoryError> {
        let mut sites = self.sites.write().await;
        let slot = sites
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(SiteRepositoryError::NotFound(id))?;
        let mut draft = slot.clone();
        apply(&mut draft).map_err(SiteRepositoryError::Rejected)?;
        *slot = draft.clone();
        Ok(draft)
    }

    async fn delete(&self, id: SiteId) -> Result<(), SiteRepositoryError> {
        let mut sites = self.sites.write().await;
        let index = sites
            .iter()
            .position(|s| s.id() == id)
            .ok_or(SiteRepositoryError::NotFound(id))?;
        if sites.len() == 1 {
            return Err(SiteRepositoryError::LastSite);
        }
        sites.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_is_upsert() {
        let repo = InMemorySiteRepository::new();
        let mut site = Site::new("Office").unwrap();
        repo.save(&site).await.unwrap();
        site.set_notes("Ground floor only");
        repo.save(&site).await.unwrap();

        assert_eq!(repo.site_count().await, 1);
        let loaded = repo.find_by_id(site.id()).await.unwrap().unwrap();
        assert_eq!(loaded.notes(), "Ground floor only");
    }

    #[tokio::test]
    async fn test_update_applies_in_place() {
        let site = Site::new("Office").unwrap();
        let repo = InMemorySiteRepository::with_sites(vec![site.clone()]);

        let updated = repo
            .update(
                site.id(),
                Box::new(|site: &mut Site| {
                    site.set_company_name("Acme");
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.company_name(), "Acme");
        assert_eq!(repo.find_by_id(site.id()).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_last_site_is_kept() {
        let site = Site::new("Only").unwrap();
        let repo = InMemorySiteRepository::with_sites(vec![site.clone()]);
        assert!(matches!(
            repo.delete(site.id()).await,
            Err(SiteRepositoryError::LastSite)
        ));
        assert_eq!(repo.site_count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_site() {
        let repo = InMemorySiteRepository::new();
        assert!(matches!(
            repo.delete(SiteId::new()).await,
            Err(SiteRepositoryError::NotFound(_))
        ));
    }
}
