//! In-Memory Preference Store Adapter

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{CountryCode, SiteId};
use crate::ports::{PreferenceStore, PreferenceStoreError, Preferences};

#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    preferences: Arc<RwLock<Preferences>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn load(&self) -> Result<Preferences, PreferenceStoreError> {
        Ok(self.preferences.read().await.clone())
    }

    async fn save(&self, preferences: &Preferences) -> Result<(), PreferenceStoreError> {
        *self.preferences.write().await = preferences.clone();
        Ok(())
    }

    async fn save_country(&self, country: &CountryCode) -> Result<(), PreferenceStoreError> {
        self.preferences.write().await.country = Some(country.clone());
        Ok(())
    }

    async fn save_active_site(&self, site: SiteId) -> Result<(), PreferenceStoreError> {
        self.preferences.write().await.active_site = Some(site);
        Ok(())
    }
}
