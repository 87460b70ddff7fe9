//! File-based Preference Store Adapter
//!
//! Stores preferences as `preferences.json` next to the site data.
//! Single-field updates hold the write lock across read and write.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::{CountryCode, SiteId};
use crate::ports::{PreferenceStore, PreferenceStoreError, Preferences};

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    base_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FilePreferenceStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn preferences_file(&self) -> PathBuf {
        self.base_path.join(PREFERENCES_FILE)
    }

    async fn read(&self) -> Result<Preferences, PreferenceStoreError> {
        let path = self.preferences_file();
        if !fs::try_exists(&path)
            .await
            .map_err(|e| PreferenceStoreError::IoError(e.to_string()))?
        {
            return Ok(Preferences::default());
        }

        let json = fs::read_to_string(&path)
            .await
            .map_err(|e| PreferenceStoreError::IoError(e.to_string()))?;

        serde_json::from_str(&json).map_err(|e| PreferenceStoreError::DeserializationFailed(e.to_string()))
    }

    async fn write(&self, preferences: &Preferences) -> Result<(), PreferenceStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| PreferenceStoreError::IoError(e.to_string()))?;

        let json = serde_json::to_string_pretty(preferences)
            .map_err(|e| PreferenceStoreError::SerializationFailed(e.to_string()))?;

        let tmp = self.base_path.join(format!("{}.tmp", PREFERENCES_FILE));
        fs::write(&tmp, json)
            .await
            .map_err(|e| PreferenceStoreError::IoError(e.to_string()))?;
        fs::rename(&tmp, self.preferences_file())
            .await
            .map_err(|e| PreferenceStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn load(&self) -> Result<Preferences, PreferenceStoreError> {
        self.read().await
    }

    async fn save(&self, preferences: &Preferences) -> Result<(), PreferenceStoreError> {
        let _guard = self.write_lock.lock().await;
        self.write(preferences).await
    }

    async fn save_country(&self, country: &CountryCode) -> Result<(), PreferenceStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut preferences = self.read().await?;
        preferences.country = Some(country.clone());
        self.write(&preferences).await
    }

    async fn save_active_site(&self, site: SiteId) -> Result<(), PreferenceStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut preferences = self.read().await?;
        preferences.active_site = Some(site);
        self.write(&preferences).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());
        assert_eq!(store.load().await.unwrap(), Preferences::default());
    }

    #[tokio::test]
    async fn test_country_and_active_site_persist_independently() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());
        let site = SiteId::new();

        store.save_country(&CountryCode::brazil()).await.unwrap();
        store.save_active_site(site).await.unwrap();

        let reopened = FilePreferenceStore::new(temp_dir.path());
        let loaded = reopened.load().await.unwrap();
        assert_eq!(loaded.country, Some(CountryCode::brazil()));
        assert_eq!(loaded.active_site, Some(site));
    }

    #[tokio::test]
    async fn test_concurrent_field_updates_keep_both() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(temp_dir.path());
        let site = SiteId::new();

        let brazil = CountryCode::brazil();
        let (country, active) = tokio::join!(
            store.save_country(&brazil),
            store.save_active_site(site)
        );
        country.unwrap();
        active.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.country, Some(CountryCode::brazil()));
        assert_eq!(loaded.active_site, Some(site));
    }
}
