//! File-based Factor Table Source
//!
//! Reads per-country factor tables from a YAML or JSON document keyed by
//! country code:
//!
//! ```yaml
//! UK:
//!   version: "2025.2"
//!   source: UK Government GHG Conversion Factors 2025
//!   last_updated: 2025-07-01
//!   factors:
//!     water: 0.344
//!     electricity: 0.177
//! ```

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::emissions::EmissionFactorTable;
use crate::domain::foundation::CountryCode;
use crate::ports::{FactorSourceError, FactorTableSource};

type FactorTables = BTreeMap<CountryCode, EmissionFactorTable>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FactorFileFormat {
    Yaml,
    Json,
}

impl FactorFileFormat {
    fn from_path(path: &Path) -> Result<Self, FactorSourceError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            other => Err(FactorSourceError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    fn parse(&self, content: &str) -> Result<FactorTables, FactorSourceError> {
        match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| FactorSourceError::ParseFailed(e.to_string())),
            Self::Json => serde_json::from_str(content).map_err(|e| FactorSourceError::ParseFailed(e.to_string())),
        }
    }
}

/// Factor tables loaded from a file on disk.
#[derive(Debug, Clone)]
pub struct FileFactorSource {
    path: PathBuf,
}

impl FileFactorSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FactorTableSource for FileFactorSource {
    async fn fetch_tables(&self) -> Result<FactorTables, FactorSourceError> {
        let format = FactorFileFormat::from_path(&self.path)?;

        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FactorSourceError::NotFound(self.path.display().to_string()))
            }
            Err(e) => return Err(FactorSourceError::IoError(e.to_string())),
        };

        format.parse(&content)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const YAML: &str = r#"
PORTUGAL:
  version: "2025.1"
  source: APA national inventory
  last_updated: 2025-03-01
  factors:
    water: 0.3
    electricity: 0.12
"#;

    #[tokio::test]
    async fn test_reads_yaml_tables() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("factors.yaml");
        std::fs::write(&path, YAML).unwrap();

        let tables = FileFactorSource::new(&path).fetch_tables().await.unwrap();
        let portugal = tables.get(&CountryCode::new("PORTUGAL").unwrap()).unwrap();
        assert_eq!(portugal.get("electricity"), Some(0.12));
        assert_eq!(portugal.last_updated, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[tokio::test]
    async fn test_reads_json_tables_and_normalises_codes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("factors.json");
        std::fs::write(&path, r#"{"uk": {"factors": {"water": 0.5}}}"#).unwrap();

        let tables = FileFactorSource::new(&path).fetch_tables().await.unwrap();
        assert_eq!(tables.get(&CountryCode::uk()).unwrap().get("water"), Some(0.5));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileFactorSource::new(temp_dir.path().join("absent.yaml"));
        assert!(matches!(
            source.fetch_tables().await,
            Err(FactorSourceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_extension_is_rejected() {
        let source = FileFactorSource::new("factors.csv");
        assert!(matches!(
            source.fetch_tables().await,
            Err(FactorSourceError::UnsupportedFormat(ext)) if ext == "csv"
        ));
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("factors.yml");
        std::fs::write(&path, "UK: 42").unwrap();

        assert!(matches!(
            FileFactorSource::new(&path).fetch_tables().await,
            Err(FactorSourceError::ParseFailed(_))
        ));
    }
}
