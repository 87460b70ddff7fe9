//! RefreshFactorTablesHandler - Command handler installing tables from a source.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::application::CalculationService;
use crate::domain::foundation::{CountryCode, DomainError};
use crate::ports::FactorTableSource;

/// A table the registry refused, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedTable {
    pub country: CountryCode,
    pub reason: String,
}

/// Outcome of a refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RefreshFactorTablesResult {
    pub installed: Vec<CountryCode>,
    pub rejected: Vec<RejectedTable>,
}

/// Pulls every table from a source and installs the valid ones.
///
/// Each table is validated on its own; a rejected table leaves that country's
/// previous table in place and does not block the others.
pub struct RefreshFactorTablesHandler {
    source: Arc<dyn FactorTableSource>,
    service: Arc<RwLock<CalculationService>>,
}

impl RefreshFactorTablesHandler {
    pub fn new(source: Arc<dyn FactorTableSource>, service: Arc<RwLock<CalculationService>>) -> Self {
        Self { source, service }
    }

    pub async fn handle(&self) -> Result<RefreshFactorTablesResult, DomainError> {
        let tables = self.source.fetch_tables().await?;
        let mut result = RefreshFactorTablesResult::default();

        let mut service = self.service.write().await;
        for (country, table) in tables {
            match service.replace_factor_table(country.clone(), table) {
                Ok(()) => result.installed.push(country),
                Err(err) => result.rejected.push(RejectedTable {
                    country,
                    reason: err.to_string(),
                }),
            }
        }

        if result.rejected.is_empty() {
            info!(source = %self.source.describe(), installed = result.installed.len(), "Factor tables refreshed");
        } else {
            warn!(
                source = %self.source.describe(),
                installed = result.installed.len(),
                rejected = result.rejected.len(),
                "Factor tables partially refreshed"
            );
        }
        Ok(result)
    }
}
