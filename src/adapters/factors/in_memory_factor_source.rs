//! In-Memory Factor Table Source
//!
//! Serves a fixed set of tables. Useful for testing and for seeding a
//! registry from code.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::emissions::EmissionFactorTable;
use crate::domain::foundation::CountryCode;
use crate::ports::{FactorSourceError, FactorTableSource};

#[derive(Debug, Clone, Default)]
pub struct InMemoryFactorSource {
    tables: BTreeMap<CountryCode, EmissionFactorTable>,
}

impl InMemoryFactorSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, country: CountryCode, table: EmissionFactorTable) -> Self {
        self.tables.insert(country, table);
        self
    }
}

#[async_trait]
impl FactorTableSource for InMemoryFactorSource {
    async fn fetch_tables(
        &self,
    ) -> Result<BTreeMap<CountryCode, EmissionFactorTable>, FactorSourceError> {
        Ok(self.tables.clone())
    }

    fn describe(&self) -> String {
        format!("memory:{} tables", self.tables.len())
    }
}
