//! Emission factor tables and the per-country registry.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ActivityCategory, EmissionType, EmissionsError};
use crate::domain::foundation::CountryCode;

/// kg CO2e per declared unit, keyed by emission type, for one country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactorTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
    factors: BTreeMap<String, f64>,
}

impl EmissionFactorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches provenance metadata.
    pub fn with_metadata(
        mut self,
        version: impl Into<String>,
        source: impl Into<String>,
        last_updated: Option<NaiveDate>,
    ) -> Self {
        self.version = Some(version.into());
        self.source = Some(source.into());
        self.last_updated = last_updated;
        self
    }

    /// Adds or overwrites one factor (builder form).
    pub fn with_factor(mut self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.factors.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.factors.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factors.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.factors.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Category-declared keys this table cannot resolve.
    pub fn missing_declared_keys(&self) -> Vec<String> {
        ActivityCategory::declared_emission_types()
            .filter(|key| !self.contains(key))
            .map(str::to_string)
            .collect()
    }

    /// Checks completeness and that every factor is finite and non-negative.
    pub fn validate(&self, country: &CountryCode) -> Result<(), EmissionsError> {
        let missing = self.missing_declared_keys();
        if !missing.is_empty() {
            return Err(EmissionsError::IncompleteFactorTable {
                country: country.clone(),
                missing,
            });
        }
        if let Some((key, value)) = self.iter().find(|(_, value)| !value.is_finite() || *value < 0.0) {
            return Err(EmissionsError::InvalidFactor {
                country: country.clone(),
                key: key.to_string(),
                value,
            });
        }
        Ok(())
    }
}

static BUILTIN_TABLES: Lazy<BTreeMap<CountryCode, EmissionFactorTable>> = Lazy::new(|| {
    let mut tables = BTreeMap::new();
    tables.insert(CountryCode::uk(), uk_2025());
    tables.insert(CountryCode::brazil(), brazil_2025());
    tables
});

// UK Government GHG Conversion Factors 2025.
fn uk_2025() -> EmissionFactorTable {
    EmissionFactorTable::new()
        .with_metadata(
            "2025.1",
            "UK Government GHG Conversion Factors 2025",
            NaiveDate::from_ymd_opt(2025, 6, 1),
        )
        .with_factor(EmissionType::WATER, 0.344)
        .with_factor(EmissionType::WASTEWATER, 0.708)
        .with_factor(EmissionType::ELECTRICITY, 0.177)
        .with_factor(EmissionType::NATURAL_GAS, 0.183)
        .with_factor(EmissionType::DIESEL, 0.246)
        .with_factor(EmissionType::WASTE, 21.28)
        .with_factor(EmissionType::WASTE_RECYCLED, 0.021)
        .with_factor(EmissionType::TRANSPORT_PETROL, 0.168)
        .with_factor(EmissionType::TRANSPORT_DIESEL, 0.171)
        .with_factor(EmissionType::TRANSPORT_ELECTRIC, 0.053)
        .with_factor(EmissionType::FLIGHTS_SHORT, 0.156)
        .with_factor(EmissionType::FLIGHTS_MEDIUM, 0.112)
        .with_factor(EmissionType::FLIGHTS_LONG, 0.103)
        .with_factor(EmissionType::REFRIGERANT_R410A, 2088.0)
        .with_factor(EmissionType::REFRIGERANT_R134A, 1430.0)
        .with_factor(EmissionType::REFRIGERANT_R32, 675.0)
}

// Brazil GHG inventory (SEEG / Observatório do Clima).
fn brazil_2025() -> EmissionFactorTable {
    EmissionFactorTable::new()
        .with_metadata(
            "2025.1",
            "Brazil GHG Inventory - SEEG/Observatório do Clima",
            NaiveDate::from_ymd_opt(2025, 1, 15),
        )
        .with_factor(EmissionType::WATER, 0.421)
        .with_factor(EmissionType::WASTEWATER, 0.856)
        .with_factor(EmissionType::ELECTRICITY, 0.233)
        .with_factor(EmissionType::NATURAL_GAS, 0.202)
        .with_factor(EmissionType::DIESEL, 0.264)
        .with_factor(EmissionType::WASTE, 25.84)
        .with_factor(EmissionType::WASTE_RECYCLED, 0.025)
        .with_factor(EmissionType::TRANSPORT_PETROL, 0.175)
        .with_factor(EmissionType::TRANSPORT_DIESEL, 0.182)
        .with_factor(EmissionType::TRANSPORT_ELECTRIC, 0.062)
        .with_factor(EmissionType::FLIGHTS_SHORT, 0.165)
        .with_factor(EmissionType::FLIGHTS_MEDIUM, 0.118)
        .with_factor(EmissionType::FLIGHTS_LONG, 0.109)
        .with_factor(EmissionType::REFRIGERANT_R410A, 2088.0)
        .with_factor(EmissionType::REFRIGERANT_R134A, 1430.0)
        .with_factor(EmissionType::REFRIGERANT_R32, 675.0)
}

/// Factor tables for every supported country.
///
/// Every table held here resolves all category-declared keys; tables are
/// only admitted through [`FactorRegistry::replace_table`], which checks.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorRegistry {
    tables: BTreeMap<CountryCode, EmissionFactorTable>,
}

impl FactorRegistry {
    /// Registry seeded with the UK and Brazil 2025 tables.
    pub fn builtin() -> Self {
        Self {
            tables: BUILTIN_TABLES.clone(),
        }
    }

    /// Looks up one factor.
    ///
    /// Fails with `UnknownFactor` both for unsupported countries and for keys
    /// missing from a supported country's table.
    pub fn factor(&self, country: &CountryCode, key: &str) -> Result<f64, EmissionsError> {
        self.tables
            .get(country)
            .and_then(|table| table.get(key))
            .ok_or_else(|| EmissionsError::UnknownFactor {
                country: country.clone(),
                key: key.to_string(),
            })
    }

    /// The whole table for `country`.
    pub fn table(&self, country: &CountryCode) -> Result<&EmissionFactorTable, EmissionsError> {
        self.tables
            .get(country)
            .ok_or_else(|| EmissionsError::UnknownCountry(country.clone()))
    }

    pub fn supports(&self, country: &CountryCode) -> bool {
        self.tables.contains_key(country)
    }

    /// Supported countries in alphabetical order.
    pub fn countries(&self) -> impl Iterator<Item = &CountryCode> + '_ {
        self.tables.keys()
    }

    pub fn tables(&self) -> &BTreeMap<CountryCode, EmissionFactorTable> {
        &self.tables
    }

    /// Substitutes the table for `country` wholesale.
    ///
    /// An unknown country becomes supported. The previous table stays in
    /// place if the new one is incomplete or holds invalid factors.
    pub fn replace_table(
        &mut self,
        country: CountryCode,
        table: EmissionFactorTable,
    ) -> Result<Option<EmissionFactorTable>, EmissionsError> {
        table.validate(&country)?;
        Ok(self.tables.insert(country, table))
    }
}

impl Default for FactorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A country code paired with its table, captured once per computation pass.
#[derive(Debug, Clone, Copy)]
pub struct ActiveFactors<'a> {
    pub country: &'a CountryCode,
    pub table: &'a EmissionFactorTable,
}

impl<'a> ActiveFactors<'a> {
    pub fn new(country: &'a CountryCode, table: &'a EmissionFactorTable) -> Self {
        Self { country, table }
    }

    /// Resolves `key`, failing with `UnknownFactor` if the table lacks it.
    pub fn factor(&self, key: &str) -> Result<f64, EmissionsError> {
        self.table
            .get(key)
            .ok_or_else(|| EmissionsError::UnknownFactor {
                country: self.country.clone(),
                key: key.to_string(),
            })
    }
}
