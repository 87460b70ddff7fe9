//! GHG Protocol scope classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ActiveFactors, ActivityCategory, ActivityRow, CategoryRows, EmissionType, EmissionsAggregator, EmissionsError};
use crate::domain::foundation::ValidationError;

/// GHG Protocol reporting scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Direct emissions from owned or controlled sources.
    Scope1,
    /// Indirect emissions from purchased energy.
    Scope2,
    /// All other indirect emissions in the value chain.
    Scope3,
}

impl Scope {
    pub fn all() -> &'static [Scope] {
        &[Scope::Scope1, Scope::Scope2, Scope::Scope3]
    }

    /// Scope of an emission-type key, or `None` if the key is unclassified.
    pub fn for_emission_type(key: &str) -> Option<Scope> {
        match key {
            EmissionType::NATURAL_GAS
            | EmissionType::DIESEL
            | EmissionType::TRANSPORT_PETROL
            | EmissionType::TRANSPORT_DIESEL => Some(Scope::Scope1),
            key if key.starts_with(EmissionType::REFRIGERANT_PREFIX) => Some(Scope::Scope1),
            EmissionType::ELECTRICITY => Some(Scope::Scope2),
            EmissionType::WATER
            | EmissionType::WASTEWATER
            | EmissionType::WASTE
            | EmissionType::WASTE_RECYCLED
            | EmissionType::TRANSPORT_ELECTRIC
            | EmissionType::FLIGHTS_SHORT
            | EmissionType::FLIGHTS_MEDIUM
            | EmissionType::FLIGHTS_LONG => Some(Scope::Scope3),
            _ => None,
        }
    }

    /// Scope assigned to a whole category in compatibility mode.
    pub fn for_category(category: ActivityCategory) -> Scope {
        match category {
            ActivityCategory::Water | ActivityCategory::Waste => Scope::Scope3,
            ActivityCategory::Energy => Scope::Scope2,
            ActivityCategory::Transport | ActivityCategory::Refrigerants => Scope::Scope1,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Scope::Scope1 => 1,
            Scope::Scope2 => 2,
            Scope::Scope3 => 3,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scope {}", self.number())
    }
}

/// How rows are assigned to scopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Per emission type. Unknown keys are an error.
    #[default]
    EmissionType,
    /// Per category, using fixed category scopes. Never fails.
    CategoryCompat,
}

impl FromStr for ClassificationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "emission_type" => Ok(ClassificationMode::EmissionType),
            "category_compat" | "category" => Ok(ClassificationMode::CategoryCompat),
            other => Err(ValidationError::invalid_format(
                "scope_mode",
                format!("unknown classification mode '{}'", other),
            )),
        }
    }
}

/// Tonnes CO2e per scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeBreakdown {
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
}

impl ScopeBreakdown {
    pub fn get(&self, scope: Scope) -> f64 {
        match scope {
            Scope::Scope1 => self.scope1,
            Scope::Scope2 => self.scope2,
            Scope::Scope3 => self.scope3,
        }
    }

    fn add(&mut self, scope: Scope, value: f64) {
        match scope {
            Scope::Scope1 => self.scope1 += value,
            Scope::Scope2 => self.scope2 += value,
            Scope::Scope3 => self.scope3 += value,
        }
    }

    pub fn total(&self) -> f64 {
        self.scope1 + self.scope2 + self.scope3
    }
}

/// Assigns rows to scopes and sums their emissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeClassifier {
    mode: ClassificationMode,
}

impl ScopeClassifier {
    pub fn new(mode: ClassificationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ClassificationMode {
        self.mode
    }

    /// Scope of a single row under the configured mode.
    pub fn classify(&self, category: ActivityCategory, row: &ActivityRow) -> Result<Scope, EmissionsError> {
        match self.mode {
            ClassificationMode::CategoryCompat => Ok(Scope::for_category(category)),
            ClassificationMode::EmissionType => {
                let key = row.effective_emission_type(category);
                Scope::for_emission_type(key.as_str())
                    .ok_or_else(|| EmissionsError::UnclassifiedEmissionType(key.to_string()))
            }
        }
    }

    /// Emissions of every row, bucketed by scope.
    ///
    /// The scopes sum to the grand total of the same rows.
    pub fn breakdown(
        &self,
        data: &CategoryRows,
        factors: &ActiveFactors<'_>,
    ) -> Result<ScopeBreakdown, EmissionsError> {
        let mut breakdown = ScopeBreakdown::default();
        for (category, row) in data.iter() {
            let scope = self.classify(category, row)?;
            let co2e = EmissionsAggregator::row_emissions(category, row, factors)?;
            breakdown.add(scope, co2e);
        }
        Ok(breakdown)
    }
}
