//! CalculationService - Entry point for every emissions computation.
//!
//! Owns the factor registry and the active country. Each operation resolves
//! the active table exactly once, so all outputs of a call are computed under
//! the same factors.

use chrono::{Datelike, Utc};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::domain::emissions::{
    ActiveFactors, ActivityCategory, ActivityRow, CategoryRows, CategoryTotals, ClassificationMode,
    EmissionFactorTable, EmissionsAggregator, EmissionsError, EmissionsKpis, EmissionsReport,
    FactorRegistry, MonthlyTotals, ScopeBreakdown, ScopeClassifier, TimeSeriesAggregator,
    YearComparison,
};
use crate::domain::foundation::CountryCode;

/// Calculation facade over a single site's rows.
#[derive(Debug, Clone)]
pub struct CalculationService {
    registry: FactorRegistry,
    country: CountryCode,
    classifier: ScopeClassifier,
}

impl CalculationService {
    /// Creates a service with `country` active.
    ///
    /// # Errors
    ///
    /// `UnknownCountry` if the registry holds no table for `country`.
    pub fn new(registry: FactorRegistry, country: CountryCode) -> Result<Self, EmissionsError> {
        registry.table(&country)?;
        Ok(Self {
            registry,
            country,
            classifier: ScopeClassifier::default(),
        })
    }

    /// Built-in tables with the UK active.
    pub fn with_builtin_factors() -> Self {
        Self {
            registry: FactorRegistry::builtin(),
            country: CountryCode::uk(),
            classifier: ScopeClassifier::default(),
        }
    }

    pub fn with_classification(mut self, mode: ClassificationMode) -> Self {
        self.classifier = ScopeClassifier::new(mode);
        self
    }

    pub fn classification_mode(&self) -> ClassificationMode {
        self.classifier.mode()
    }

    // ─────────────────────────────────────────────────────────────────
    // Country selection
    // ─────────────────────────────────────────────────────────────────

    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    /// Switches the active country. The selection is unchanged on error.
    pub fn set_country(&mut self, country: CountryCode) -> Result<(), EmissionsError> {
        if !self.registry.supports(&country) {
            warn!(country = %country, "Rejected switch to unsupported country");
            return Err(EmissionsError::UnknownCountry(country));
        }
        if self.country != country {
            info!(from = %self.country, to = %country, "Active country changed");
            self.country = country;
        }
        Ok(())
    }

    pub fn supported_countries(&self) -> Vec<CountryCode> {
        self.registry.countries().cloned().collect()
    }

    // ─────────────────────────────────────────────────────────────────
    // Factor tables
    // ─────────────────────────────────────────────────────────────────

    /// Factor for `key` in the active country's table.
    pub fn factor(&self, key: &str) -> Result<f64, EmissionsError> {
        self.registry.factor(&self.country, key)
    }

    pub fn factor_for(&self, country: &CountryCode, key: &str) -> Result<f64, EmissionsError> {
        self.registry.factor(country, key)
    }

    pub fn factor_table(&self, country: &CountryCode) -> Result<&EmissionFactorTable, EmissionsError> {
        self.registry.table(country)
    }

    pub fn active_factor_table(&self) -> Result<&EmissionFactorTable, EmissionsError> {
        self.registry.table(&self.country)
    }

    pub fn factor_tables(&self) -> &BTreeMap<CountryCode, EmissionFactorTable> {
        self.registry.tables()
    }

    /// Replaces (or registers) a country's table after validating it.
    pub fn replace_factor_table(
        &mut self,
        country: CountryCode,
        table: EmissionFactorTable,
    ) -> Result<(), EmissionsError> {
        let factor_count = table.len();
        match self.registry.replace_table(country.clone(), table) {
            Ok(previous) => {
                info!(
                    country = %country,
                    factors = factor_count,
                    replaced = previous.is_some(),
                    "Emission factor table installed"
                );
                Ok(())
            }
            Err(err) => {
                warn!(country = %country, error = %err, "Rejected emission factor table");
                Err(err)
            }
        }
    }

    fn active_factors(&self) -> Result<ActiveFactors<'_>, EmissionsError> {
        let table = self.registry.table(&self.country)?;
        Ok(ActiveFactors::new(&self.country, table))
    }

    // ─────────────────────────────────────────────────────────────────
    // Calculations
    // ─────────────────────────────────────────────────────────────────

    /// Tonnes CO2e of a single row under the active country.
    pub fn row_co2e(&self, category: ActivityCategory, row: &ActivityRow) -> Result<f64, EmissionsError> {
        EmissionsAggregator::row_emissions(category, row, &self.active_factors()?)
    }

    pub fn category_total(
        &self,
        category: ActivityCategory,
        rows: &[ActivityRow],
    ) -> Result<f64, EmissionsError> {
        EmissionsAggregator::category_total(category, rows, &self.active_factors()?)
    }

    pub fn category_totals(&self, data: &CategoryRows) -> Result<CategoryTotals, EmissionsError> {
        EmissionsAggregator::category_totals(data, &self.active_factors()?)
    }

    /// Recomputes every row and returns the grand total.
    pub fn calculate_all_totals(&self, data: &CategoryRows) -> Result<f64, EmissionsError> {
        let totals = self.category_totals(data)?;
        debug!(country = %self.country, rows = data.row_count(), "Recomputed all totals");
        Ok(totals.grand_total())
    }

    pub fn monthly_totals(&self, data: &CategoryRows) -> Result<MonthlyTotals, EmissionsError> {
        TimeSeriesAggregator::monthly_totals(data, &self.active_factors()?)
    }

    /// Year comparison anchored at the current calendar year.
    pub fn year_comparison(&self, data: &CategoryRows) -> Result<YearComparison, EmissionsError> {
        self.year_comparison_at(data, current_year())
    }

    pub fn year_comparison_at(
        &self,
        data: &CategoryRows,
        current_year: i32,
    ) -> Result<YearComparison, EmissionsError> {
        TimeSeriesAggregator::year_comparison(data, &self.active_factors()?, current_year)
    }

    pub fn scope_breakdown(&self, data: &CategoryRows) -> Result<ScopeBreakdown, EmissionsError> {
        self.classifier.breakdown(data, &self.active_factors()?)
    }

    /// Every output in one pass.
    pub fn report(&self, data: &CategoryRows) -> Result<EmissionsReport, EmissionsError> {
        self.report_at(data, current_year())
    }

    pub fn report_at(&self, data: &CategoryRows, current_year: i32) -> Result<EmissionsReport, EmissionsError> {
        let report = EmissionsReport::compute(data, &self.active_factors()?, &self.classifier, current_year)?;
        debug!(
            country = %self.country,
            rows = data.row_count(),
            grand_total = report.grand_total,
            "Computed emissions report"
        );
        Ok(report)
    }

    pub fn kpis(&self, data: &CategoryRows) -> Result<EmissionsKpis, EmissionsError> {
        Ok(self.report(data)?.kpis)
    }
}

impl Default for CalculationService {
    fn default() -> Self {
        Self::with_builtin_factors()
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}
