//! One-pass emissions report for a site.

use serde::{Deserialize, Serialize};

use super::{
    ActiveFactors, CategoryRows, CategoryTotals, EmissionsAggregator, EmissionsError, EmissionsKpis,
    MonthlyTotals, ScopeBreakdown, ScopeClassifier, TimeSeriesAggregator, YearComparison,
};
use crate::domain::foundation::CountryCode;

/// Every output of the engine, computed against a single factor table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsReport {
    pub country: CountryCode,
    pub category_totals: CategoryTotals,
    pub grand_total: f64,
    pub monthly_totals: MonthlyTotals,
    pub year_comparison: YearComparison,
    pub scope_breakdown: ScopeBreakdown,
    pub kpis: EmissionsKpis,
}

impl EmissionsReport {
    pub fn compute(
        data: &CategoryRows,
        factors: &ActiveFactors<'_>,
        classifier: &ScopeClassifier,
        current_year: i32,
    ) -> Result<Self, EmissionsError> {
        let category_totals = EmissionsAggregator::category_totals(data, factors)?;
        let grand_total = category_totals.grand_total();
        let monthly_totals = TimeSeriesAggregator::monthly_totals(data, factors)?;
        let year_comparison = TimeSeriesAggregator::year_comparison(data, factors, current_year)?;
        let scope_breakdown = classifier.breakdown(data, factors)?;
        let kpis = EmissionsKpis::compute(grand_total, &year_comparison, &monthly_totals, current_year);

        Ok(Self {
            country: factors.country.clone(),
            category_totals,
            grand_total,
            monthly_totals,
            year_comparison,
            scope_breakdown,
            kpis,
        })
    }
}

/// Tonnes CO2e with three decimals, e.g. `0.041 tCO₂e`.
pub fn format_tonnes(tonnes: f64) -> String {
    format!("{:.3} tCO₂e", tonnes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emissions::{ActivityCategory, ActivityRow, FactorRegistry};

    #[test]
    fn report_outputs_agree_with_each_other() {
        let registry = FactorRegistry::builtin();
        let uk = CountryCode::uk();
        let factors = ActiveFactors::new(&uk, registry.table(&uk).unwrap());

        let mut data = CategoryRows::new();
        data.water
            .push(ActivityRow::from_parts(ActivityCategory::Water, "water", "", 2025, [10.0; 12]).unwrap());
        data.energy.push(
            ActivityRow::from_parts(ActivityCategory::Energy, "electricity", "", 2024, [100.0; 12]).unwrap(),
        );

        let report = EmissionsReport::compute(&data, &factors, &ScopeClassifier::default(), 2026).unwrap();
        let monthly_sum: f64 = report.monthly_totals.iter().sum();
        let yearly_sum: f64 = report.year_comparison.iter().map(|(_, total)| total).sum();

        assert!((monthly_sum - report.grand_total).abs() < 1e-9);
        assert!((yearly_sum - report.grand_total).abs() < 1e-9);
        assert!((report.scope_breakdown.total() - report.grand_total).abs() < 1e-9);
        assert_eq!(report.kpis.latest_year, 2025);
        assert_eq!(report.country, uk);
    }

    #[test]
    fn tonnes_format_to_three_decimals() {
        assert_eq!(format_tonnes(0.04128), "0.041 tCO₂e");
        assert_eq!(format_tonnes(12.0), "12.000 tCO₂e");
    }
}
