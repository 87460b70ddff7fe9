//! Row and category aggregation: quantities to tonnes CO2e.

use serde::{Deserialize, Serialize};

use super::{ActiveFactors, ActivityCategory, ActivityRow, CategoryRows, EmissionsError, MONTHS_PER_YEAR};

/// Factors are kg CO2e per unit; results are reported in tonnes.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Tonnes CO2e per activity category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub water: f64,
    pub energy: f64,
    pub waste: f64,
    pub transport: f64,
    pub refrigerants: f64,
}

impl CategoryTotals {
    pub fn get(&self, category: ActivityCategory) -> f64 {
        match category {
            ActivityCategory::Water => self.water,
            ActivityCategory::Energy => self.energy,
            ActivityCategory::Waste => self.waste,
            ActivityCategory::Transport => self.transport,
            ActivityCategory::Refrigerants => self.refrigerants,
        }
    }

    fn set(&mut self, category: ActivityCategory, value: f64) {
        match category {
            ActivityCategory::Water => self.water = value,
            ActivityCategory::Energy => self.energy = value,
            ActivityCategory::Waste => self.waste = value,
            ActivityCategory::Transport => self.transport = value,
            ActivityCategory::Refrigerants => self.refrigerants = value,
        }
    }

    /// Sum over all five categories.
    pub fn grand_total(&self) -> f64 {
        ActivityCategory::all()
            .iter()
            .map(|category| self.get(*category))
            .sum()
    }

    /// Category with the highest total, if any category is non-zero.
    pub fn largest(&self) -> Option<(ActivityCategory, f64)> {
        ActivityCategory::all()
            .iter()
            .map(|category| (*category, self.get(*category)))
            .filter(|(_, total)| *total > 0.0)
            .fold(None, |best, candidate| match best {
                Some((_, best_total)) if best_total >= candidate.1 => best,
                _ => Some(candidate),
            })
    }
}

/// Pure conversions from activity rows to emissions.
pub struct EmissionsAggregator;

impl EmissionsAggregator {
    /// Sum of the row's twelve monthly quantities.
    pub fn row_total(row: &ActivityRow) -> f64 {
        (0..MONTHS_PER_YEAR).map(|month| row.quantity(month)).sum()
    }

    /// Tonnes CO2e for a row at the given factor, unrounded.
    pub fn row_co2e(row: &ActivityRow, factor: f64) -> f64 {
        Self::row_total(row) * factor / KG_PER_TONNE
    }

    /// Resolves the row's effective emission type and converts it.
    pub fn row_emissions(
        category: ActivityCategory,
        row: &ActivityRow,
        factors: &ActiveFactors<'_>,
    ) -> Result<f64, EmissionsError> {
        let key = row.effective_emission_type(category);
        let factor = factors.factor(key.as_str())?;
        Ok(Self::row_co2e(row, factor))
    }

    /// Sum of row emissions for one category. An empty list totals zero.
    pub fn category_total(
        category: ActivityCategory,
        rows: &[ActivityRow],
        factors: &ActiveFactors<'_>,
    ) -> Result<f64, EmissionsError> {
        rows.iter().try_fold(0.0, |total, row| {
            Ok(total + Self::row_emissions(category, row, factors)?)
        })
    }

    /// Totals for every category of a site.
    pub fn category_totals(
        data: &CategoryRows,
        factors: &ActiveFactors<'_>,
    ) -> Result<CategoryTotals, EmissionsError> {
        let mut totals = CategoryTotals::default();
        for category in ActivityCategory::all() {
            let total = Self::category_total(*category, data.rows(*category), factors)?;
            totals.set(*category, total);
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emissions::FactorRegistry;
    use crate::domain::foundation::CountryCode;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn row(category: ActivityCategory, key: &str, months: [f64; 12]) -> ActivityRow {
        ActivityRow::from_parts(category, key, "", 2025, months).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn row_total_sums_months() {
        let water = row(ActivityCategory::Water, "water", [10.0; 12]);
        assert_close(EmissionsAggregator::row_total(&water), 120.0);
    }

    #[test]
    fn row_co2e_converts_kg_to_tonnes() {
        let water = row(ActivityCategory::Water, "water", [10.0; 12]);
        assert_close(EmissionsAggregator::row_co2e(&water, 0.344), 0.04128);
        assert_close(EmissionsAggregator::row_co2e(&water, 0.421), 0.05052);
    }

    #[test]
    fn category_total_of_empty_list_is_zero() {
        let registry = FactorRegistry::builtin();
        let uk = CountryCode::uk();
        let factors = ActiveFactors::new(&uk, registry.table(&uk).unwrap());
        let total = EmissionsAggregator::category_total(ActivityCategory::Energy, &[], &factors);
        assert_eq!(total, Ok(0.0));
    }

    #[test]
    fn category_totals_use_row_specific_factors() {
        let registry = FactorRegistry::builtin();
        let uk = CountryCode::uk();
        let factors = ActiveFactors::new(&uk, registry.table(&uk).unwrap());

        let mut data = CategoryRows::new();
        data.energy.push(row(ActivityCategory::Energy, "electricity", [1000.0; 12]));
        data.energy.push(row(ActivityCategory::Energy, "naturalGas", [500.0; 12]));
        data.refrigerants.push(row(
            ActivityCategory::Refrigerants,
            "refrigerant_R32",
            [0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ));

        let totals = EmissionsAggregator::category_totals(&data, &factors).unwrap();
        assert_close(totals.energy, 12000.0 * 0.177 / 1000.0 + 6000.0 * 0.183 / 1000.0);
        assert_close(totals.refrigerants, 2.0 * 675.0 / 1000.0);
        assert_eq!(totals.water, 0.0);
        assert_close(totals.grand_total(), totals.energy + totals.refrigerants);
        assert_eq!(totals.largest().map(|(c, _)| c), Some(ActivityCategory::Energy));
    }

    #[test]
    fn unknown_row_key_aborts_the_category() {
        let registry = FactorRegistry::builtin();
        let uk = CountryCode::uk();
        let factors = ActiveFactors::new(&uk, registry.table(&uk).unwrap());
        let json = r#"{"emissionType": "steam", "year": 2025, "months": [1,1,1,1,1,1,1,1,1,1,1,1]}"#;
        let legacy: ActivityRow = serde_json::from_str(json).unwrap();

        let err = EmissionsAggregator::category_total(ActivityCategory::Energy, &[legacy], &factors)
            .unwrap_err();
        assert!(matches!(err, EmissionsError::UnknownFactor { ref key, .. } if key == "steam"));
    }

    #[test]
    fn largest_is_none_without_emissions() {
        assert_eq!(CategoryTotals::default().largest(), None);
    }

    fn months_strategy() -> impl Strategy<Value = [f64; 12]> {
        prop::array::uniform12(0.0f64..10_000.0)
    }

    proptest! {
        #[test]
        fn doubling_factor_doubles_co2e(months in months_strategy(), factor in 0.0f64..3000.0) {
            let r = row(ActivityCategory::Water, "water", months);
            let single = EmissionsAggregator::row_co2e(&r, factor);
            let double = EmissionsAggregator::row_co2e(&r, factor * 2.0);
            prop_assert!((double - 2.0 * single).abs() <= 1e-9 * double.abs().max(1.0));
        }

        #[test]
        fn co2e_is_monotone_in_each_month(
            months in months_strategy(),
            month in 0usize..12,
            bump in 0.0f64..1000.0,
        ) {
            let before = row(ActivityCategory::Waste, "waste", months);
            let mut raised = months;
            raised[month] += bump;
            let after = row(ActivityCategory::Waste, "waste", raised);
            prop_assert!(
                EmissionsAggregator::row_co2e(&after, 21.28)
                    >= EmissionsAggregator::row_co2e(&before, 21.28)
            );
        }

        #[test]
        fn category_total_is_order_independent(
            rows in prop::collection::vec(months_strategy(), 0..8),
        ) {
            let registry = FactorRegistry::builtin();
            let uk = CountryCode::uk();
            let factors = ActiveFactors::new(&uk, registry.table(&uk).unwrap());

            let forward: Vec<_> = rows
                .iter()
                .map(|months| row(ActivityCategory::Transport, "flights_long", *months))
                .collect();
            let mut reversed = forward.clone();
            reversed.reverse();

            let expected: f64 = forward
                .iter()
                .map(|r| EmissionsAggregator::row_co2e(r, 0.103))
                .sum();
            let a = EmissionsAggregator::category_total(ActivityCategory::Transport, &forward, &factors).unwrap();
            let b = EmissionsAggregator::category_total(ActivityCategory::Transport, &reversed, &factors).unwrap();
            let tolerance = 1e-9 * expected.max(1.0);
            prop_assert!((a - expected).abs() <= tolerance);
            prop_assert!((a - b).abs() <= tolerance);
        }
    }
}
