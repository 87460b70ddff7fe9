//! Monthly profile and year-over-year comparison.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ActiveFactors, ActivityCategory, CategoryRows, EmissionsAggregator, EmissionsError, KG_PER_TONNE, MONTHS_PER_YEAR};
use crate::domain::foundation::ReportingYear;

/// Twelve monthly buckets of tonnes CO2e, January first.
pub type MonthlyTotals = [f64; MONTHS_PER_YEAR];

/// Minimum number of years a comparison exposes.
pub const MIN_COMPARISON_YEARS: usize = 3;

/// Tonnes CO2e per reporting year, ascending and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearComparison(BTreeMap<i32, f64>);

impl YearComparison {
    pub fn get(&self, year: i32) -> Option<f64> {
        self.0.get(&year).copied()
    }

    /// Years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.0.iter().map(|(year, total)| (*year, *total))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recent year and its total.
    pub fn latest(&self) -> Option<(i32, f64)> {
        self.0.iter().next_back().map(|(year, total)| (*year, *total))
    }

    /// The year immediately preceding the latest entry, if present.
    pub fn previous(&self) -> Option<(i32, f64)> {
        self.0.iter().rev().nth(1).map(|(year, total)| (*year, *total))
    }

    pub fn into_inner(self) -> BTreeMap<i32, f64> {
        self.0
    }
}

impl From<BTreeMap<i32, f64>> for YearComparison {
    fn from(map: BTreeMap<i32, f64>) -> Self {
        Self(map)
    }
}

/// Series derived from a site's rows.
pub struct TimeSeriesAggregator;

impl TimeSeriesAggregator {
    /// Emissions per calendar month, summed over all categories and years.
    pub fn monthly_totals(
        data: &CategoryRows,
        factors: &ActiveFactors<'_>,
    ) -> Result<MonthlyTotals, EmissionsError> {
        let mut totals = [0.0; MONTHS_PER_YEAR];
        for (category, row) in data.iter() {
            let factor = factors.factor(row.effective_emission_type(category).as_str())?;
            for (month, bucket) in totals.iter_mut().enumerate() {
                *bucket += row.quantity(month) * factor / KG_PER_TONNE;
            }
        }
        Ok(totals)
    }

    /// Emissions grouped by row year.
    ///
    /// Only years within the reporting range take part. The two years before
    /// the earliest present year are added at zero unless they fall before
    /// the range, and further zero years follow the earliest until at least
    /// three are present. With no rows the result is the three years ending
    /// at `current_year`.
    pub fn year_comparison(
        data: &CategoryRows,
        factors: &ActiveFactors<'_>,
        current_year: i32,
    ) -> Result<YearComparison, EmissionsError> {
        let mut years: BTreeMap<i32, f64> = BTreeMap::new();
        for (category, row) in data.iter() {
            if !ReportingYear::contains(row.year()) {
                continue;
            }
            let co2e = EmissionsAggregator::row_emissions(category, row, factors)?;
            *years.entry(row.year()).or_insert(0.0) += co2e;
        }

        let Some(earliest) = years.keys().next().copied() else {
            let first = current_year.saturating_sub(2);
            return Ok(YearComparison((first..=first + 2).map(|year| (year, 0.0)).collect()));
        };

        for year in [earliest - 1, earliest - 2] {
            if year >= ReportingYear::MIN {
                years.entry(year).or_insert(0.0);
            }
        }

        let mut next = earliest + 1;
        while years.len() < MIN_COMPARISON_YEARS {
            years.entry(next).or_insert(0.0);
            next += 1;
        }

        Ok(YearComparison(years))
    }

    /// Emissions of one category per month.
    pub fn category_monthly_totals(
        category: ActivityCategory,
        data: &CategoryRows,
        factors: &ActiveFactors<'_>,
    ) -> Result<MonthlyTotals, EmissionsError> {
        let mut totals = [0.0; MONTHS_PER_YEAR];
        for row in data.rows(category) {
            let factor = factors.factor(row.effective_emission_type(category).as_str())?;
            for (month, bucket) in totals.iter_mut().enumerate() {
                *bucket += row.quantity(month) * factor / KG_PER_TONNE;
            }
        }
        Ok(totals)
    }
}
