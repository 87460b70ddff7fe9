//! Headline figures for the emissions dashboard.

use serde::{Deserialize, Serialize};

use super::{MonthlyTotals, YearComparison, MONTHS_PER_YEAR};

/// Summary indicators derived from a site's totals and series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsKpis {
    pub total_emissions: f64,
    pub latest_year: i32,
    pub latest_year_total: f64,
    pub previous_year: Option<i32>,
    pub previous_year_total: Option<f64>,
    /// Year-on-year change in percent; `None` when the previous year is zero.
    pub percent_change: Option<f64>,
    pub average_monthly: f64,
}

impl EmissionsKpis {
    /// Derives the indicators.
    ///
    /// The average is taken over months with non-zero emissions, falling back
    /// to the latest year's total spread over twelve months.
    pub fn compute(
        grand_total: f64,
        comparison: &YearComparison,
        monthly: &MonthlyTotals,
        current_year: i32,
    ) -> Self {
        let (latest_year, latest_year_total) = comparison.latest().unwrap_or((current_year, 0.0));
        let previous = comparison.previous();

        let percent_change = previous
            .map(|(_, total)| total)
            .filter(|total| *total > 0.0)
            .map(|total| (latest_year_total - total) / total * 100.0);

        let active: Vec<f64> = monthly.iter().copied().filter(|value| *value > 0.0).collect();
        let average_monthly = if active.is_empty() {
            latest_year_total / MONTHS_PER_YEAR as f64
        } else {
            active.iter().sum::<f64>() / active.len() as f64
        };

        Self {
            total_emissions: grand_total,
            latest_year,
            latest_year_total,
            previous_year: previous.map(|(year, _)| year),
            previous_year_total: previous.map(|(_, total)| total),
            percent_change,
            average_monthly,
        }
    }
}
