//! Emissions Module - Factor registry, activity model and pure calculations.
//!
//! # Components
//!
//! - `FactorRegistry` - Per-country emission factor tables (UK, Brazil built in)
//! - `CategoryRows` / `ActivityRow` - Monthly activity quantities per category
//! - `EmissionsAggregator` - Row and category totals in tonnes CO2e
//! - `TimeSeriesAggregator` - Monthly profile and year comparison
//! - `ScopeClassifier` - GHG Protocol scope breakdown
//! - `EmissionsReport` / `EmissionsKpis` - One-pass outputs for a site
//!
//! Every computation takes an [`ActiveFactors`] captured once for the pass,
//! so a country switch can never mix two tables in one result.

mod activity;
mod aggregation;
mod category;
mod emission_type;
mod errors;
mod factors;
mod kpis;
mod report;
mod scope;
mod time_series;

pub use activity::{ActivityRow, CategoryRows, RowIssue, MONTHS_PER_YEAR};
pub use aggregation::{CategoryTotals, EmissionsAggregator, KG_PER_TONNE};
pub use category::ActivityCategory;
pub use emission_type::EmissionType;
pub use errors::EmissionsError;
pub use factors::{ActiveFactors, EmissionFactorTable, FactorRegistry};
pub use kpis::EmissionsKpis;
pub use report::{format_tonnes, EmissionsReport};
pub use scope::{ClassificationMode, Scope, ScopeBreakdown, ScopeClassifier};
pub use time_series::{MonthlyTotals, TimeSeriesAggregator, YearComparison, MIN_COMPARISON_YEARS};
