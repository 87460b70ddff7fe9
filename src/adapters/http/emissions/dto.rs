//! HTTP DTOs for emissions endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::emissions::{CategoryRows, EmissionFactorTable, EmissionsReport, RowIssue};
use crate::domain::foundation::{CountryCode, ReportingYear};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to switch the active country.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCountryRequest {
    pub country: String,
}

/// Request to compute a report for ad-hoc rows.
///
/// `country` computes under another table without changing the active one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub data: CategoryRows,
    /// Anchor year for the year comparison; defaults to the current year.
    /// Years outside the reporting range are rejected while parsing.
    #[serde(default)]
    pub current_year: Option<ReportingYear>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub data: CategoryRows,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryListResponse {
    pub countries: Vec<CountryCode>,
    pub active: CountryCode,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryResponse {
    pub country: CountryCode,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorTableResponse {
    pub country: CountryCode,
    pub factor_count: usize,
    #[serde(flatten)]
    pub table: EmissionFactorTable,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    #[serde(flatten)]
    pub report: EmissionsReport,
    /// Grand total formatted for display, e.g. `0.041 tCO₂e`.
    pub formatted_total: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
    pub row_count: usize,
    pub issues: Vec<RowIssue>,
}
