//! HTTP handlers for emissions endpoints.
//!
//! These handlers connect Axum routes to the calculation service.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use tracing::warn;

use crate::application::handlers::SetCountryCommand;
use crate::application::CalculationService;
use crate::domain::emissions::{format_tonnes, EmissionFactorTable, EmissionsReport};
use crate::domain::foundation::{CountryCode, DomainError};

use super::dto::{
    CalculateRequest, CalculateResponse, CountryListResponse, CountryResponse, FactorTableResponse,
    SetCountryRequest, ValidateRequest, ValidateResponse,
};
use crate::adapters::http::error::{parse_path, ApiError};
use crate::adapters::http::AppState;

fn parse_country(raw: &str) -> Result<CountryCode, ApiError> {
    parse_path(raw, "country code")
}

/// GET /api/countries
pub async fn list_countries(State(state): State<AppState>) -> Json<CountryListResponse> {
    let service = state.service.read().await;
    Json(CountryListResponse {
        countries: service.supported_countries(),
        active: service.country().clone(),
    })
}

/// GET /api/factors/:country
pub async fn get_factor_table(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<FactorTableResponse>, ApiError> {
    let country = parse_country(&country)?;
    let service = state.service.read().await;
    let table = service.factor_table(&country).map_err(DomainError::from)?;
    Ok(Json(FactorTableResponse {
        factor_count: table.len(),
        table: table.clone(),
        country,
    }))
}

/// PUT /api/factors/:country
///
/// Installs a replacement table. Incomplete tables are rejected and the
/// previous table stays active.
pub async fn replace_factor_table(
    State(state): State<AppState>,
    Path(country): Path<String>,
    payload: Result<Json<EmissionFactorTable>, JsonRejection>,
) -> Result<Json<FactorTableResponse>, ApiError> {
    let country = parse_country(&country)?;
    let Json(table) = payload?;

    let mut service = state.service.write().await;
    service
        .replace_factor_table(country.clone(), table)
        .map_err(DomainError::from)?;
    let installed = service.factor_table(&country).map_err(DomainError::from)?;

    Ok(Json(FactorTableResponse {
        factor_count: installed.len(),
        table: installed.clone(),
        country,
    }))
}

/// GET /api/country
pub async fn get_country(State(state): State<AppState>) -> Json<CountryResponse> {
    let service = state.service.read().await;
    Json(CountryResponse {
        country: service.country().clone(),
    })
}

/// PUT /api/country
pub async fn set_country(
    State(state): State<AppState>,
    payload: Result<Json<SetCountryRequest>, JsonRejection>,
) -> Result<Json<CountryResponse>, ApiError> {
    let Json(request) = payload?;
    let country = parse_country(&request.country)?;

    let country = state
        .set_country_handler()
        .handle(SetCountryCommand { country })
        .await?;
    Ok(Json(CountryResponse { country }))
}

/// POST /api/calculate
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(request) = payload?;

    if let Err(err) = request.data.ensure_valid() {
        warn!(error = %err, "Rejected calculation input");
        return Err(err.into());
    }

    let service = state.service.read().await;
    let report = match &request.country {
        Some(raw) => {
            let country = parse_country(raw)?;
            // Compute under a detached copy so the shared selection is untouched.
            let mut scoped = service.clone();
            scoped.set_country(country).map_err(DomainError::from)?;
            compute(&scoped, &request)?
        }
        None => compute(&service, &request)?,
    };

    Ok(Json(CalculateResponse {
        formatted_total: format_tonnes(report.grand_total),
        report,
    }))
}

fn compute(service: &CalculationService, request: &CalculateRequest) -> Result<EmissionsReport, ApiError> {
    let report = match request.current_year {
        Some(year) => service.report_at(&request.data, year.value()),
        None => service.report(&request.data),
    };
    Ok(report.map_err(DomainError::from)?)
}

/// POST /api/validate
pub async fn validate(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let Json(request) = payload?;
    let issues = request.data.validate();
    Ok(Json(ValidateResponse {
        valid: issues.is_empty(),
        row_count: request.data.row_count(),
        issues,
    }))
}
