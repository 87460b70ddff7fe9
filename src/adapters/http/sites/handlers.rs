//! HTTP handlers for site endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;

use crate::application::handlers::{
    CalculateSiteReportQuery, CreateSiteCommand, DeleteSiteCommand, SiteReport, SwitchSiteCommand,
    UpdateSiteDataCommand, UpdateSiteDetailsCommand,
};
use crate::domain::foundation::{DomainError, ErrorCode, SiteId};
use crate::domain::site::Site;

use super::dto::{
    CreateSiteRequest, DeleteSiteResponse, SiteListResponse, UpdateSiteDataRequest, UpdateSiteDetailsRequest,
};
use crate::adapters::http::error::{parse_path, ApiError};
use crate::adapters::http::AppState;

fn parse_site_id(raw: &str) -> Result<SiteId, ApiError> {
    parse_path(raw, "site ID")
}

/// GET /api/sites
pub async fn list_sites(State(state): State<AppState>) -> Result<Json<SiteListResponse>, ApiError> {
    let workspace = state.load_workspace_handler().handle().await?;
    Ok(Json(SiteListResponse::from(&workspace)))
}

/// POST /api/sites
pub async fn create_site(
    State(state): State<AppState>,
    payload: Result<Json<CreateSiteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Site>), ApiError> {
    let Json(request) = payload?;
    let site = state
        .create_site_handler()
        .handle(CreateSiteCommand { name: request.name })
        .await?;
    Ok((StatusCode::CREATED, Json(site)))
}

/// GET /api/sites/:site_id
pub async fn get_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> Result<Json<Site>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let site = state
        .sites
        .find_by_id(site_id)
        .await
        .map_err(DomainError::from)?
        .ok_or_else(|| DomainError::new(ErrorCode::SiteNotFound, format!("Site not found: {}", site_id)))?;
    Ok(Json(site))
}

/// PATCH /api/sites/:site_id
pub async fn update_site_details(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    payload: Result<Json<UpdateSiteDetailsRequest>, JsonRejection>,
) -> Result<Json<Site>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let Json(request) = payload?;
    let site = state
        .update_site_details_handler()
        .handle(UpdateSiteDetailsCommand {
            site_id,
            name: request.name,
            company_name: request.company_name,
            notes: request.notes,
        })
        .await?;
    Ok(Json(site))
}

/// POST /api/sites/:site_id/activate
pub async fn activate_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> Result<Json<SiteListResponse>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let workspace = state
        .switch_site_handler()
        .handle(SwitchSiteCommand { site_id })
        .await?;
    Ok(Json(SiteListResponse::from(&workspace)))
}

/// DELETE /api/sites/:site_id
pub async fn delete_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> Result<Json<DeleteSiteResponse>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let active_site = state
        .delete_site_handler()
        .handle(DeleteSiteCommand { site_id })
        .await?;
    Ok(Json(DeleteSiteResponse {
        deleted: site_id,
        active_site,
    }))
}

/// PUT /api/sites/:site_id/data
pub async fn update_site_data(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    payload: Result<Json<UpdateSiteDataRequest>, JsonRejection>,
) -> Result<Json<Site>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let Json(request) = payload?;
    let site = state
        .update_site_data_handler()
        .handle(UpdateSiteDataCommand {
            site_id,
            data: request.data,
        })
        .await?;
    Ok(Json(site))
}

/// GET /api/sites/:site_id/report
pub async fn get_site_report(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> Result<Json<SiteReport>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let report = state
        .site_report_handler()
        .handle(CalculateSiteReportQuery { site_id })
        .await?;
    Ok(Json(report))
}
