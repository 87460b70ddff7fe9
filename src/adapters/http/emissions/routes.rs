//! Route configuration for emissions endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    calculate, get_country, get_factor_table, list_countries, replace_factor_table, set_country,
    validate,
};
use crate::adapters::http::AppState;

/// Creates the emissions router.
///
/// Routes:
/// - `GET /api/countries` - Supported countries and the active one
/// - `GET /api/factors/:country` - Factor table for a country
/// - `PUT /api/factors/:country` - Replace a country's factor table
/// - `GET /api/country` - Active country
/// - `PUT /api/country` - Switch the active country
/// - `POST /api/calculate` - Report for ad-hoc rows
/// - `POST /api/validate` - Row validation issues
pub fn emissions_router() -> Router<AppState> {
    Router::new()
        .route("/api/countries", get(list_countries))
        .route("/api/factors/:country", get(get_factor_table).put(replace_factor_table))
        .route("/api/country", get(get_country).put(set_country))
        .route("/api/calculate", post(calculate))
        .route("/api/validate", post(validate))
}
