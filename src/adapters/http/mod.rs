//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router; `api_router` merges them over one
//! shared [`AppState`].

pub mod emissions;
pub mod error;
pub mod finance;
pub mod sites;
mod state;

use axum::Router;

pub use emissions::emissions_router;
pub use error::{ApiError, ErrorResponse};
pub use finance::finance_router;
pub use sites::sites_router;
pub use state::AppState;

/// Every API route with state applied.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(emissions_router())
        .merge(sites_router())
        .merge(finance_router())
        .with_state(state)
}
