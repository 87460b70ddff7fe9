//! Route configuration for site endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    activate_site, create_site, delete_site, get_site, get_site_report, list_sites, update_site_data,
    update_site_details,
};
use crate::adapters::http::AppState;

/// Creates the site router.
///
/// Routes:
/// - `GET /api/sites` - Site list with the active site
/// - `POST /api/sites` - Create a site and make it active
/// - `GET /api/sites/:site_id` - Full site record
/// - `PATCH /api/sites/:site_id` - Rename, or edit company name and notes
/// - `DELETE /api/sites/:site_id` - Delete a site (never the last one)
/// - `POST /api/sites/:site_id/activate` - Make the site active
/// - `PUT /api/sites/:site_id/data` - Replace the site's activity rows
/// - `GET /api/sites/:site_id/report` - Emissions report under the active country
pub fn sites_router() -> Router<AppState> {
    Router::new()
        .route("/api/sites", get(list_sites).post(create_site))
        .route(
            "/api/sites/:site_id",
            get(get_site).patch(update_site_details).delete(delete_site),
        )
        .route("/api/sites/:site_id/activate", post(activate_site))
        .route("/api/sites/:site_id/data", put(update_site_data))
        .route("/api/sites/:site_id/report", get(get_site_report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryPreferenceStore, InMemorySiteRepository};
    use crate::application::CalculationService;
    use crate::domain::emissions::ActivityCategory;
    use crate::domain::site::Site;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(sites: Vec<Site>) -> Router {
        let state = AppState::new(
            CalculationService::default(),
            Arc::new(InMemorySiteRepository::with_sites(sites)),
            Arc::new(InMemoryPreferenceStore::new()),
        );
        sites_router().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn report_for_stored_site() {
        let mut site = Site::new("Office").unwrap();
        site.add_row(ActivityCategory::Water).set_months([10.0; 12]).unwrap();
        let site_id = site.id();

        let response = app_with(vec![site])
            .oneshot(
                Request::builder()
                    .uri(format!("/api/sites/{}/report", site_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["siteName"], "Office");
        assert!((body["report"]["grandTotal"].as_f64().unwrap() - 0.04128).abs() < 1e-9);
    }

    #[tokio::test]
    async fn malformed_site_id_is_bad_request() {
        let response = app_with(vec![])
            .oneshot(Request::builder().uri("/api/sites/abc/report").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_site_is_not_found() {
        let response = app_with(vec![])
            .oneshot(
                Request::builder()
                    .uri(format!("/api/sites/{}", crate::domain::foundation::SiteId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "SITE_NOT_FOUND");
    }

    #[tokio::test]
    async fn deleting_last_site_is_refused() {
        let site = Site::new("Only").unwrap();
        let site_id = site.id();
        let response = app_with(vec![site])
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/sites/{}", site_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["code"], "LAST_SITE");
    }

    #[tokio::test]
    async fn activating_a_site_moves_the_selection() {
        let a = Site::new("A").unwrap();
        let b = Site::new("B").unwrap();
        let b_id = b.id();

        let response = app_with(vec![a, b])
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/sites/{}/activate", b_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["activeSite"], b_id.to_string());
        assert_eq!(body["sites"][1]["active"], true);
    }

    #[tokio::test]
    async fn patch_renames_site() {
        let site = Site::new("Office").unwrap();
        let site_id = site.id();
        let request = Request::builder()
            .method("PATCH")
            .uri(format!("/api/sites/{}", site_id))
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "name": "Head Office" }).to_string()))
            .unwrap();

        let response = app_with(vec![site]).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "Head Office");
    }
}
