//! Error envelope shared by every HTTP route.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn from_domain(err: &DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed path, query or body.
    BadRequest(String),
    /// Referenced site, country or document does not exist.
    NotFound(DomainError),
    /// Well-formed request rejected by a domain rule.
    Unprocessable(DomainError),
    Internal(DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::NotFound(err) => (StatusCode::NOT_FOUND, ErrorResponse::from_domain(&err)),
            ApiError::Unprocessable(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::from_domain(&err))
            }
            ApiError::Internal(err) => {
                error!(code = %err.code, error = %err.message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SiteNotFound
            | ErrorCode::InvoiceNotFound
            | ErrorCode::BillNotFound
            | ErrorCode::UnknownCountry => ApiError::NotFound(err),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::UnknownFactor
            | ErrorCode::LastSite
            | ErrorCode::IncompleteFactorTable
            | ErrorCode::UnclassifiedEmissionType => ApiError::Unprocessable(err),
            ErrorCode::StorageError | ErrorCode::FactorSourceFailed | ErrorCode::InternalError => {
                ApiError::Internal(err)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Parses a path segment, mapping failures to 400.
pub fn parse_path<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {} format: {}", what, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_codes_to_statuses() {
        let cases = [
            (ErrorCode::SiteNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::UnknownCountry, StatusCode::NOT_FOUND),
            (ErrorCode::InvoiceNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::BillNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::LastSite, StatusCode::UNPROCESSABLE_ENTITY),
            (ErrorCode::IncompleteFactorTable, StatusCode::UNPROCESSABLE_ENTITY),
            (ErrorCode::StorageError, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            let response = ApiError::from(DomainError::new(code, "x")).into_response();
            assert_eq!(response.status(), status, "{:?}", code);
        }
    }

    #[test]
    fn error_response_carries_domain_code() {
        let err = DomainError::new(ErrorCode::LastSite, "Cannot delete the last remaining site");
        let body = ErrorResponse::from_domain(&err);
        assert_eq!(body.code, "LAST_SITE");
        assert!(body.details.is_none());
    }
}
