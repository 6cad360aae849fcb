use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use models::errors::ModelError;
use service::errors::ServiceError;

/// Every failure a handler can return, mapped onto a status and a JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// Request body or query string could not be decoded.
    #[error("malformed request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(ServiceError::InvalidArgument(fields)) => {
                (StatusCode::BAD_REQUEST, Json(fields)).into_response()
            }
            ApiError::Service(ServiceError::NotFound(detail)) => {
                (StatusCode::NOT_FOUND, Json(json!({"detail": detail}))).into_response()
            }
            ApiError::Service(ServiceError::Model(ModelError::Validation(detail))) => {
                (StatusCode::BAD_REQUEST, Json(json!({"detail": detail}))).into_response()
            }
            ApiError::Service(e) => {
                error!(event = "internal_error", error = %e, "request failed on store");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"detail": "internal server error"}))).into_response()
            }
            ApiError::BadRequest(detail) => {
                warn!(event = "malformed_request", %detail);
                (StatusCode::BAD_REQUEST, Json(json!({"detail": detail}))).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
