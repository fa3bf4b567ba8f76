use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Store failure rendered as `{"error", "code", "detail"}`.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e) }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::DuplicateKey(_) => StatusCode::CONFLICT,
            ServiceError::ReferentialViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServiceError::Hash(_) | ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match &self.0 {
            ServiceError::Validation(_) => "validation_error",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::DuplicateKey(_) => "duplicate_key",
            ServiceError::ReferentialViolation(_) => "referential_violation",
            ServiceError::Timeout(_) => "timeout",
            ServiceError::Hash(_) | ServiceError::Db(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.code();
        let detail = self.0.to_string();
        if status.is_server_error() {
            error!(code, error = %detail, "request failed");
        } else {
            warn!(code, error = %detail, "request rejected");
        }
        let body = serde_json::json!({"error": self.title(), "code": code, "detail": detail});
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
