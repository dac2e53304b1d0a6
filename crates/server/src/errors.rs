use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::{ServiceError, ValidationError};
use tracing::{error, warn};

pub const NOT_FOUND_MESSAGE: &str = "Swift code not found";

/// Error body `{"error": "..."}` with a fixed status.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Map a service failure to a response. `context` is the short message
    /// returned for internal errors; the underlying detail is only logged.
    pub fn from_service(err: ServiceError, context: &str) -> Self {
        match err {
            ServiceError::Validation(e) => Self::new(StatusCode::BAD_REQUEST, e.to_string()),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            ServiceError::Conflict(code) => {
                warn!(swift_code = %code, "duplicate swift code rejected by store");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("{context}: swift code already exists"))
            }
            ServiceError::DataIntegrity(detail) => {
                error!(error = %detail, "corrupt swift code record");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Invalid swift code format")
            }
            ServiceError::BranchLookup(detail) => {
                error!(error = %detail, "Failed to fetch branches");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch branches")
            }
            ServiceError::Db(detail) => {
                error!(error = %detail, "{}", context);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, context)
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let err = ValidationError::Payload(rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, err.to_string())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}
