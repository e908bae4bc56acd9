//! Mapping from typed core failures to HTTP responses.

use crate::task::{domain::TaskDomainError, services::TaskServiceError};
use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Error response payload, FastAPI-style `{"detail": ...}` envelope.
fn detail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": message })))
}

/// Maps a service failure to its response.
///
/// Validation failures are the client's fault (400), unknown identifiers are
/// 404, and storage failures are 500. Storage failures are logged here; the
/// core itself never logs.
pub fn service_error(err: &TaskServiceError) -> (StatusCode, Json<Value>) {
    let status = match err {
        TaskServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        TaskServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        TaskServiceError::Repository(_) => {
            tracing::error!(error = %err, "task storage failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    detail(status, &err.to_string())
}

/// Maps a payload field-constraint violation to a 422 response.
pub fn payload_error(err: &TaskDomainError) -> (StatusCode, Json<Value>) {
    detail(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string())
}
