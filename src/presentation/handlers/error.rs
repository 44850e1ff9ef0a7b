use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::LifecycleError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status: Option<String>,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            current_status: None,
        }),
    )
        .into_response()
}

pub fn parse_id(raw: &str, kind: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw).map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid {} ID: {}", kind, raw),
        )
    })
}

pub fn lifecycle_error_response(err: LifecycleError) -> Response {
    match err {
        LifecycleError::NotFound(_) => error_response(StatusCode::NOT_FOUND, err.to_string()),
        LifecycleError::InvalidTransition { from, .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
                current_status: Some(from.as_str().to_string()),
            }),
        )
            .into_response(),
        LifecycleError::DuplicateAssignment { .. }
        | LifecycleError::NotRateable { .. }
        | LifecycleError::InvalidInput(_) => {
            tracing::warn!(error = %err, "Gig request rejected");
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        LifecycleError::StorageFailure(_) | LifecycleError::PaymentFailure(_) => {
            tracing::error!(error = %err, "Gig operation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
