use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{GigStatus, UserId};
use crate::presentation::handlers::dto::{CoordinatesBody, GigResponse};
use crate::presentation::handlers::error::{lifecycle_error_response, parse_id};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct LocationUpdateResponse {
    pub active: bool,
    pub arrived: bool,
    pub distance_miles: Option<f64>,
    pub eta_minutes: Option<u32>,
    pub gig: Option<GigResponse>,
}

/// Location pings from a worker's device. A worker with no active gig gets
/// `active: false` rather than an error.
#[tracing::instrument(skip(state, body))]
pub async fn update_worker_location_handler(
    State(state): State<AppState>,
    Path(worker_id): Path<String>,
    Json(body): Json<CoordinatesBody>,
) -> impl IntoResponse {
    let worker_id = match parse_id(&worker_id, "worker") {
        Ok(id) => UserId::from_uuid(id),
        Err(response) => return response,
    };

    match state
        .lifecycle_service
        .update_worker_location(worker_id, body.into())
        .await
    {
        Ok(Some(outcome)) => (
            StatusCode::OK,
            Json(LocationUpdateResponse {
                active: true,
                arrived: outcome.gig.status == GigStatus::Arrived,
                distance_miles: Some(outcome.distance_miles),
                eta_minutes: Some(outcome.eta_minutes),
                gig: Some(GigResponse::from(outcome.gig)),
            }),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::OK,
            Json(LocationUpdateResponse {
                active: false,
                arrived: false,
                distance_miles: None,
                eta_minutes: None,
                gig: None,
            }),
        )
            .into_response(),
        Err(e) => lifecycle_error_response(e),
    }
}
