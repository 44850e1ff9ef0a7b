use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::LifecycleError;
use crate::domain::{Assignment, Gig, GigId, GigStatus, UserId};
use crate::presentation::handlers::dto::{CoordinatesBody, GigResponse};
use crate::presentation::handlers::error::{error_response, lifecycle_error_response, parse_id};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AcceptGigRequest {
    pub worker_id: String,
    pub location: CoordinatesBody,
}

#[derive(Serialize)]
pub struct AcceptGigResponse {
    pub gig: GigResponse,
    pub assignment: Assignment,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

fn gig_id_from_path(raw: &str) -> Result<GigId, Response> {
    parse_id(raw, "gig").map(GigId::from_uuid)
}

fn gig_result_response(result: Result<Gig, LifecycleError>) -> Response {
    match result {
        Ok(gig) => (StatusCode::OK, Json(GigResponse::from(gig))).into_response(),
        Err(e) => lifecycle_error_response(e),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn accept_gig_handler(
    State(state): State<AppState>,
    Path(gig_id): Path<String>,
    Json(body): Json<AcceptGigRequest>,
) -> impl IntoResponse {
    let gig_id = match gig_id_from_path(&gig_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let worker_id = match parse_id(&body.worker_id, "worker") {
        Ok(id) => UserId::from_uuid(id),
        Err(response) => return response,
    };

    match state
        .lifecycle_service
        .accept(gig_id, worker_id, body.location.into())
        .await
    {
        Ok(outcome) => (
            StatusCode::OK,
            Json(AcceptGigResponse {
                gig: GigResponse::from(outcome.gig),
                assignment: outcome.assignment,
            }),
        )
            .into_response(),
        Err(e) => lifecycle_error_response(e),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn update_status_handler(
    State(state): State<AppState>,
    Path(gig_id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> impl IntoResponse {
    let gig_id = match gig_id_from_path(&gig_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let requested = match body.status.parse::<GigStatus>() {
        Ok(status) => status,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    gig_result_response(state.lifecycle_service.update_status(gig_id, requested).await)
}

#[tracing::instrument(skip(state))]
pub async fn complete_gig_handler(
    State(state): State<AppState>,
    Path(gig_id): Path<String>,
) -> impl IntoResponse {
    match gig_id_from_path(&gig_id) {
        Ok(id) => gig_result_response(state.lifecycle_service.complete(id).await),
        Err(response) => response,
    }
}

#[tracing::instrument(skip(state))]
pub async fn close_hiring_handler(
    State(state): State<AppState>,
    Path(gig_id): Path<String>,
) -> impl IntoResponse {
    match gig_id_from_path(&gig_id) {
        Ok(id) => gig_result_response(state.lifecycle_service.close_hiring(id).await),
        Err(response) => response,
    }
}

#[tracing::instrument(skip(state))]
pub async fn start_route_handler(
    State(state): State<AppState>,
    Path(gig_id): Path<String>,
) -> impl IntoResponse {
    match gig_id_from_path(&gig_id) {
        Ok(id) => gig_result_response(state.lifecycle_service.start_route(id).await),
        Err(response) => response,
    }
}
