use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Assignment, DEFAULT_RADIUS_MILES, GigDraft, GigId, GigType, StaffingRequest, Urgency, UserId,
};
use crate::presentation::handlers::dto::{GigResponse, LocationBody};
use crate::presentation::handlers::error::{error_response, lifecycle_error_response, parse_id};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGigRequest {
    pub client_id: String,
    pub category: String,
    pub description: Option<String>,
    pub location: LocationBody,
    pub radius_miles: Option<f64>,
    pub urgency: String,
    pub budget: Option<f64>,
    pub gig_type: Option<GigType>,
    pub workers_needed: Option<u32>,
    pub pay_per_person: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ListGigsQuery {
    pub client_id: Option<String>,
}

#[derive(Serialize)]
pub struct GigListResponse {
    pub gigs: Vec<GigResponse>,
}

#[derive(Serialize)]
pub struct AssignmentListResponse {
    pub assignments: Vec<Assignment>,
}

#[tracing::instrument(skip(state, body))]
pub async fn create_gig_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateGigRequest>,
) -> impl IntoResponse {
    let client_id = match parse_id(&body.client_id, "client") {
        Ok(id) => UserId::from_uuid(id),
        Err(response) => return response,
    };

    let urgency = match body.urgency.parse::<Urgency>() {
        Ok(u) => u,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    let staffing = match body.gig_type.unwrap_or(GigType::Single) {
        GigType::Single => StaffingRequest::Single,
        GigType::Multiple => match (body.workers_needed, body.pay_per_person) {
            (Some(workers_needed), Some(pay_per_person)) => StaffingRequest::Multiple {
                workers_needed,
                pay_per_person,
            },
            _ => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "Multiple gigs require workers_needed and pay_per_person",
                );
            }
        },
    };

    let draft = GigDraft {
        client_id,
        category: body.category,
        description: body.description,
        location: body.location.into(),
        radius_miles: body.radius_miles.unwrap_or(DEFAULT_RADIUS_MILES),
        urgency,
        budget: body.budget,
        staffing,
    };

    match state.lifecycle_service.create(draft).await {
        Ok(gig) => (StatusCode::CREATED, Json(GigResponse::from(gig))).into_response(),
        Err(e) => lifecycle_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_gig_handler(
    State(state): State<AppState>,
    Path(gig_id): Path<String>,
) -> impl IntoResponse {
    let gig_id = match parse_id(&gig_id, "gig") {
        Ok(id) => GigId::from_uuid(id),
        Err(response) => return response,
    };

    match state.lifecycle_service.get(gig_id).await {
        Ok(gig) => (StatusCode::OK, Json(GigResponse::from(gig))).into_response(),
        Err(e) => lifecycle_error_response(e),
    }
}

/// Open gigs for workers to browse, or a client's own gigs with `?client_id=`.
#[tracing::instrument(skip(state))]
pub async fn list_gigs_handler(
    State(state): State<AppState>,
    Query(query): Query<ListGigsQuery>,
) -> impl IntoResponse {
    let result = match query.client_id {
        Some(raw) => match parse_id(&raw, "client") {
            Ok(id) => {
                state
                    .lifecycle_service
                    .list_for_client(UserId::from_uuid(id))
                    .await
            }
            Err(response) => return response,
        },
        None => state.lifecycle_service.list_open().await,
    };

    match result {
        Ok(gigs) => (
            StatusCode::OK,
            Json(GigListResponse {
                gigs: gigs.into_iter().map(GigResponse::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => lifecycle_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_assignments_handler(
    State(state): State<AppState>,
    Path(gig_id): Path<String>,
) -> impl IntoResponse {
    let gig_id = match parse_id(&gig_id, "gig") {
        Ok(id) => GigId::from_uuid(id),
        Err(response) => return response,
    };

    match state.lifecycle_service.assignments(gig_id).await {
        Ok(assignments) => {
            (StatusCode::OK, Json(AssignmentListResponse { assignments })).into_response()
        }
        Err(e) => lifecycle_error_response(e),
    }
}
