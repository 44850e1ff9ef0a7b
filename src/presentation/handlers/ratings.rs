use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::RatingSubmission;
use crate::domain::{GigId, MAX_SCORE, MIN_SCORE, RaterType, Rating, UserId};
use crate::presentation::handlers::dto::GigResponse;
use crate::presentation::handlers::error::{error_response, lifecycle_error_response, parse_id};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RateGigRequest {
    pub rater_id: String,
    pub rater_type: String,
    pub rating: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub comment: Option<String>,
}

#[derive(Serialize)]
pub struct RateGigResponse {
    pub rating: Rating,
    pub gig: GigResponse,
}

#[derive(Serialize)]
pub struct RatingListResponse {
    pub ratings: Vec<Rating>,
}

#[tracing::instrument(skip(state, body))]
pub async fn rate_gig_handler(
    State(state): State<AppState>,
    Path(gig_id): Path<String>,
    Json(body): Json<RateGigRequest>,
) -> impl IntoResponse {
    let gig_id = match parse_id(&gig_id, "gig") {
        Ok(id) => GigId::from_uuid(id),
        Err(response) => return response,
    };
    let rater_id = match parse_id(&body.rater_id, "rater") {
        Ok(id) => UserId::from_uuid(id),
        Err(response) => return response,
    };
    let rater_type = match body.rater_type.parse::<RaterType>() {
        Ok(t) => t,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };
    let score = match u8::try_from(body.rating) {
        Ok(score) => score,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Rating must be between {} and {}", MIN_SCORE, MAX_SCORE),
            );
        }
    };

    let submission = RatingSubmission {
        rater_id,
        rater_type,
        score,
        tags: body.tags,
        comment: body.comment,
    };

    match state.lifecycle_service.rate(gig_id, submission).await {
        Ok(outcome) => (
            StatusCode::CREATED,
            Json(RateGigResponse {
                rating: outcome.rating,
                gig: GigResponse::from(outcome.gig),
            }),
        )
            .into_response(),
        Err(e) => lifecycle_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_ratings_handler(
    State(state): State<AppState>,
    Path(gig_id): Path<String>,
) -> impl IntoResponse {
    let gig_id = match parse_id(&gig_id, "gig") {
        Ok(id) => GigId::from_uuid(id),
        Err(response) => return response,
    };

    match state.lifecycle_service.ratings(gig_id).await {
        Ok(ratings) => (StatusCode::OK, Json(RatingListResponse { ratings })).into_response(),
        Err(e) => lifecycle_error_response(e),
    }
}
