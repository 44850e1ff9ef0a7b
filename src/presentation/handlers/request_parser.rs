use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::error::error_response;
use crate::presentation::state::AppState;

const MAX_TRANSCRIPT_CHARS: usize = 4000;

#[derive(Debug, Deserialize)]
pub struct ParseGigRequest {
    pub transcript: String,
}

/// Voice-to-gig helper. Always answers 200 with a suggestion, falling back to
/// a generic draft when the model is unavailable or returns garbage.
#[tracing::instrument(skip(state, body))]
pub async fn parse_gig_request_handler(
    State(state): State<AppState>,
    Json(body): Json<ParseGigRequest>,
) -> impl IntoResponse {
    if body.transcript.chars().count() > MAX_TRANSCRIPT_CHARS {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("Transcript exceeds {} characters", MAX_TRANSCRIPT_CHARS),
        );
    }

    tracing::debug!(transcript = %sanitize_prompt(&body.transcript), "Parsing gig request");

    let suggestion = state.request_parser.parse(&body.transcript).await;
    tracing::info!(category = %suggestion.category, urgency = %suggestion.urgency, "Gig request parsed");

    (StatusCode::OK, Json(suggestion)).into_response()
}
