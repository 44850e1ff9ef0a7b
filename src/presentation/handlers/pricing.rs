use axum::Json;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, Urgency, base_rate, distance_miles, eta_minutes, quote_price};
use crate::presentation::handlers::error::error_response;

#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub category: String,
    pub urgency: String,
    pub distance_miles: Option<f64>,
    pub from_lat: Option<f64>,
    pub from_lng: Option<f64>,
    pub to_lat: Option<f64>,
    pub to_lng: Option<f64>,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub category: String,
    pub base_rate: f64,
    pub urgency: Urgency,
    pub multiplier: f64,
    pub distance_miles: f64,
    pub eta_minutes: u32,
    pub price: f64,
}

/// Price estimate for a category. Distance comes either directly or from a
/// pair of coordinates; with neither it is zero.
#[tracing::instrument]
pub async fn quote_handler(Query(query): Query<QuoteQuery>) -> impl IntoResponse {
    let urgency = match query.urgency.parse::<Urgency>() {
        Ok(u) => u,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    let distance = match (
        query.distance_miles,
        query.from_lat,
        query.from_lng,
        query.to_lat,
        query.to_lng,
    ) {
        (Some(d), ..) => d,
        (None, Some(from_lat), Some(from_lng), Some(to_lat), Some(to_lng)) => distance_miles(
            GeoPoint::new(from_lat, from_lng),
            GeoPoint::new(to_lat, to_lng),
        ),
        _ => 0.0,
    };

    if !(distance.is_finite() && distance >= 0.0) {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Distance must be a non-negative number of miles",
        );
    }

    (
        StatusCode::OK,
        Json(QuoteResponse {
            base_rate: base_rate(&query.category),
            price: quote_price(&query.category, distance, urgency),
            eta_minutes: eta_minutes(distance),
            multiplier: urgency.multiplier(),
            distance_miles: distance,
            urgency,
            category: query.category,
        }),
    )
        .into_response()
}
