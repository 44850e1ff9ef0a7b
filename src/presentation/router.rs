use axum::Router;
use axum::middleware;
use axum::routing::{get, patch, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    accept_gig_handler, close_hiring_handler, complete_gig_handler, create_gig_handler,
    get_gig_handler, health_handler, list_assignments_handler, list_gigs_handler,
    list_ratings_handler, parse_gig_request_handler, quote_handler, rate_gig_handler,
    start_route_handler, update_status_handler, update_worker_location_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/gigs",
            get(list_gigs_handler).post(create_gig_handler),
        )
        .route("/api/v1/gigs/parse", post(parse_gig_request_handler))
        .route("/api/v1/gigs/{gig_id}", get(get_gig_handler))
        .route("/api/v1/gigs/{gig_id}/accept", post(accept_gig_handler))
        .route("/api/v1/gigs/{gig_id}/status", patch(update_status_handler))
        .route("/api/v1/gigs/{gig_id}/complete", post(complete_gig_handler))
        .route(
            "/api/v1/gigs/{gig_id}/close-hiring",
            post(close_hiring_handler),
        )
        .route(
            "/api/v1/gigs/{gig_id}/start-route",
            post(start_route_handler),
        )
        .route(
            "/api/v1/gigs/{gig_id}/assignments",
            get(list_assignments_handler),
        )
        .route(
            "/api/v1/gigs/{gig_id}/ratings",
            get(list_ratings_handler).post(rate_gig_handler),
        )
        .route(
            "/api/v1/workers/{worker_id}/location",
            put(update_worker_location_handler),
        )
        .route("/api/v1/pricing/quote", get(quote_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
