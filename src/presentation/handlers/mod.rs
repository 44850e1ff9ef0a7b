pub mod dto;
mod error;
mod gigs;
mod health;
mod lifecycle;
mod pricing;
mod ratings;
mod request_parser;
mod workers;

pub use error::{ErrorResponse, lifecycle_error_response};
pub use gigs::{create_gig_handler, get_gig_handler, list_assignments_handler, list_gigs_handler};
pub use health::health_handler;
pub use lifecycle::{
    accept_gig_handler, close_hiring_handler, complete_gig_handler, start_route_handler,
    update_status_handler,
};
pub use pricing::quote_handler;
pub use ratings::{list_ratings_handler, rate_gig_handler};
pub use request_parser::parse_gig_request_handler;
pub use workers::update_worker_location_handler;
