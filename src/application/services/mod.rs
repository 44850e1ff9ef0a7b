mod gig_lifecycle_service;
mod gig_request_parser;
mod structured_completer;

pub use gig_lifecycle_service::{
    AcceptOutcome, GigLifecycleService, LifecycleError, LocationOutcome, RatingOutcome,
    RatingSubmission,
};
pub use gig_request_parser::{GigDraftSuggestion, GigRequestParser};
pub use structured_completer::{StructuredCompleter, extract_json_object};
