mod assignment;
mod assignment_id;
mod geo;
mod gig;
mod gig_id;
mod gig_rule_error;
mod gig_status;
mod payment_record;
pub mod pricing;
mod rating;
mod rating_id;
mod user_id;

pub use assignment::Assignment;
pub use assignment_id::AssignmentId;
pub use geo::{
    ARRIVAL_GEOFENCE_MILES, GeoPoint, Location, distance_miles, eta_minutes,
    within_arrival_geofence,
};
pub use gig::{
    DEFAULT_RADIUS_MILES, Gig, GigDraft, GigRevision, GigType, Staffing, StaffingRequest,
    StatusTimeline,
};
pub use gig_id::GigId;
pub use gig_rule_error::GigRuleError;
pub use gig_status::GigStatus;
pub use payment_record::{PaymentRecord, PaymentStatus};
pub use pricing::{Urgency, base_rate, quote_price};
pub use rating::{MAX_SCORE, MIN_SCORE, RATINGS_TO_CLOSE, RaterType, Rating};
pub use rating_id::RatingId;
pub use user_id::UserId;
