use serde::{Deserialize, Serialize};

use crate::domain::{
    AssignmentId, GeoPoint, Gig, GigId, GigStatus, GigType, Location, PaymentRecord, Staffing,
    StatusTimeline, Urgency, UserId,
};

#[derive(Debug, Deserialize)]
pub struct CoordinatesBody {
    pub lat: f64,
    pub lng: f64,
}

impl From<CoordinatesBody> for GeoPoint {
    fn from(body: CoordinatesBody) -> Self {
        GeoPoint::new(body.lat, body.lng)
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationBody {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: String,
}

impl From<LocationBody> for Location {
    fn from(body: LocationBody) -> Self {
        Location {
            coordinates: GeoPoint::new(body.lat, body.lng),
            address: body.address,
        }
    }
}

/// Wire shape of a gig: staffing is flattened so single and multi-hire gigs
/// share one set of fields.
#[derive(Debug, Serialize)]
pub struct GigResponse {
    pub id: GigId,
    pub client_id: UserId,
    pub category: String,
    pub description: Option<String>,
    pub location: Location,
    pub radius_miles: f64,
    pub urgency: Urgency,
    pub budget: f64,
    pub status: GigStatus,
    pub gig_type: GigType,
    pub workers_needed: u32,
    pub workers_hired: u32,
    pub assigned_worker_id: Option<UserId>,
    pub assignment_id: Option<AssignmentId>,
    pub assigned_workers: Vec<UserId>,
    pub pay_per_person: Option<f64>,
    pub total_payment: Option<f64>,
    pub payment_preauth: Option<PaymentRecord>,
    pub payment_capture: Option<PaymentRecord>,
    pub timeline: StatusTimeline,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Gig> for GigResponse {
    fn from(gig: Gig) -> Self {
        let gig_type = gig.gig_type();
        let workers_needed = gig.workers_needed();
        let workers_hired = gig.workers_hired();

        let (assigned_worker_id, assignment_id, assigned_workers, pay_per_person, total_payment) =
            match gig.staffing {
                Staffing::Single {
                    assigned_worker_id,
                    assignment_id,
                } => (
                    assigned_worker_id,
                    assignment_id,
                    assigned_worker_id.into_iter().collect(),
                    None,
                    None,
                ),
                Staffing::Multiple {
                    assigned_workers,
                    pay_per_person,
                    total_payment,
                    ..
                } => (
                    None,
                    None,
                    assigned_workers,
                    Some(pay_per_person),
                    Some(total_payment),
                ),
            };

        Self {
            id: gig.id,
            client_id: gig.client_id,
            category: gig.category,
            description: gig.description,
            location: gig.location,
            radius_miles: gig.radius_miles,
            urgency: gig.urgency,
            budget: gig.budget,
            status: gig.status,
            gig_type,
            workers_needed,
            workers_hired,
            assigned_worker_id,
            assignment_id,
            assigned_workers,
            pay_per_person,
            total_payment,
            payment_preauth: gig.payment_preauth,
            payment_capture: gig.payment_capture,
            timeline: gig.timeline,
            created_at: gig.created_at.to_rfc3339(),
            updated_at: gig.updated_at.to_rfc3339(),
        }
    }
}
