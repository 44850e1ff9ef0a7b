use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AssignmentId, GeoPoint, GigId, UserId};

/// One worker's acceptance of a gig. Never deleted; only location refreshes mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub gig_id: GigId,
    pub worker_id: UserId,
    pub distance_miles: f64,
    pub eta_minutes: u32,
    pub current_location: GeoPoint,
    pub accepted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(
        gig_id: GigId,
        worker_id: UserId,
        current_location: GeoPoint,
        distance_miles: f64,
        eta_minutes: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AssignmentId::new(),
            gig_id,
            worker_id,
            distance_miles,
            eta_minutes,
            current_location,
            accepted_at: now,
            updated_at: now,
        }
    }

    pub fn refresh_location(&mut self, location: GeoPoint, distance_miles: f64, eta_minutes: u32) {
        self.current_location = location;
        self.distance_miles = distance_miles;
        self.eta_minutes = eta_minutes;
        self.updated_at = Utc::now();
    }
}
