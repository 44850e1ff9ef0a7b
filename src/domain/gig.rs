use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pricing::{quote_price, round_cents};
use super::{
    AssignmentId, GigId, GigRuleError, GigStatus, Location, PaymentRecord, Urgency, UserId,
};

pub const DEFAULT_RADIUS_MILES: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GigType {
    Single,
    Multiple,
}

/// Who is (or will be) working the gig.
///
/// Multi-hire gigs keep a roster instead of a single assignee; the number
/// hired is always the roster length, so it cannot drift from the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gig_type")]
pub enum Staffing {
    Single {
        assigned_worker_id: Option<UserId>,
        assignment_id: Option<AssignmentId>,
    },
    Multiple {
        workers_needed: u32,
        assigned_workers: Vec<UserId>,
        pay_per_person: f64,
        total_payment: f64,
    },
}

/// What a client asks for when posting a gig.
#[derive(Debug, Clone, PartialEq)]
pub enum StaffingRequest {
    Single,
    Multiple {
        workers_needed: u32,
        pay_per_person: f64,
    },
}

#[derive(Debug, Clone)]
pub struct GigDraft {
    pub client_id: UserId,
    pub category: String,
    pub description: Option<String>,
    pub location: Location,
    pub radius_miles: f64,
    pub urgency: Urgency,
    pub budget: Option<f64>,
    pub staffing: StaffingRequest,
}

impl GigDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.category.trim().is_empty() {
            return Err("Category is required".to_string());
        }
        if !self.location.coordinates.is_valid() {
            return Err("Location coordinates are out of range".to_string());
        }
        if !(self.radius_miles.is_finite() && self.radius_miles > 0.0) {
            return Err("Radius must be a positive number of miles".to_string());
        }
        if let Some(budget) = self.budget {
            if !(budget.is_finite() && budget >= 0.0) {
                return Err("Budget must be a non-negative amount".to_string());
            }
        }
        if let StaffingRequest::Multiple {
            workers_needed,
            pay_per_person,
        } = self.staffing
        {
            if workers_needed < 1 {
                return Err("A multi-hire gig needs at least one worker".to_string());
            }
            if !(pay_per_person.is_finite() && pay_per_person > 0.0) {
                return Err("Pay per person must be positive".to_string());
            }
        }
        Ok(())
    }
}

/// Per-transition timestamps, stamped by [`Gig::advance`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusTimeline {
    pub dispatched_at: Option<DateTime<Utc>>,
    pub matched_at: Option<DateTime<Utc>>,
    pub partially_matched_at: Option<DateTime<Utc>>,
    pub on_route_at: Option<DateTime<Utc>>,
    pub arrived_at: Option<DateTime<Utc>>,
    pub in_progress_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl StatusTimeline {
    fn stamp(&mut self, status: GigStatus, at: DateTime<Utc>) {
        let slot = match status {
            GigStatus::Posted => return,
            GigStatus::Dispatching => &mut self.dispatched_at,
            GigStatus::Matched => &mut self.matched_at,
            GigStatus::PartiallyMatched => &mut self.partially_matched_at,
            GigStatus::OnRoute => &mut self.on_route_at,
            GigStatus::Arrived => &mut self.arrived_at,
            GigStatus::InProgress => &mut self.in_progress_at,
            GigStatus::Complete => &mut self.completed_at,
            GigStatus::Paid => &mut self.paid_at,
            GigStatus::Closed => &mut self.closed_at,
        };
        *slot = Some(at);
    }
}

/// The stored state a write was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GigRevision {
    pub status: GigStatus,
    pub version: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gig {
    pub id: GigId,
    pub client_id: UserId,
    pub category: String,
    pub description: Option<String>,
    pub location: Location,
    pub radius_miles: f64,
    pub urgency: Urgency,
    pub budget: f64,
    pub status: GigStatus,
    pub staffing: Staffing,
    pub payment_preauth: Option<PaymentRecord>,
    pub payment_capture: Option<PaymentRecord>,
    #[serde(default)]
    pub timeline: StatusTimeline,
    /// Bumped on every mutation of the aggregate.
    #[serde(default)]
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Gig {
    /// Builds a freshly posted gig. Callers validate the draft first.
    pub fn post(draft: GigDraft) -> Self {
        let now = Utc::now();
        let (staffing, budget) = match draft.staffing {
            StaffingRequest::Single => {
                let budget = draft
                    .budget
                    .map(round_cents)
                    .unwrap_or_else(|| quote_price(&draft.category, 0.0, draft.urgency));
                (
                    Staffing::Single {
                        assigned_worker_id: None,
                        assignment_id: None,
                    },
                    budget,
                )
            }
            StaffingRequest::Multiple {
                workers_needed,
                pay_per_person,
            } => {
                let total_payment = round_cents(pay_per_person * workers_needed as f64);
                (
                    Staffing::Multiple {
                        workers_needed,
                        assigned_workers: Vec::new(),
                        pay_per_person: round_cents(pay_per_person),
                        total_payment,
                    },
                    total_payment,
                )
            }
        };

        Self {
            id: GigId::new(),
            client_id: draft.client_id,
            category: draft.category.trim().to_string(),
            description: draft.description,
            location: draft.location,
            radius_miles: draft.radius_miles,
            urgency: draft.urgency,
            budget,
            status: GigStatus::Posted,
            staffing,
            payment_preauth: None,
            payment_capture: None,
            timeline: StatusTimeline::default(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn gig_type(&self) -> GigType {
        match self.staffing {
            Staffing::Single { .. } => GigType::Single,
            Staffing::Multiple { .. } => GigType::Multiple,
        }
    }

    pub fn revision(&self) -> GigRevision {
        GigRevision {
            status: self.status,
            version: self.version,
        }
    }

    pub fn workers_needed(&self) -> u32 {
        match &self.staffing {
            Staffing::Single { .. } => 1,
            Staffing::Multiple { workers_needed, .. } => *workers_needed,
        }
    }

    pub fn workers_hired(&self) -> u32 {
        match &self.staffing {
            Staffing::Single {
                assigned_worker_id, ..
            } => u32::from(assigned_worker_id.is_some()),
            Staffing::Multiple {
                assigned_workers, ..
            } => assigned_workers.len() as u32,
        }
    }

    pub fn has_worker(&self, worker_id: UserId) -> bool {
        match &self.staffing {
            Staffing::Single {
                assigned_worker_id, ..
            } => *assigned_worker_id == Some(worker_id),
            Staffing::Multiple {
                assigned_workers, ..
            } => assigned_workers.contains(&worker_id),
        }
    }

    /// Moves the gig one edge along the lifecycle, stamping the transition time.
    pub fn advance(&mut self, next: GigStatus, at: DateTime<Utc>) -> Result<(), GigRuleError> {
        if !self.status.can_transition_to(next) {
            return Err(GigRuleError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.timeline.stamp(next, at);
        self.touch(at);
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.version += 1;
        self.updated_at = at;
    }

    /// Commits a worker to the gig.
    ///
    /// A single-hire gig goes straight through `Matched` to `OnRoute`. A
    /// multi-hire gig becomes `PartiallyMatched` on its first hire and
    /// `Matched` once the roster is full.
    pub fn accept_worker(
        &mut self,
        worker_id: UserId,
        assignment_id: AssignmentId,
        at: DateTime<Utc>,
    ) -> Result<(), GigRuleError> {
        let observed = self.status;
        let target = match &mut self.staffing {
            Staffing::Single {
                assigned_worker_id,
                assignment_id: assignment_slot,
            } => {
                if observed != GigStatus::Dispatching {
                    return Err(GigRuleError::InvalidTransition {
                        from: observed,
                        to: GigStatus::Matched,
                    });
                }
                *assigned_worker_id = Some(worker_id);
                *assignment_slot = Some(assignment_id);
                Some(GigStatus::Matched)
            }
            Staffing::Multiple {
                workers_needed,
                assigned_workers,
                ..
            } => {
                if assigned_workers.contains(&worker_id) {
                    return Err(GigRuleError::DuplicateAssignment { worker_id });
                }
                if !observed.is_open() {
                    return Err(GigRuleError::InvalidTransition {
                        from: observed,
                        to: GigStatus::Matched,
                    });
                }
                assigned_workers.push(worker_id);
                if assigned_workers.len() as u32 >= *workers_needed {
                    Some(GigStatus::Matched)
                } else if observed == GigStatus::Dispatching {
                    Some(GigStatus::PartiallyMatched)
                } else {
                    None
                }
            }
        };

        match target {
            Some(GigStatus::Matched) => {
                self.advance(GigStatus::Matched, at)?;
                if self.gig_type() == GigType::Single {
                    self.advance(GigStatus::OnRoute, at)?;
                }
            }
            Some(next) => self.advance(next, at)?,
            None => self.touch(at),
        }
        Ok(())
    }

    /// Stops hiring on a partially staffed multi-hire gig, shrinking the
    /// roster target to the workers already hired.
    pub fn close_hiring(&mut self, at: DateTime<Utc>) -> Result<(), GigRuleError> {
        let observed = self.status;
        match &mut self.staffing {
            Staffing::Multiple {
                workers_needed,
                assigned_workers,
                pay_per_person,
                total_payment,
            } if observed == GigStatus::PartiallyMatched => {
                *workers_needed = assigned_workers.len() as u32;
                *total_payment = round_cents(*pay_per_person * *workers_needed as f64);
            }
            _ => {
                return Err(GigRuleError::InvalidTransition {
                    from: observed,
                    to: GigStatus::Matched,
                });
            }
        }
        self.advance(GigStatus::Matched, at)
    }

    /// Amount reserved on creation and settled on completion.
    pub fn payable_amount(&self) -> f64 {
        match &self.staffing {
            Staffing::Single { .. } => self.budget,
            Staffing::Multiple { total_payment, .. } => *total_payment,
        }
    }
}
