use std::sync::Arc;

use chrono::Utc;
use tracing::instrument;

use crate::application::ports::{
    AssignmentRepository, GigRepository, PaymentError, PaymentProcessor, RatingRepository,
    RepositoryError,
};
use crate::domain::{
    Assignment, GeoPoint, Gig, GigDraft, GigId, GigRevision, GigRuleError, GigStatus,
    RATINGS_TO_CLOSE, RaterType, Rating, UserId, distance_miles, eta_minutes,
    within_arrival_geofence,
};

/// Drives gigs through their lifecycle against the injected stores.
///
/// Every gig write is conditional on the revision read at the start of the
/// operation, so two callers racing on the same gig cannot both win.
pub struct GigLifecycleService {
    gigs: Arc<dyn GigRepository>,
    assignments: Arc<dyn AssignmentRepository>,
    ratings: Arc<dyn RatingRepository>,
    payments: Arc<dyn PaymentProcessor>,
}

#[derive(Debug, Clone)]
pub struct RatingSubmission {
    pub rater_id: UserId,
    pub rater_type: RaterType,
    pub score: u8,
    pub tags: Vec<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AcceptOutcome {
    pub gig: Gig,
    pub assignment: Assignment,
}

#[derive(Debug, Clone)]
pub struct RatingOutcome {
    pub gig: Gig,
    pub rating: Rating,
}

#[derive(Debug, Clone)]
pub struct LocationOutcome {
    pub gig: Gig,
    pub assignment: Option<Assignment>,
    pub distance_miles: f64,
    pub eta_minutes: u32,
}

impl GigLifecycleService {
    pub fn new(
        gigs: Arc<dyn GigRepository>,
        assignments: Arc<dyn AssignmentRepository>,
        ratings: Arc<dyn RatingRepository>,
        payments: Arc<dyn PaymentProcessor>,
    ) -> Self {
        Self {
            gigs,
            assignments,
            ratings,
            payments,
        }
    }

    #[instrument(skip(self, draft), fields(client_id = %draft.client_id, category = %draft.category))]
    pub async fn create(&self, draft: GigDraft) -> Result<Gig, LifecycleError> {
        draft.validate().map_err(LifecycleError::InvalidInput)?;

        let mut gig = Gig::post(draft);
        let preauth = self
            .payments
            .preauthorize(gig.id, gig.payable_amount())
            .await?;
        gig.payment_preauth = Some(preauth);

        self.gigs.create(&gig).await?;
        tracing::info!(gig_id = %gig.id, amount = gig.payable_amount(), "Gig posted");

        let posted = gig.revision();
        gig.advance(GigStatus::Dispatching, Utc::now())?;
        self.commit(&gig, posted).await?;
        tracing::info!(gig_id = %gig.id, status = %gig.status, "Gig dispatching");

        Ok(gig)
    }

    pub async fn get(&self, gig_id: GigId) -> Result<Gig, LifecycleError> {
        self.load(gig_id).await
    }

    /// Gigs workers can still accept.
    pub async fn list_open(&self) -> Result<Vec<Gig>, LifecycleError> {
        Ok(self
            .gigs
            .list_by_status(&[GigStatus::Dispatching, GigStatus::PartiallyMatched])
            .await?)
    }

    pub async fn list_for_client(&self, client_id: UserId) -> Result<Vec<Gig>, LifecycleError> {
        Ok(self.gigs.list_by_client(client_id).await?)
    }

    pub async fn assignments(&self, gig_id: GigId) -> Result<Vec<Assignment>, LifecycleError> {
        self.load(gig_id).await?;
        Ok(self.assignments.list_by_gig(gig_id).await?)
    }

    pub async fn ratings(&self, gig_id: GigId) -> Result<Vec<Rating>, LifecycleError> {
        self.load(gig_id).await?;
        Ok(self.ratings.list_for_gig(gig_id).await?)
    }

    #[instrument(skip(self, worker_location), fields(gig_id = %gig_id, worker_id = %worker_id))]
    pub async fn accept(
        &self,
        gig_id: GigId,
        worker_id: UserId,
        worker_location: GeoPoint,
    ) -> Result<AcceptOutcome, LifecycleError> {
        if !worker_location.is_valid() {
            return Err(LifecycleError::InvalidInput(
                "Worker location coordinates are out of range".to_string(),
            ));
        }

        let mut gig = self.load(gig_id).await?;
        let observed = gig.revision();

        let distance = distance_miles(worker_location, gig.location.coordinates);
        let eta = eta_minutes(distance);
        let assignment = Assignment::new(gig.id, worker_id, worker_location, distance, eta);

        gig.accept_worker(worker_id, assignment.id, Utc::now())?;
        self.commit(&gig, observed).await?;
        self.assignments.create(&assignment).await?;

        tracing::info!(
            status = %gig.status,
            workers_hired = gig.workers_hired(),
            workers_needed = gig.workers_needed(),
            distance_miles = distance,
            eta_minutes = eta,
            "Worker accepted gig"
        );

        Ok(AcceptOutcome { gig, assignment })
    }

    /// Applies a caller-requested status change. Reaching `Complete` captures
    /// the payment and moves the gig on to `Paid` in the same write.
    #[instrument(skip(self), fields(gig_id = %gig_id, requested = %requested))]
    pub async fn update_status(
        &self,
        gig_id: GigId,
        requested: GigStatus,
    ) -> Result<Gig, LifecycleError> {
        let mut gig = self.load(gig_id).await?;
        let observed = gig.revision();

        if !observed.status.can_request(requested) {
            return Err(LifecycleError::InvalidTransition {
                from: observed.status,
                to: requested,
            });
        }

        let now = Utc::now();
        gig.advance(requested, now)?;

        if requested == GigStatus::Complete {
            let capture = self
                .payments
                .capture(gig.id, gig.payment_preauth.as_ref(), gig.payable_amount())
                .await?;
            tracing::info!(payment_id = %capture.id, amount = capture.amount, "Payment captured");
            gig.payment_capture = Some(capture);
            gig.advance(GigStatus::Paid, now)?;
        }

        self.commit(&gig, observed).await?;
        tracing::info!(from = %observed.status, to = %gig.status, "Gig status updated");

        Ok(gig)
    }

    pub async fn complete(&self, gig_id: GigId) -> Result<Gig, LifecycleError> {
        self.update_status(gig_id, GigStatus::Complete).await
    }

    #[instrument(skip(self), fields(gig_id = %gig_id))]
    pub async fn close_hiring(&self, gig_id: GigId) -> Result<Gig, LifecycleError> {
        let mut gig = self.load(gig_id).await?;
        let observed = gig.revision();

        gig.close_hiring(Utc::now())?;
        self.commit(&gig, observed).await?;
        tracing::info!(workers_hired = gig.workers_hired(), "Hiring closed");

        Ok(gig)
    }

    /// Sends a fully staffed multi-hire crew on its way.
    #[instrument(skip(self), fields(gig_id = %gig_id))]
    pub async fn start_route(&self, gig_id: GigId) -> Result<Gig, LifecycleError> {
        let mut gig = self.load(gig_id).await?;
        let observed = gig.revision();

        gig.advance(GigStatus::OnRoute, Utc::now())?;
        self.commit(&gig, observed).await?;

        Ok(gig)
    }

    /// Refreshes the worker's assignment and fires the arrival geofence.
    /// Returns `None` when the worker has no active gig.
    #[instrument(skip(self, location), fields(worker_id = %worker_id))]
    pub async fn update_worker_location(
        &self,
        worker_id: UserId,
        location: GeoPoint,
    ) -> Result<Option<LocationOutcome>, LifecycleError> {
        if !location.is_valid() {
            return Err(LifecycleError::InvalidInput(
                "Location coordinates are out of range".to_string(),
            ));
        }

        let Some(mut gig) = self.gigs.find_active_for_worker(worker_id).await? else {
            tracing::debug!("No active gig for worker, ignoring location update");
            return Ok(None);
        };

        let distance = distance_miles(location, gig.location.coordinates);
        let eta = eta_minutes(distance);

        let assignment = match self
            .assignments
            .get_by_gig_and_worker(gig.id, worker_id)
            .await?
        {
            Some(mut assignment) => {
                assignment.refresh_location(location, distance, eta);
                self.assignments.update(&assignment).await?;
                Some(assignment)
            }
            None => {
                tracing::warn!(gig_id = %gig.id, "Active gig has no assignment for worker");
                None
            }
        };

        if gig.status == GigStatus::OnRoute && within_arrival_geofence(distance) {
            let observed = gig.revision();
            gig.advance(GigStatus::Arrived, Utc::now())?;
            match self.try_commit(&gig, observed).await? {
                None => {
                    tracing::info!(gig_id = %gig.id, distance_miles = distance, "Worker arrived")
                }
                Some(current) if current.status == GigStatus::Arrived => gig = current,
                Some(current) => return Err(Self::lost_race(&gig, observed, &current)),
            }
        }

        Ok(Some(LocationOutcome {
            gig,
            assignment,
            distance_miles: distance,
            eta_minutes: eta,
        }))
    }

    /// Records feedback on a paid gig; the second rating closes it. A rater
    /// whose close loses to a concurrent rating still succeeds once the gig
    /// is closed.
    #[instrument(skip(self, submission), fields(gig_id = %gig_id, rater_id = %submission.rater_id))]
    pub async fn rate(
        &self,
        gig_id: GigId,
        submission: RatingSubmission,
    ) -> Result<RatingOutcome, LifecycleError> {
        let mut gig = self.load(gig_id).await?;
        let observed = gig.revision();

        if !observed.status.is_rateable() {
            return Err(GigRuleError::NotRateable {
                status: observed.status,
            }
            .into());
        }

        let rating = Rating::new(
            gig.id,
            submission.rater_id,
            submission.rater_type,
            submission.score,
            submission.tags,
            submission.comment,
        )
        .map_err(LifecycleError::InvalidInput)?;

        let existing = self.ratings.list_for_gig(gig.id).await?;
        if existing.iter().any(|r| r.rater_id == rating.rater_id) {
            return Err(LifecycleError::InvalidInput(format!(
                "Rater {} has already rated this gig",
                rating.rater_id
            )));
        }

        self.ratings.create(&rating).await?;
        let total = self.ratings.count_for_gig(gig.id).await?;

        if total >= RATINGS_TO_CLOSE && observed.status == GigStatus::Paid {
            gig.advance(GigStatus::Closed, Utc::now())?;
            match self.try_commit(&gig, observed).await? {
                None => tracing::info!(ratings = total, "Gig closed"),
                Some(current) if current.status == GigStatus::Closed => {
                    tracing::debug!(ratings = total, "Gig already closed by another rating");
                    gig = current;
                }
                Some(current) => return Err(Self::lost_race(&gig, observed, &current)),
            }
        }

        Ok(RatingOutcome { gig, rating })
    }

    async fn load(&self, gig_id: GigId) -> Result<Gig, LifecycleError> {
        self.gigs
            .get_by_id(gig_id)
            .await?
            .ok_or(LifecycleError::NotFound(gig_id))
    }

    async fn commit(&self, gig: &Gig, expected: GigRevision) -> Result<(), LifecycleError> {
        match self.try_commit(gig, expected).await? {
            None => Ok(()),
            Some(current) => Err(Self::lost_race(gig, expected, &current)),
        }
    }

    /// Writes `gig` if the store still holds `expected`; otherwise returns
    /// the gig as it is now stored.
    async fn try_commit(
        &self,
        gig: &Gig,
        expected: GigRevision,
    ) -> Result<Option<Gig>, LifecycleError> {
        if self.gigs.update_if_unchanged(gig, expected).await? {
            return Ok(None);
        }
        self.load(gig.id).await.map(Some)
    }

    fn lost_race(gig: &Gig, expected: GigRevision, current: &Gig) -> LifecycleError {
        tracing::warn!(
            gig_id = %gig.id,
            expected = %expected.status,
            expected_version = expected.version,
            found = %current.status,
            found_version = current.version,
            "Gig changed underneath a transition"
        );
        LifecycleError::InvalidTransition {
            from: current.status,
            to: gig.status,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("gig not found: {0}")]
    NotFound(GigId),
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: GigStatus, to: GigStatus },
    #[error("worker {worker_id} is already assigned to this gig")]
    DuplicateAssignment { worker_id: UserId },
    #[error("gig in status {status} cannot be rated")]
    NotRateable { status: GigStatus },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("storage failure: {0}")]
    StorageFailure(#[from] RepositoryError),
    #[error("payment failure: {0}")]
    PaymentFailure(#[from] PaymentError),
}

impl From<GigRuleError> for LifecycleError {
    fn from(err: GigRuleError) -> Self {
        match err {
            GigRuleError::InvalidTransition { from, to } => {
                LifecycleError::InvalidTransition { from, to }
            }
            GigRuleError::DuplicateAssignment { worker_id } => {
                LifecycleError::DuplicateAssignment { worker_id }
            }
            GigRuleError::NotRateable { status } => LifecycleError::NotRateable { status },
        }
    }
}
