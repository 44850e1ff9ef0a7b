use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::application::ports::{
    AssignmentRepository, GigRepository, RatingRepository, RepositoryError,
};
use crate::domain::{
    Assignment, AssignmentId, Gig, GigId, GigRevision, GigStatus, Rating, RatingId, UserId,
};

/// Process-local gig store. Conditional updates are atomic under the write lock.
#[derive(Default)]
pub struct InMemoryGigRepository {
    gigs: RwLock<HashMap<GigId, Gig>>,
}

impl InMemoryGigRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut gigs: Vec<Gig>) -> Vec<Gig> {
    gigs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    gigs
}

#[async_trait::async_trait]
impl GigRepository for InMemoryGigRepository {
    async fn create(&self, gig: &Gig) -> Result<(), RepositoryError> {
        let mut gigs = self.gigs.write().await;
        if gigs.contains_key(&gig.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "gig {} already exists",
                gig.id
            )));
        }
        gigs.insert(gig.id, gig.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: GigId) -> Result<Option<Gig>, RepositoryError> {
        Ok(self.gigs.read().await.get(&id).cloned())
    }

    async fn update_if_unchanged(
        &self,
        gig: &Gig,
        expected: GigRevision,
    ) -> Result<bool, RepositoryError> {
        let mut gigs = self.gigs.write().await;
        match gigs.get_mut(&gig.id) {
            Some(stored) if stored.revision() == expected => {
                *stored = gig.clone();
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(RepositoryError::NotFound(format!("gig {}", gig.id))),
        }
    }

    async fn list_by_status(&self, statuses: &[GigStatus]) -> Result<Vec<Gig>, RepositoryError> {
        let gigs = self.gigs.read().await;
        Ok(newest_first(
            gigs.values()
                .filter(|g| statuses.contains(&g.status))
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_client(&self, client_id: UserId) -> Result<Vec<Gig>, RepositoryError> {
        let gigs = self.gigs.read().await;
        Ok(newest_first(
            gigs.values()
                .filter(|g| g.client_id == client_id)
                .cloned()
                .collect(),
        ))
    }

    async fn find_active_for_worker(
        &self,
        worker_id: UserId,
    ) -> Result<Option<Gig>, RepositoryError> {
        let gigs = self.gigs.read().await;
        Ok(gigs
            .values()
            .filter(|g| g.status.is_active() && g.has_worker(worker_id))
            .max_by_key(|g| g.updated_at)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryAssignmentRepository {
    assignments: RwLock<HashMap<AssignmentId, Assignment>>,
}

impl InMemoryAssignmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn create(&self, assignment: &Assignment) -> Result<(), RepositoryError> {
        let mut assignments = self.assignments.write().await;
        let duplicate = assignments
            .values()
            .any(|a| a.gig_id == assignment.gig_id && a.worker_id == assignment.worker_id);
        if duplicate {
            return Err(RepositoryError::ConstraintViolation(format!(
                "worker {} already has an assignment on gig {}",
                assignment.worker_id, assignment.gig_id
            )));
        }
        assignments.insert(assignment.id, assignment.clone());
        Ok(())
    }

    async fn get_by_gig_and_worker(
        &self,
        gig_id: GigId,
        worker_id: UserId,
    ) -> Result<Option<Assignment>, RepositoryError> {
        let assignments = self.assignments.read().await;
        Ok(assignments
            .values()
            .find(|a| a.gig_id == gig_id && a.worker_id == worker_id)
            .cloned())
    }

    async fn list_by_gig(&self, gig_id: GigId) -> Result<Vec<Assignment>, RepositoryError> {
        let assignments = self.assignments.read().await;
        let mut found: Vec<Assignment> = assignments
            .values()
            .filter(|a| a.gig_id == gig_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.accepted_at.cmp(&b.accepted_at));
        Ok(found)
    }

    async fn update(&self, assignment: &Assignment) -> Result<(), RepositoryError> {
        let mut assignments = self.assignments.write().await;
        match assignments.get_mut(&assignment.id) {
            Some(stored) => {
                *stored = assignment.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!(
                "assignment {}",
                assignment.id
            ))),
        }
    }
}

#[derive(Default)]
pub struct InMemoryRatingRepository {
    ratings: RwLock<HashMap<RatingId, Rating>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn create(&self, rating: &Rating) -> Result<(), RepositoryError> {
        let mut ratings = self.ratings.write().await;
        let duplicate = ratings
            .values()
            .any(|r| r.gig_id == rating.gig_id && r.rater_id == rating.rater_id);
        if duplicate {
            return Err(RepositoryError::ConstraintViolation(format!(
                "rater {} already rated gig {}",
                rating.rater_id, rating.gig_id
            )));
        }
        ratings.insert(rating.id, rating.clone());
        Ok(())
    }

    async fn count_for_gig(&self, gig_id: GigId) -> Result<u64, RepositoryError> {
        let ratings = self.ratings.read().await;
        Ok(ratings.values().filter(|r| r.gig_id == gig_id).count() as u64)
    }

    async fn list_for_gig(&self, gig_id: GigId) -> Result<Vec<Rating>, RepositoryError> {
        let ratings = self.ratings.read().await;
        let mut found: Vec<Rating> = ratings
            .values()
            .filter(|r| r.gig_id == gig_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(found)
    }
}
