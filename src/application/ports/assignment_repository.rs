use async_trait::async_trait;

use crate::domain::{Assignment, GigId, UserId};

use super::RepositoryError;

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn create(&self, assignment: &Assignment) -> Result<(), RepositoryError>;

    async fn get_by_gig_and_worker(
        &self,
        gig_id: GigId,
        worker_id: UserId,
    ) -> Result<Option<Assignment>, RepositoryError>;

    async fn list_by_gig(&self, gig_id: GigId) -> Result<Vec<Assignment>, RepositoryError>;

    async fn update(&self, assignment: &Assignment) -> Result<(), RepositoryError>;
}
