use async_trait::async_trait;

use crate::domain::{Gig, GigId, GigRevision, GigStatus, UserId};

use super::RepositoryError;

#[async_trait]
pub trait GigRepository: Send + Sync {
    async fn create(&self, gig: &Gig) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: GigId) -> Result<Option<Gig>, RepositoryError>;

    /// Overwrites the stored gig only if the stored document is still at
    /// the `expected` revision. Returns `false` when the write was skipped.
    async fn update_if_unchanged(
        &self,
        gig: &Gig,
        expected: GigRevision,
    ) -> Result<bool, RepositoryError>;

    async fn list_by_status(&self, statuses: &[GigStatus]) -> Result<Vec<Gig>, RepositoryError>;

    async fn list_by_client(&self, client_id: UserId) -> Result<Vec<Gig>, RepositoryError>;

    /// Most recently updated gig the worker is currently working, if any.
    async fn find_active_for_worker(
        &self,
        worker_id: UserId,
    ) -> Result<Option<Gig>, RepositoryError>;
}
