use async_trait::async_trait;

use crate::domain::{GigId, Rating};

use super::RepositoryError;

#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn create(&self, rating: &Rating) -> Result<(), RepositoryError>;

    async fn count_for_gig(&self, gig_id: GigId) -> Result<u64, RepositoryError>;

    async fn list_for_gig(&self, gig_id: GigId) -> Result<Vec<Rating>, RepositoryError>;
}
