use std::sync::Arc;

use crate::application::ports::{
    AssignmentRepository, GigRepository, RatingRepository, RepositoryError,
};
use crate::presentation::config::{DatabaseSettings, StorageProviderSetting, StorageSettings};

use super::pg_pool::{create_pool, run_migrations};
use super::repositories::{
    InMemoryAssignmentRepository, InMemoryGigRepository, InMemoryRatingRepository,
    PgAssignmentRepository, PgGigRepository, PgRatingRepository,
};

/// The storage handles the service runs against, built once at startup.
#[derive(Clone)]
pub struct Stores {
    pub gigs: Arc<dyn GigRepository>,
    pub assignments: Arc<dyn AssignmentRepository>,
    pub ratings: Arc<dyn RatingRepository>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Self {
            gigs: Arc::new(InMemoryGigRepository::new()),
            assignments: Arc::new(InMemoryAssignmentRepository::new()),
            ratings: Arc::new(InMemoryRatingRepository::new()),
        }
    }
}

pub async fn create_stores(
    storage: &StorageSettings,
    database: &DatabaseSettings,
) -> Result<Stores, RepositoryError> {
    match storage.provider {
        StorageProviderSetting::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            Ok(Stores::in_memory())
        }
        StorageProviderSetting::Postgres => {
            let pool = create_pool(&database.url, database.max_connections).await?;
            if database.run_migrations {
                run_migrations(&pool).await?;
            }
            Ok(Stores {
                gigs: Arc::new(PgGigRepository::new(pool.clone())),
                assignments: Arc::new(PgAssignmentRepository::new(pool.clone())),
                ratings: Arc::new(PgRatingRepository::new(pool)),
            })
        }
    }
}
