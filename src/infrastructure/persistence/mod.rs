mod pg_pool;
mod repositories;
mod sql_error;
mod store_factory;

pub use repositories::{
    InMemoryAssignmentRepository, InMemoryGigRepository, InMemoryRatingRepository,
    PgAssignmentRepository, PgGigRepository, PgRatingRepository,
};

pub use pg_pool::{create_pool, run_migrations};
pub use store_factory::{Stores, create_stores};
