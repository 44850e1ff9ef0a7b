mod in_memory_repository;
mod pg_assignment_repository;
mod pg_gig_repository;
mod pg_rating_repository;

pub use in_memory_repository::{
    InMemoryAssignmentRepository, InMemoryGigRepository, InMemoryRatingRepository,
};
pub use pg_assignment_repository::PgAssignmentRepository;
pub use pg_gig_repository::PgGigRepository;
pub use pg_rating_repository::PgRatingRepository;
