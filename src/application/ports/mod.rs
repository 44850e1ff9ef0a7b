mod assignment_repository;
mod gig_repository;
mod llm_client;
mod payment_processor;
mod rating_repository;
mod repository_error;

pub use assignment_repository::AssignmentRepository;
pub use gig_repository::GigRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use payment_processor::{PaymentError, PaymentProcessor};
pub use rating_repository::RatingRepository;
pub use repository_error::RepositoryError;
