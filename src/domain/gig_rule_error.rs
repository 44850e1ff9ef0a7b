use super::{GigStatus, UserId};

/// A request that the gig's own rules reject, independent of storage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GigRuleError {
    #[error("cannot move gig from {from} to {to}")]
    InvalidTransition { from: GigStatus, to: GigStatus },
    #[error("worker {worker_id} is already assigned to this gig")]
    DuplicateAssignment { worker_id: UserId },
    #[error("gig in status {status} cannot be rated")]
    NotRateable { status: GigStatus },
}
