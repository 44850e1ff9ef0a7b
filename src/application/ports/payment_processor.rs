use async_trait::async_trait;

use crate::domain::{GigId, PaymentRecord};

/// Two-phase payment: reserve on posting, settle on completion.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn preauthorize(&self, gig_id: GigId, amount: f64)
    -> Result<PaymentRecord, PaymentError>;

    async fn capture(
        &self,
        gig_id: GigId,
        preauth: Option<&PaymentRecord>,
        amount: f64,
    ) -> Result<PaymentRecord, PaymentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment declined: {0}")]
    Declined(String),
    #[error("payment provider unavailable: {0}")]
    Unavailable(String),
}
