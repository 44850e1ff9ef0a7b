use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::application::ports::{PaymentError, PaymentProcessor};
use crate::domain::{GigId, PaymentRecord, PaymentStatus};

/// Simulated processor: every reservation is granted and every capture settles
/// the requested amount. No money moves.
#[derive(Debug, Default)]
pub struct MockPaymentProcessor;

#[async_trait]
impl PaymentProcessor for MockPaymentProcessor {
    async fn preauthorize(
        &self,
        gig_id: GigId,
        amount: f64,
    ) -> Result<PaymentRecord, PaymentError> {
        if !(amount.is_finite() && amount >= 0.0) {
            return Err(PaymentError::Declined(format!("invalid amount {}", amount)));
        }

        let record = PaymentRecord {
            id: format!("pi_{}", Uuid::new_v4().simple()),
            status: PaymentStatus::Authorized,
            amount,
            timestamp: Utc::now(),
        };
        tracing::debug!(gig_id = %gig_id, payment_id = %record.id, amount, "Payment pre-authorized");
        Ok(record)
    }

    async fn capture(
        &self,
        gig_id: GigId,
        preauth: Option<&PaymentRecord>,
        amount: f64,
    ) -> Result<PaymentRecord, PaymentError> {
        if let Some(preauth) = preauth {
            if preauth.status != PaymentStatus::Authorized {
                return Err(PaymentError::Declined(format!(
                    "pre-authorization {} is not open",
                    preauth.id
                )));
            }
        }

        let record = PaymentRecord {
            id: format!("ch_{}", Uuid::new_v4().simple()),
            status: PaymentStatus::Captured,
            amount,
            timestamp: Utc::now(),
        };
        tracing::debug!(gig_id = %gig_id, payment_id = %record.id, amount, "Payment captured");
        Ok(record)
    }
}
