use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Authorized,
    Captured,
}

/// Simulated payment step: a reservation on creation, a settlement on completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub status: PaymentStatus,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}
