use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single payment attempt submitted by a caller.
///
/// Requests are built per attempt and dropped once processing returns. The
/// struct itself enforces nothing; `PaymentValidator` decides whether it may
/// proceed to fee calculation and settlement.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    /// Caller-assigned identifier, must be non-empty.
    pub id: String,
    /// Amount to charge before fees, must be positive.
    pub amount: Decimal,
    /// Currency code. Lookups into the fee table are case-sensitive.
    pub currency: String,
    pub customer_id: String,
    /// Informational only.
    pub created_at: DateTime<Utc>,
}

impl PaymentRequest {
    /// Creates a request stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            currency: currency.into(),
            customer_id: customer_id.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
