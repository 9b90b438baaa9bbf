use crate::domain::payment::PaymentRequest;
use crate::error::ValidationFailure;
use rust_decimal::Decimal;

/// Structural checks run before any fee calculation or gateway call.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentValidator;

impl PaymentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks `request` and reports the first failing rule.
    ///
    /// Rules are evaluated in a fixed order (presence, id, amount, currency,
    /// customer id) so the reported reason is deterministic. On success the
    /// same request is handed back.
    pub fn validate<'a>(
        &self,
        request: Option<&'a PaymentRequest>,
    ) -> Result<&'a PaymentRequest, ValidationFailure> {
        let Some(request) = request else {
            return Err(ValidationFailure::MissingRequest);
        };

        if request.id.is_empty() {
            return Err(ValidationFailure::EmptyPaymentId);
        }
        if request.amount <= Decimal::ZERO {
            return Err(ValidationFailure::NonPositiveAmount);
        }
        if request.currency.is_empty() {
            return Err(ValidationFailure::EmptyCurrency);
        }
        if request.customer_id.is_empty() {
            return Err(ValidationFailure::EmptyCustomerId);
        }

        Ok(request)
    }
}
