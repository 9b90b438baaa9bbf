use super::validator::PaymentValidator;
use crate::domain::fees::{FeeQuote, FeeTable};
use crate::domain::payment::PaymentRequest;
use crate::domain::ports::GatewayBox;
use crate::domain::settlement::ProcessedPayment;
use crate::error::{PaymentError, Result, ValidationFailure};
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use tracing::{debug, error, info};

/// Orchestrates validation, fee calculation and settlement of payments.
///
/// The processor owns an immutable fee table and, optionally, a gateway. It
/// keeps no per-call state, so a shared reference can serve concurrent
/// `process` calls as long as the gateway tolerates them.
///
/// Requests are not deduplicated: processing the same id twice settles twice.
pub struct PaymentProcessor {
    gateway: Option<GatewayBox>,
    fee_table: FeeTable,
    validator: PaymentValidator,
}

impl PaymentProcessor {
    /// Creates a processor using the standard fee table.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The settlement backend. `None` leaves the processor
    ///   unconfigured and every call fails with `ConfigurationError`.
    pub fn new(gateway: Option<GatewayBox>) -> Self {
        Self::with_fee_table(gateway, FeeTable::standard())
    }

    pub fn with_fee_table(gateway: Option<GatewayBox>, fee_table: FeeTable) -> Self {
        Self {
            gateway,
            fee_table,
            validator: PaymentValidator::new(),
        }
    }

    pub fn fee_table(&self) -> &FeeTable {
        &self.fee_table
    }

    /// Processes one payment and returns whether the gateway settled it.
    ///
    /// Gateway errors are returned unchanged.
    pub async fn process(&self, request: Option<&PaymentRequest>) -> Result<bool> {
        self.settle(request).await.map(|outcome| outcome.settled)
    }

    /// Runs the full pipeline and returns the fee breakdown with the result.
    pub async fn settle(&self, request: Option<&PaymentRequest>) -> Result<ProcessedPayment> {
        let result = self.settle_inner(request).await;
        if let Err(e) = &result {
            error!(
                payment_id = request.map_or("null", |r| r.id.as_str()),
                "Payment processing failed: {e}"
            );
        }
        result
    }

    async fn settle_inner(&self, request: Option<&PaymentRequest>) -> Result<ProcessedPayment> {
        let Some(gateway) = self.gateway.as_ref() else {
            return Err(PaymentError::ConfigurationError(
                "Payment gateway is not configured".to_string(),
            ));
        };

        let request = self.validated(request)?;
        let quote = self.priced(request)?;

        debug!(
            payment_id = %request.id,
            fee = %quote.fee,
            total = %quote.total,
            "Settling payment"
        );
        let result = gateway.settle(&request.id, quote.total).await?;

        info!(
            payment_id = %request.id,
            success = result.success,
            "Payment settlement completed"
        );
        Ok(ProcessedPayment {
            payment_id: request.id.clone(),
            quote,
            settled: result.success,
            error_message: result.error_message,
        })
    }

    /// Validates `request` and computes its fee without settling it.
    pub fn quote(&self, request: Option<&PaymentRequest>) -> Result<FeeQuote> {
        let request = self.validated(request)?;
        self.priced(request)
    }

    fn priced(&self, request: &PaymentRequest) -> Result<FeeQuote> {
        self.fee_table
            .quote(request.amount, &request.currency)
            .ok_or_else(|| PaymentError::ValidationError {
                payment_id: Some(request.id.clone()),
                reason: ValidationFailure::AmountOutOfRange,
            })
    }

    fn validated<'a>(&self, request: Option<&'a PaymentRequest>) -> Result<&'a PaymentRequest> {
        self.validator
            .validate(request)
            .map_err(|reason| PaymentError::ValidationError {
                payment_id: request
                    .map(|r| r.id.clone())
                    .filter(|id| !id.is_empty()),
                reason,
            })
    }

    /// Returns the recent payments the gateway failed to settle.
    ///
    /// The snapshot is fixed and ordered oldest first.
    pub fn list_failed_payments(&self) -> Vec<PaymentRequest> {
        let now = Utc::now();
        vec![
            PaymentRequest::new("PMT-12345", dec!(299.99), "USD", "CUST-001")
                .with_created_at(now - Duration::minutes(30)),
            PaymentRequest::new("PMT-12347", dec!(89.99), "EUR", "CUST-002")
                .with_created_at(now - Duration::minutes(20)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::PaymentGateway;
    use crate::domain::settlement::SettlementResult;
    use crate::error::GatewayError;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Default, Clone)]
    struct StubGateway {
        calls: Arc<RwLock<Vec<(String, Decimal)>>>,
        decline: bool,
    }

    #[async_trait]
    impl PaymentGateway for StubGateway {
        async fn settle(
            &self,
            payment_id: &str,
            amount: Decimal,
        ) -> std::result::Result<SettlementResult, GatewayError> {
            self.calls
                .write()
                .await
                .push((payment_id.to_string(), amount));
            if self.decline {
                Ok(SettlementResult::declined("insufficient funds"))
            } else {
                Ok(SettlementResult::approved())
            }
        }
    }

    #[tokio::test]
    async fn test_process_settles_amount_plus_fee() {
        let gateway = StubGateway::default();
        let processor = PaymentProcessor::new(Some(Box::new(gateway.clone())));
        let request = PaymentRequest::new("PMT-1", dec!(100.00), "USD", "CUST-1");

        assert!(processor.process(Some(&request)).await.unwrap());

        let calls = gateway.calls.read().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "PMT-1");
        assert_eq!(calls[0].1, dec!(102.90));
    }

    #[tokio::test]
    async fn test_process_returns_declined_flag() {
        let gateway = StubGateway {
            decline: true,
            ..Default::default()
        };
        let processor = PaymentProcessor::new(Some(Box::new(gateway)));
        let request = PaymentRequest::new("PMT-1", dec!(5), "EUR", "CUST-1");

        let outcome = processor.settle(Some(&request)).await.unwrap();
        assert!(!outcome.settled);
        assert_eq!(outcome.error_message.as_deref(), Some("insufficient funds"));
        assert_eq!(outcome.quote.total, dec!(5.175));
    }

    #[tokio::test]
    async fn test_missing_gateway_is_configuration_error() {
        let processor = PaymentProcessor::new(None);
        let request = PaymentRequest::new("PMT-1", dec!(1), "USD", "CUST-1");

        assert!(matches!(
            processor.process(Some(&request)).await,
            Err(PaymentError::ConfigurationError(_))
        ));
        assert!(matches!(
            processor.process(None).await,
            Err(PaymentError::ConfigurationError(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_request_is_validation_error() {
        let gateway = StubGateway::default();
        let processor = PaymentProcessor::new(Some(Box::new(gateway.clone())));

        let err = processor.process(None).await.unwrap_err();
        assert!(matches!(
            err,
            PaymentError::ValidationError {
                payment_id: None,
                reason: ValidationFailure::MissingRequest
            }
        ));
        assert!(gateway.calls.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_validation_error_carries_payment_id() {
        let processor = PaymentProcessor::new(Some(Box::new(StubGateway::default())));
        let request = PaymentRequest::new("PMT-9", dec!(0), "USD", "CUST-1");

        let err = processor.process(Some(&request)).await.unwrap_err();
        assert!(matches!(
            &err,
            PaymentError::ValidationError {
                payment_id: Some(id),
                reason: ValidationFailure::NonPositiveAmount
            } if id == "PMT-9"
        ));
        assert_eq!(
            err.to_string(),
            "Validation error for payment PMT-9: Amount must be greater than zero"
        );
    }

    #[tokio::test]
    async fn test_overflowing_total_is_rejected_before_settlement() {
        let gateway = StubGateway::default();
        let processor = PaymentProcessor::new(Some(Box::new(gateway.clone())));
        let request = PaymentRequest::new("PMT-BIG", Decimal::MAX, "USD", "CUST-1");

        let err = processor.process(Some(&request)).await.unwrap_err();
        assert!(matches!(
            &err,
            PaymentError::ValidationError {
                payment_id: Some(id),
                reason: ValidationFailure::AmountOutOfRange
            } if id == "PMT-BIG"
        ));
        assert!(gateway.calls.read().await.is_empty());
    }

    #[test]
    fn test_quote_without_settlement() {
        let processor = PaymentProcessor::new(None);
        let request = PaymentRequest::new("PMT-1", dec!(100.00), "GBP", "CUST-1");

        let quote = processor.quote(Some(&request)).unwrap();
        assert_eq!(quote.rate, dec!(0.032));
        assert_eq!(quote.total, dec!(103.20));
    }

    #[test]
    fn test_failed_payments_snapshot() {
        let processor = PaymentProcessor::new(None);
        let failed = processor.list_failed_payments();

        let ids: Vec<&str> = failed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["PMT-12345", "PMT-12347"]);
        assert!(failed[0].created_at < failed[1].created_at);
        for payment in &failed {
            assert!(PaymentValidator::new().validate(Some(payment)).is_ok());
        }
    }
}
