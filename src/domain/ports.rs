use super::settlement::SettlementResult;
use crate::error::GatewayError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// A settlement backend.
///
/// `settle` is the only suspension point in payment processing. Timeouts,
/// retries and cancellation are the implementation's business.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn settle(
        &self,
        payment_id: &str,
        amount: Decimal,
    ) -> Result<SettlementResult, GatewayError>;
}

pub type GatewayBox = Box<dyn PaymentGateway>;
