use crate::domain::ports::PaymentGateway;
use crate::domain::settlement::SettlementResult;
use crate::error::GatewayError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A settlement the sandbox has seen.
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxSettlement {
    pub payment_id: String,
    pub amount: Decimal,
    pub success: bool,
}

/// A deterministic in-process gateway.
///
/// Approves every settlement unless a limit is set, in which case totals
/// above the limit are declined. Every call is recorded; clones share the
/// same log, so a handle kept by the caller sees what the processor sent.
#[derive(Default, Clone)]
pub struct SandboxGateway {
    limit: Option<Decimal>,
    settlements: Arc<RwLock<Vec<SandboxSettlement>>>,
}

impl SandboxGateway {
    /// Creates a sandbox that approves everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sandbox that declines totals strictly above `limit`.
    pub fn with_limit(limit: Decimal) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Returns every settlement attempted so far, in call order.
    pub async fn settlements(&self) -> Vec<SandboxSettlement> {
        self.settlements.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn settle(
        &self,
        payment_id: &str,
        amount: Decimal,
    ) -> Result<SettlementResult, GatewayError> {
        let result = match self.limit {
            Some(limit) if amount > limit => {
                SettlementResult::declined(format!("amount {amount} exceeds sandbox limit {limit}"))
            }
            _ => SettlementResult::approved(),
        };
        debug!(payment_id, %amount, success = result.success, "Sandbox settlement");

        let mut settlements = self.settlements.write().await;
        settlements.push(SandboxSettlement {
            payment_id: payment_id.to_string(),
            amount,
            success: result.success,
        });
        Ok(result)
    }
}
