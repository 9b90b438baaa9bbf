#![allow(dead_code)]

use async_trait::async_trait;
use payments_service::domain::payment::PaymentRequest;
use payments_service::domain::ports::PaymentGateway;
use payments_service::domain::settlement::SettlementResult;
use payments_service::error::GatewayError;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Approves everything and remembers what it was asked to settle.
#[derive(Default, Clone)]
pub struct RecordingGateway {
    calls: Arc<RwLock<Vec<(String, Decimal)>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn calls(&self) -> Vec<(String, Decimal)> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn settle(
        &self,
        payment_id: &str,
        amount: Decimal,
    ) -> Result<SettlementResult, GatewayError> {
        self.calls
            .write()
            .await
            .push((payment_id.to_string(), amount));
        Ok(SettlementResult::approved())
    }
}

/// Always times out.
#[derive(Default, Clone)]
pub struct TimeoutGateway;

#[async_trait]
impl PaymentGateway for TimeoutGateway {
    async fn settle(
        &self,
        payment_id: &str,
        _amount: Decimal,
    ) -> Result<SettlementResult, GatewayError> {
        Err(GatewayError::Timeout {
            payment_id: payment_id.to_string(),
        })
    }
}

pub fn request(id: &str, amount: Decimal, currency: &str) -> PaymentRequest {
    PaymentRequest::new(id, amount, currency, "CUST-001")
}
