use super::fees::FeeQuote;
use serde::{Deserialize, Serialize};

/// What a gateway reports back for one settlement.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl SettlementResult {
    pub fn approved() -> Self {
        Self {
            success: true,
            error_message: None,
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
        }
    }
}

/// The outcome of a payment that reached the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedPayment {
    pub payment_id: String,
    pub quote: FeeQuote,
    pub settled: bool,
    pub error_message: Option<String>,
}
