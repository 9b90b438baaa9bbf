use crate::domain::ports::PaymentGateway;
use crate::domain::settlement::SettlementResult;
use crate::error::{GatewayError, PaymentError, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use rust_decimal::Decimal;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettlementPayload<'a> {
    payment_id: &'a str,
    amount: Decimal,
}

/// A gateway that settles payments over HTTP.
///
/// Sends `POST {base_url}/settlements` with a JSON body and expects a
/// `SettlementResult` back. The request timeout is the only cancellation
/// mechanism; nothing is retried.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    endpoint: Url,
}

impl HttpGateway {
    /// Builds a gateway for the settlement service at `base_url`.
    ///
    /// Fails with `ConfigurationError` if the URL cannot be parsed or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = format!("{}/settlements", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint).map_err(|e| {
            PaymentError::ConfigurationError(format!("invalid gateway URL '{base_url}': {e}"))
        })?;

        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            PaymentError::ConfigurationError(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn transport_error(payment_id: &str, err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout {
            payment_id: payment_id.to_string(),
        }
    } else {
        GatewayError::Unavailable {
            payment_id: payment_id.to_string(),
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn settle(
        &self,
        payment_id: &str,
        amount: Decimal,
    ) -> std::result::Result<SettlementResult, GatewayError> {
        debug!(payment_id, %amount, endpoint = %self.endpoint, "Sending settlement");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SettlementPayload { payment_id, amount })
            .send()
            .await
            .map_err(|e| transport_error(payment_id, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(payment_id, %status, "Gateway rejected settlement");
            return Err(GatewayError::Rejected {
                payment_id: payment_id.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<SettlementResult>()
            .await
            .map_err(|e| GatewayError::InvalidResponse {
                payment_id: payment_id.to_string(),
                reason: e.to_string(),
            })
    }
}
