use crate::domain::fees::FeeTable;
use crate::domain::ports::GatewayBox;
use crate::error::{PaymentError, Result};
use crate::infrastructure::http::HttpGateway;
use crate::infrastructure::sandbox::SandboxGateway;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_GATEWAY_TIMEOUT_MS: u64 = 5000;

/// Fee rates as read from a TOML file.
///
/// ```toml
/// default_rate = "0.040"
///
/// [rates]
/// USD = "0.029"
/// EUR = "0.035"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeeSchedule {
    pub default_rate: Decimal,
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

impl FeeSchedule {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source)
            .map_err(|e| PaymentError::ConfigurationError(format!("invalid fee schedule: {e}")))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    pub fn into_fee_table(self) -> Result<FeeTable> {
        FeeTable::new(self.rates, self.default_rate)
    }
}

/// Which settlement backend to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GatewayKind {
    #[default]
    Sandbox,
    Http,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySettings {
    pub kind: GatewayKind,
    pub url: Option<String>,
    pub timeout: Duration,
    pub sandbox_limit: Option<Decimal>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            kind: GatewayKind::Sandbox,
            url: None,
            timeout: Duration::from_millis(DEFAULT_GATEWAY_TIMEOUT_MS),
            sandbox_limit: None,
        }
    }
}

impl GatewaySettings {
    /// Builds the configured gateway.
    ///
    /// An HTTP gateway without a URL yields `Ok(None)`: the processor then
    /// reports a `ConfigurationError` for every payment. A URL that does not
    /// parse is an error here.
    pub fn build(&self) -> Result<Option<GatewayBox>> {
        match self.kind {
            GatewayKind::Sandbox => {
                let gateway = match self.sandbox_limit {
                    Some(limit) => SandboxGateway::with_limit(limit),
                    None => SandboxGateway::new(),
                };
                info!(limit = ?self.sandbox_limit, "Using sandbox gateway");
                Ok(Some(Box::new(gateway)))
            }
            GatewayKind::Http => match self.url.as_deref() {
                Some(url) if !url.trim().is_empty() => {
                    let gateway = HttpGateway::new(url, self.timeout)?;
                    info!(endpoint = %gateway.endpoint(), "Using HTTP gateway");
                    Ok(Some(Box::new(gateway)))
                }
                _ => {
                    warn!(
                        "HTTP gateway selected but no URL configured; payments cannot be settled"
                    );
                    Ok(None)
                }
            },
        }
    }
}
