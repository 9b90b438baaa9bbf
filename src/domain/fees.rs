use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use tracing::warn;

/// Fee rate applied to currencies without an explicit entry.
pub const DEFAULT_FEE_RATE: Decimal = dec!(0.040);

/// Fee rates keyed by currency code.
///
/// Built once and handed to the processor at construction time. There is no
/// way to mutate a table after it has been created, so a single table can be
/// shared by any number of concurrent `process` calls.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeTable {
    rates: HashMap<String, Decimal>,
    default_rate: Decimal,
}

/// The fee breakdown for one payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeQuote {
    pub rate: Decimal,
    pub fee: Decimal,
    pub total: Decimal,
}

impl FeeTable {
    /// Creates a table from explicit rates and a fallback rate.
    ///
    /// Returns a `ConfigurationError` if any rate is negative.
    pub fn new(rates: HashMap<String, Decimal>, default_rate: Decimal) -> Result<Self> {
        if default_rate.is_sign_negative() {
            return Err(PaymentError::ConfigurationError(format!(
                "default fee rate must not be negative, got {default_rate}"
            )));
        }
        if let Some((currency, rate)) = rates.iter().find(|(_, rate)| rate.is_sign_negative()) {
            return Err(PaymentError::ConfigurationError(format!(
                "fee rate for {currency} must not be negative, got {rate}"
            )));
        }
        Ok(Self {
            rates,
            default_rate,
        })
    }

    /// The card-network rates the service ships with.
    pub fn standard() -> Self {
        let rates = HashMap::from([
            ("USD".to_string(), dec!(0.029)),
            ("EUR".to_string(), dec!(0.035)),
            ("GBP".to_string(), dec!(0.032)),
        ]);
        Self {
            rates,
            default_rate: DEFAULT_FEE_RATE,
        }
    }

    pub fn default_rate(&self) -> Decimal {
        self.default_rate
    }

    pub fn supports(&self, currency: &str) -> bool {
        self.rates.contains_key(currency)
    }

    /// Returns the fee rate for `currency`.
    ///
    /// Unknown currencies degrade to the default rate and emit a warning; they
    /// never fail the payment.
    pub fn rate_for(&self, currency: &str) -> Decimal {
        match self.rates.get(currency) {
            Some(rate) => *rate,
            None => {
                warn!(
                    currency,
                    default_rate = %self.default_rate,
                    "Unsupported currency '{currency}', using default fee rate"
                );
                self.default_rate
            }
        }
    }

    /// Prices `amount`. Returns `None` if the fee or the total overflows
    /// `Decimal`.
    pub fn quote(&self, amount: Decimal, currency: &str) -> Option<FeeQuote> {
        let rate = self.rate_for(currency);
        let fee = amount.checked_mul(rate)?;
        let total = amount.checked_add(fee)?;
        Some(FeeQuote { rate, fee, total })
    }
}

impl Default for FeeTable {
    fn default() -> Self {
        Self::standard()
    }
}
