use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// The reason a payment request was rejected before settlement.
///
/// The first five variants are listed in the order `PaymentValidator`
/// evaluates them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("PaymentDetails cannot be null")]
    MissingRequest,
    #[error("PaymentId cannot be null or empty")]
    EmptyPaymentId,
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Currency cannot be null or empty")]
    EmptyCurrency,
    #[error("CustomerId cannot be null or empty")]
    EmptyCustomerId,
    /// Fee or total does not fit in a `Decimal`.
    #[error("Amount is too large to price")]
    AmountOutOfRange,
}

/// Failures reported by a settlement backend.
///
/// Each variant names the payment it was settling so callers can diagnose
/// without looking at gateway internals.
#[derive(Error, Debug, Diagnostic)]
pub enum GatewayError {
    #[error("gateway unavailable while settling {payment_id}: {reason}")]
    #[diagnostic(code(payments::gateway::unavailable))]
    Unavailable { payment_id: String, reason: String },
    #[error("gateway timed out while settling {payment_id}")]
    #[diagnostic(code(payments::gateway::timeout))]
    Timeout { payment_id: String },
    #[error("gateway rejected {payment_id} with HTTP {status}")]
    #[diagnostic(code(payments::gateway::rejected))]
    Rejected { payment_id: String, status: u16 },
    #[error("gateway sent an unreadable response for {payment_id}: {reason}")]
    #[diagnostic(code(payments::gateway::invalid_response))]
    InvalidResponse { payment_id: String, reason: String },
}

impl GatewayError {
    pub fn payment_id(&self) -> &str {
        match self {
            GatewayError::Unavailable { payment_id, .. }
            | GatewayError::Timeout { payment_id }
            | GatewayError::Rejected { payment_id, .. }
            | GatewayError::InvalidResponse { payment_id, .. } => payment_id,
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum PaymentError {
    #[error(
        "Validation error for payment {}: {reason}",
        .payment_id.as_deref().unwrap_or("null")
    )]
    #[diagnostic(
        code(payments::validation),
        help("fix the request and submit it again")
    )]
    ValidationError {
        payment_id: Option<String>,
        reason: ValidationFailure,
    },
    #[error("Configuration error: {0}")]
    #[diagnostic(code(payments::configuration))]
    ConfigurationError(String),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Gateway(#[from] GatewayError),
    #[error("CSV error: {0}")]
    #[diagnostic(code(payments::csv))]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(payments::io))]
    IoError(#[from] std::io::Error),
}
