use crate::domain::payment::PaymentRequest;
use crate::error::{PaymentError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of the input file. `created_at` may be left blank.
#[derive(Debug, Deserialize)]
struct PaymentRow {
    id: String,
    // Parsed from the raw text; csv would otherwise hand over an f64.
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: String,
    customer_id: String,
    created_at: Option<DateTime<Utc>>,
}

impl From<PaymentRow> for PaymentRequest {
    fn from(row: PaymentRow) -> Self {
        let request = PaymentRequest::new(row.id, row.amount, row.currency, row.customer_id);
        match row.created_at {
            Some(at) => request.with_created_at(at),
            None => request,
        }
    }
}

/// Reads payment requests from a CSV source.
///
/// Expects the header `id, amount, currency, customer_id, created_at`.
/// Whitespace around fields is trimmed and short records are accepted, so the
/// trailing `created_at` column can be omitted entirely.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// Structural validation is left to the processor; a row with an empty id
    /// still comes out as `Ok`.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize::<PaymentRow>()
            .map(|result| result.map(PaymentRequest::from).map_err(PaymentError::from))
    }
}
