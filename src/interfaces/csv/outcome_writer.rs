use crate::domain::payment::PaymentRequest;
use crate::domain::settlement::ProcessedPayment;
use crate::error::Result;
use std::io::Write;

/// Writes processing outcomes and payment records as CSV.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header `id,currency,amount,fee,total,settled`.
    pub fn write_header(&mut self) -> Result<()> {
        self.writer
            .write_record(["id", "currency", "amount", "fee", "total", "settled"])?;
        Ok(())
    }

    /// Writes one processed payment. Decimals are normalized, so `102.90`
    /// is written as `102.9`.
    pub fn write_outcome(
        &mut self,
        request: &PaymentRequest,
        outcome: &ProcessedPayment,
    ) -> Result<()> {
        let amount = request.amount.normalize().to_string();
        let fee = outcome.quote.fee.normalize().to_string();
        let total = outcome.quote.total.normalize().to_string();
        self.writer.write_record([
            outcome.payment_id.as_str(),
            request.currency.as_str(),
            amount.as_str(),
            fee.as_str(),
            total.as_str(),
            if outcome.settled { "true" } else { "false" },
        ])?;
        Ok(())
    }

    /// Writes full payment records with a serde-derived header.
    pub fn write_payments(&mut self, payments: &[PaymentRequest]) -> Result<()> {
        for payment in payments {
            self.writer.serialize(payment)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
