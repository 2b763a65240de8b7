use crate::application::registry::ProcessorRegistry;
use crate::domain::amount::Amount;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a payment batch.
///
/// An empty `method` column selects the registry's default processor.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub method: Option<String>,
    pub amount: Amount,
}

impl PaymentRequest {
    /// Dispatches this request through `registry`.
    pub fn dispatch(&self, registry: &ProcessorRegistry) -> Result<String> {
        match self.method.as_deref() {
            Some(method) => registry.process_payment_with(method, self.amount),
            None => registry.process_payment(self.amount),
        }
    }
}

/// Reads payment requests from a CSV source with a `method, amount` header.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// A malformed row yields an error item; later rows are still read.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
