use crate::domain::amount::Amount;
use crate::domain::processor::{
    CreditCardProcessor, DebitCardProcessor, PayPalProcessor, PaymentProcessor, ProcessorBox,
    UpiProcessor,
};
use crate::error::{PaymentError, Result};

/// Ordered collection of payment processors.
///
/// `ProcessorRegistry` dispatches a payment either to the first registered
/// processor or to the first one whose payment type matches a requested name.
/// Processors are only ever appended, so the default never changes once set.
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: Vec<ProcessorBox>,
}

impl ProcessorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding Credit Card, Debit Card, UPI and PayPal, in that order.
    pub fn with_default_processors() -> Self {
        let mut registry = Self::new();
        registry.add_processor(Box::new(CreditCardProcessor));
        registry.add_processor(Box::new(DebitCardProcessor));
        registry.add_processor(Box::new(UpiProcessor));
        registry.add_processor(Box::new(PayPalProcessor));
        registry
    }

    /// Appends a processor. Duplicate payment types are allowed; lookups
    /// resolve to the earliest one.
    pub fn add_processor(&mut self, processor: ProcessorBox) {
        tracing::debug!(payment_type = processor.payment_type(), "registering processor");
        self.processors.push(processor);
    }

    /// Processes `amount` with the first registered processor.
    ///
    /// Returns `PaymentError::NoPaymentMethods` when nothing is registered.
    pub fn process_payment(&self, amount: Amount) -> Result<String> {
        let Some(processor) = self.processors.first() else {
            tracing::warn!(%amount, "no payment methods registered");
            return Err(PaymentError::NoPaymentMethods);
        };
        tracing::debug!(payment_type = processor.payment_type(), %amount, "dispatching to default processor");
        Ok(processor.process_payment(amount))
    }

    /// Processes `amount` with the first processor whose payment type matches
    /// `payment_type`, ignoring case.
    ///
    /// Returns `PaymentError::MethodNotFound` when no processor matches.
    pub fn process_payment_with(&self, payment_type: &str, amount: Amount) -> Result<String> {
        match self.find(payment_type) {
            Some(processor) => {
                tracing::debug!(payment_type = processor.payment_type(), %amount, "dispatching to named processor");
                Ok(processor.process_payment(amount))
            }
            None => {
                tracing::warn!(payment_type, %amount, "payment method not found");
                Err(PaymentError::MethodNotFound(payment_type.to_string()))
            }
        }
    }

    /// Payment types of all registered processors, in registration order.
    pub fn list_available_methods(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.payment_type()).collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    fn find(&self, payment_type: &str) -> Option<&dyn PaymentProcessor> {
        let wanted = payment_type.to_lowercase();
        self.processors
            .iter()
            .find(|p| p.payment_type().to_lowercase() == wanted)
            .map(|p| p.as_ref())
    }
}
