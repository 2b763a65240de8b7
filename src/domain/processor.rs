use super::amount::Amount;

/// A payment method the registry can dispatch to.
///
/// New methods are supported by adding an implementation of this trait; the
/// registry itself never changes.
pub trait PaymentProcessor: Send + Sync {
    /// Processes `amount` and returns a human-readable description of the result.
    fn process_payment(&self, amount: Amount) -> String;

    /// The name callers use to select this processor.
    fn payment_type(&self) -> &str;
}

pub type ProcessorBox = Box<dyn PaymentProcessor>;

fn processed_via(amount: Amount, label: &str) -> String {
    format!("Processed ${amount} via {label}")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn process_payment(&self, amount: Amount) -> String {
        processed_via(amount, self.payment_type())
    }

    fn payment_type(&self) -> &str {
        "Credit Card"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DebitCardProcessor;

impl PaymentProcessor for DebitCardProcessor {
    fn process_payment(&self, amount: Amount) -> String {
        processed_via(amount, self.payment_type())
    }

    fn payment_type(&self) -> &str {
        "Debit Card"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpiProcessor;

impl PaymentProcessor for UpiProcessor {
    fn process_payment(&self, amount: Amount) -> String {
        processed_via(amount, self.payment_type())
    }

    fn payment_type(&self) -> &str {
        "UPI"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn process_payment(&self, amount: Amount) -> String {
        processed_via(amount, self.payment_type())
    }

    fn payment_type(&self) -> &str {
        "PayPal"
    }
}
