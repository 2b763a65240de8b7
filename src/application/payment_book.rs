use crate::domain::amount::Amount;
use crate::domain::payment_method::PaymentMethodBox;
use crate::error::{PaymentError, Result};
use std::collections::HashMap;

/// Payment methods registered under caller-chosen names.
///
/// Unlike `ProcessorRegistry`, names are matched exactly and registering a
/// name twice replaces the earlier method.
#[derive(Default)]
pub struct PaymentBook {
    methods: HashMap<String, PaymentMethodBox>,
}

impl PaymentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `method` under `name` and returns the confirmation line.
    pub fn add_payment_method(&mut self, name: &str, method: PaymentMethodBox) -> Result<String> {
        if name.trim().is_empty() {
            return Err(PaymentError::ValidationError(
                "Payment method name cannot be empty".to_string(),
            ));
        }
        tracing::debug!(name, "adding payment method");
        self.methods.insert(name.to_string(), method);
        Ok(format!("Adding payment method: {name}"))
    }

    /// Pays `amount` with the method stored under `name`.
    ///
    /// Returns the processing line followed by the method's own payment line.
    pub fn make_payment(&self, name: &str, amount: Amount) -> Result<Vec<String>> {
        let method = self
            .methods
            .get(name)
            .ok_or_else(|| PaymentError::MethodNotFound(name.to_string()))?;

        Ok(vec![
            format!(
                "Processing payment of ${amount} using {name} with card number: {}",
                method.card_number()
            ),
            method.pay(),
        ])
    }
}
