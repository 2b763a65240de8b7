use super::amount::Amount;
use serde::{Deserialize, Serialize, Serializer};

/// Invoice details. Holds data only; storing, rendering and sending invoices
/// live elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    invoice_number: String,
    customer_name: String,
    amount: Amount,
}

impl Invoice {
    pub fn new(
        invoice_number: impl Into<String>,
        customer_name: impl Into<String>,
        amount: impl Into<Amount>,
    ) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            customer_name: customer_name.into(),
            amount: amount.into(),
        }
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// Structured form of an invoice as produced by the invoice generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceData {
    #[serde(rename = "InvoiceNumber")]
    pub invoice_number: String,
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Amount", serialize_with = "serialize_amount")]
    pub amount: Amount,
}

fn serialize_amount<S>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    rust_decimal::serde::float::serialize(&amount.value(), serializer)
}

impl From<&Invoice> for InvoiceData {
    fn from(invoice: &Invoice) -> Self {
        Self {
            invoice_number: invoice.invoice_number.clone(),
            customer: invoice.customer_name.clone(),
            amount: invoice.amount,
        }
    }
}
