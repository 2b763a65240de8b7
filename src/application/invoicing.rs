use crate::domain::invoice::{Invoice, InvoiceData};

/// Turns invoices into structured data or display text.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceGenerator;

impl InvoiceGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_invoice_data(&self, invoice: &Invoice) -> Vec<InvoiceData> {
        vec![InvoiceData::from(invoice)]
    }

    pub fn generate_invoice_text(&self, invoice: &Invoice) -> String {
        let data = InvoiceData::from(invoice);
        format!(
            "==== INVOICE ====\n\
             Number: {}\n\
             Customer: {}\n\
             Amount: ${}\n\
             =================\n",
            data.invoice_number, data.customer, data.amount
        )
    }
}

/// Simulated e-mail delivery of invoices.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailService;

impl EmailService {
    pub fn new() -> Self {
        Self
    }

    /// "Sends" the invoice and returns the lines describing the delivery.
    pub fn send_invoice(&self, invoice: &Invoice, recipient_email: &str) -> Vec<String> {
        tracing::info!(
            invoice = invoice.invoice_number(),
            recipient = recipient_email,
            "sending invoice"
        );
        vec![
            format!(
                "Sending invoice {} to: {}",
                invoice.invoice_number(),
                recipient_email
            ),
            "Email sent successfully!".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::Amount;
    use rust_decimal_macros::dec;

    fn invoice() -> Invoice {
        Invoice::new("INV-001", "John Smith", dec!(250.75))
    }

    #[test]
    fn test_generate_invoice_data() {
        let data = InvoiceGenerator::new().generate_invoice_data(&invoice());
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].invoice_number, "INV-001");
        assert_eq!(data[0].customer, "John Smith");
        assert_eq!(data[0].amount, Amount::new(dec!(250.75)));
    }

    #[test]
    fn test_generate_invoice_text() {
        let text = InvoiceGenerator::new().generate_invoice_text(&invoice());
        assert_eq!(
            text,
            "==== INVOICE ====\nNumber: INV-001\nCustomer: John Smith\nAmount: $250.75\n=================\n"
        );
    }

    #[test]
    fn test_send_invoice() {
        let lines = EmailService::new().send_invoice(&invoice(), "john.smith@email.com");
        assert_eq!(
            lines,
            [
                "Sending invoice INV-001 to: john.smith@email.com",
                "Email sent successfully!"
            ]
        );
    }
}
