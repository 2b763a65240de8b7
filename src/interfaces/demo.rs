//! Scripted walkthroughs of the library, printed line by line.
//!
//! Each demo writes to any `io::Write` so the binary can target stdout and
//! tests can capture the output.

use crate::application::invoicing::{EmailService, InvoiceGenerator};
use crate::application::payment_book::PaymentBook;
use crate::application::registry::ProcessorRegistry;
use crate::domain::amount::Amount;
use crate::domain::invoice::Invoice;
use crate::domain::payment_method::{CreditCard, DebitCard, Upi};
use crate::domain::ports::InvoiceStoreBox;
use crate::domain::processor::{
    CreditCardProcessor, DebitCardProcessor, PayPalProcessor, UpiProcessor,
};
use crate::error::{PaymentError, Result};
use rust_decimal_macros::dec;
use std::io::Write;

/// Prints the registered payment methods as a bulleted list.
pub fn write_methods<W: Write>(out: &mut W, registry: &ProcessorRegistry) -> Result<()> {
    writeln!(out, "Available payment methods:")?;
    for method in registry.list_available_methods() {
        writeln!(out, "- {method}")?;
    }
    Ok(())
}

/// Dispatches to the default processor and prints the outcome.
pub fn write_payment<W: Write>(
    out: &mut W,
    registry: &ProcessorRegistry,
    amount: Amount,
) -> Result<()> {
    writeln!(out, "Processing payment of ${amount}...")?;
    let line = status_line(registry.process_payment(amount))?;
    writeln!(out, "{line}")?;
    Ok(())
}

/// Dispatches to the processor named `payment_type` and prints the outcome.
pub fn write_payment_with<W: Write>(
    out: &mut W,
    registry: &ProcessorRegistry,
    payment_type: &str,
    amount: Amount,
) -> Result<()> {
    writeln!(out, "Processing payment of ${amount} with {payment_type}...")?;
    let line = status_line(registry.process_payment_with(payment_type, amount))?;
    writeln!(out, "{line}")?;
    Ok(())
}

// Dispatch failures are printed as status lines; anything else propagates.
fn status_line(result: Result<String>) -> Result<String> {
    match result {
        Ok(line) => Ok(line),
        Err(e @ (PaymentError::NoPaymentMethods | PaymentError::MethodNotFound(_))) => {
            Ok(e.to_string())
        }
        Err(e) => Err(e),
    }
}

/// Registers processors, dispatches, then adds PayPal without touching the
/// registry's code.
pub fn run_open_closed<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== Open-Close Principle Demo ===")?;
    writeln!(out)?;

    let mut registry = ProcessorRegistry::new();
    registry.add_processor(Box::new(CreditCardProcessor));
    registry.add_processor(Box::new(DebitCardProcessor));
    registry.add_processor(Box::new(UpiProcessor));

    write_methods(out, &registry)?;
    writeln!(out)?;

    write_payment(out, &registry, dec!(100.0).into())?;
    writeln!(out)?;

    write_payment_with(out, &registry, "UPI", dec!(50.0).into())?;
    writeln!(out)?;

    writeln!(out, "=== Adding PayPal (Open-Close Principle) ===")?;
    registry.add_processor(Box::new(PayPalProcessor));

    write_methods(out, &registry)?;
    writeln!(out)?;

    write_payment_with(out, &registry, "PayPal", dec!(75.0).into())?;
    writeln!(out)?;

    write_payment(out, &registry, dec!(25.0).into())?;
    Ok(())
}

/// Pays through card and UPI methods looked up by name.
pub fn run_polymorphism<W: Write>(out: &mut W) -> Result<()> {
    let mut book = PaymentBook::new();
    let added = [
        book.add_payment_method(
            "CreditCard",
            Box::new(CreditCard::new("4010-5678-9012-3456", "John Doe")),
        )?,
        book.add_payment_method(
            "DebitCard",
            Box::new(DebitCard::new("9876-5432-1098-7654", "Jane Smith")),
        )?,
        book.add_payment_method("UPI", Box::new(Upi::new("john@upi")))?,
    ];
    for line in added {
        writeln!(out, "{line}")?;
    }

    writeln!(out)?;
    writeln!(out, "=== Making Payments ===")?;
    let payments = [
        ("CreditCard", dec!(150.75)),
        ("DebitCard", dec!(200.00)),
        ("UPI", dec!(50.25)),
    ];
    for (name, amount) in payments {
        for line in book.make_payment(name, amount.into())? {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Creates, stores, renders, sends and retrieves an invoice, each step owned
/// by a different component.
pub async fn run_invoice<W: Write>(out: &mut W, store: InvoiceStoreBox) -> Result<()> {
    let generator = InvoiceGenerator::new();
    let email = EmailService::new();

    let invoice = Invoice::new("INV-001", "John Smith", dec!(250.75));
    writeln!(
        out,
        "Created invoice: {} for customer: {} with amount: ${}",
        invoice.invoice_number(),
        invoice.customer_name(),
        invoice.amount()
    )?;
    writeln!(out)?;

    store.save(invoice.clone()).await?;
    writeln!(
        out,
        "Invoice {} saved to database",
        invoice.invoice_number()
    )?;
    writeln!(out)?;

    let data = generator.generate_invoice_data(&invoice);
    writeln!(out, "Generated Invoice Data (Structured Object):")?;
    writeln!(out, "{}", serde_json::to_string(&data)?)?;
    writeln!(out)?;

    writeln!(out, "Generated Invoice (Text Format):")?;
    writeln!(out, "{}", generator.generate_invoice_text(&invoice))?;

    for line in email.send_invoice(&invoice, "john.smith@email.com") {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    let retrieved = store
        .find_by_id(invoice.invoice_number())
        .await?
        .ok_or_else(|| {
            PaymentError::ValidationError(format!(
                "Invoice {} missing after save",
                invoice.invoice_number()
            ))
        })?;
    writeln!(
        out,
        "Retrieved invoice: {} for customer: {} with amount: ${}",
        retrieved.invoice_number(),
        retrieved.customer_name(),
        retrieved.amount()
    )?;
    Ok(())
}
