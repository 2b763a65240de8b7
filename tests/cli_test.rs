use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_open_closed_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.args(["demo", "open-closed"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("=== Open-Close Principle Demo ==="))
        .stdout(predicate::str::contains("Processed $100.0 via Credit Card"))
        .stdout(predicate::str::contains("Processed $50.0 via UPI"))
        .stdout(predicate::str::contains("Processed $75.0 via PayPal"))
        .stdout(predicate::str::contains("Processed $25.0 via Credit Card"));

    Ok(())
}

#[test]
fn test_cli_polymorphism_demo() {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.args(["demo", "polymorphism"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Adding payment method: UPI"))
        .stdout(predicate::str::contains(
            "Processing payment of $150.75 using CreditCard with card number: 4010-5678-9012-3456",
        ))
        .stdout(predicate::str::contains(
            "Making a payment with UPI. UpiId: john@upi",
        ));
}

#[test]
fn test_cli_invoice_demo() {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.args(["demo", "invoice"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Invoice INV-001 saved to database"))
        .stdout(predicate::str::contains("==== INVOICE ===="))
        .stdout(predicate::str::contains(
            "Sending invoice INV-001 to: john.smith@email.com",
        ));
}

#[test]
fn test_cli_methods() {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.arg("methods");

    cmd.assert().success().stdout(
        "Available payment methods:\n- Credit Card\n- Debit Card\n- UPI\n- PayPal\n",
    );
}

#[test]
fn test_cli_pay_with_method() {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.args(["pay", "50", "--method", "upi"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Processing payment of $50.0 with upi..."))
        .stdout(predicate::str::contains("Processed $50.0 via UPI"));
}

#[test]
fn test_cli_pay_unknown_method_still_succeeds() {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.args(["pay", "10", "--method", "Bitcoin"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Payment method 'Bitcoin' not found!"))
        .stdout(predicate::str::contains("Processed").not());
}

#[test]
fn test_cli_rejects_non_numeric_amount() {
    let mut cmd = Command::new(cargo_bin!("payflow"));
    cmd.args(["pay", "ten"]);

    cmd.assert().failure();
}
