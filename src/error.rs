use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("No payment methods available!")]
    NoPaymentMethods,
    #[error("Payment method '{0}' not found!")]
    MethodNotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
