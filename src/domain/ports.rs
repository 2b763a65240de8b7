use super::invoice::Invoice;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Saves an invoice, replacing any invoice with the same number.
    async fn save(&self, invoice: Invoice) -> Result<()>;
    async fn find_by_id(&self, invoice_number: &str) -> Result<Option<Invoice>>;
    async fn exists(&self, invoice_number: &str) -> Result<bool>;
}

pub type InvoiceStoreBox = Box<dyn InvoiceStore>;
