use crate::domain::invoice::Invoice;
use crate::domain::ports::InvoiceStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for invoices, keyed by invoice number.
///
/// Nothing is persisted; the contents are lost when the store is dropped.
#[derive(Default, Clone)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<HashMap<String, Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Creates a new, empty in-memory invoice store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn save(&self, invoice: Invoice) -> Result<()> {
        let mut invoices = self.invoices.write().await;
        tracing::debug!(invoice = invoice.invoice_number(), "saving invoice");
        invoices.insert(invoice.invoice_number().to_string(), invoice);
        Ok(())
    }

    async fn find_by_id(&self, invoice_number: &str) -> Result<Option<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices.get(invoice_number).cloned())
    }

    async fn exists(&self, invoice_number: &str) -> Result<bool> {
        let invoices = self.invoices.read().await;
        Ok(invoices.contains_key(invoice_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_invoice_store() {
        let store = InMemoryInvoiceStore::new();
        let invoice = Invoice::new("INV-001", "John Smith", dec!(250.75));

        store.save(invoice.clone()).await.unwrap();
        let retrieved = store.find_by_id("INV-001").await.unwrap().unwrap();
        assert_eq!(retrieved, invoice);

        assert!(store.exists("INV-001").await.unwrap());
        assert!(!store.exists("INV-002").await.unwrap());
        assert!(store.find_by_id("INV-002").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_by_number() {
        let store = InMemoryInvoiceStore::new();
        store
            .save(Invoice::new("INV-001", "John Smith", dec!(10.0)))
            .await
            .unwrap();
        store
            .save(Invoice::new("INV-001", "Jane Doe", dec!(20.0)))
            .await
            .unwrap();

        let retrieved = store.find_by_id("INV-001").await.unwrap().unwrap();
        assert_eq!(retrieved.customer_name(), "Jane Doe");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryInvoiceStore::new();
        let other = store.clone();
        store
            .save(Invoice::new("INV-007", "Bond", dec!(7.0)))
            .await
            .unwrap();

        assert!(other.exists("INV-007").await.unwrap());
    }
}
