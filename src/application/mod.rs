//! Application layer: the processor registry that dispatches payments, the
//! name-keyed payment book, and the invoicing services.
//!
//! Everything here is synchronous and in-memory; only invoice storage goes
//! through the async `InvoiceStore` port.

pub mod invoicing;
pub mod payment_book;
pub mod registry;
