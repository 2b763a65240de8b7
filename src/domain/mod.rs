//! Domain types: amounts, payment processors, payment methods and invoices,
//! plus the storage port invoices are saved through.

pub mod amount;
pub mod invoice;
pub mod payment_method;
pub mod ports;
pub mod processor;
