//! Transaction management for the expense tracker.
//!
//! This module contains the core model:
//! - The `Transaction` model and its persisted JSON format
//! - The `TransactionStore` that owns the list and writes it to storage
//! - The aggregation of the list into income, expense and balance totals

mod aggregate;
mod core;
mod store;

pub use aggregate::{Totals, aggregate};
pub use core::{Transaction, TransactionId, deserialize_transactions, serialize_transactions};
pub use store::{PersistPolicy, TransactionStore};
