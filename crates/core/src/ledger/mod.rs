//! Append-only transaction ledger.
//!
//! The ledger's defining guarantee is newest-first ordering: the store
//! inserts every record at the head of the log. Reads through the
//! [`crate::store::Store`] port return fresh, consistent-at-call-time
//! snapshots.

pub mod types;

pub use types::{TransactionKind, TransactionRecord};
