//! In-memory account and ledger store for Stridebank.
//!
//! Implements the core's [`stridebank_core::store::Store`] port with a
//! concurrent map and a head-insert ledger, plus demo seed data.

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;
pub use seed::{ADMIN_EMAIL, DEMO_EMAIL, seed_demo_accounts};
