//! Core business logic for Stridebank.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, state machines, and reward calculations live here; persistence
//! is reached only through the [`store::Store`] port.
//!
//! # Modules
//!
//! - `account` - User account model and account opening
//! - `ledger` - Append-only transaction records
//! - `reward` - Activity-to-savings reward engine
//! - `loan` - Loan application lifecycle state machine
//! - `subscription` - Subscription tier switching policy
//! - `admin` - Administrative decision service
//! - `store` - Repository port implemented by the store crate

pub mod account;
pub mod admin;
pub mod ledger;
pub mod loan;
pub mod reward;
pub mod store;
pub mod subscription;
