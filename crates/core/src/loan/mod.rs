//! Loan application lifecycle.
//!
//! # Modules
//!
//! - `types` - Loan domain types (LoanDecision, LoanTransition)
//! - `error` - Loan-specific error types
//! - `lifecycle` - Pure state transition rules
//! - `service` - Transitions applied against the store

pub mod error;
pub mod lifecycle;
pub mod service;
pub mod types;

#[cfg(test)]
mod lifecycle_props;

pub use error::LoanError;
pub use lifecycle::LoanLifecycle;
pub use service::{LoanOutcome, LoanService};
pub use types::{LoanDecision, LoanTransition};
