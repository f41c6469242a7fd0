//! User account model and account opening.

pub mod error;
pub mod service;
pub mod types;

pub use error::AccountError;
pub use service::{AccountService, OpenedAccount};
pub use types::{LoanStatus, SubscriptionTier, UserAccount, UserRole};
