//! Administrative decision service.

pub mod error;
pub mod service;
pub mod types;

pub use error::AdminError;
pub use service::AdminService;
pub use types::PendingLoan;
