//! Loan lifecycle error types.

use rust_decimal::Decimal;
use thiserror::Error;

use stridebank_shared::AppError;

use crate::account::LoanStatus;

/// Errors that can occur during loan lifecycle operations.
#[derive(Debug, Error)]
pub enum LoanError {
    /// Requested amount is outside the allowed range.
    #[error("Loan amount {amount} is outside the allowed range {min}..={max}")]
    AmountOutOfRange {
        /// The requested amount.
        amount: Decimal,
        /// The minimum valid amount.
        min: Decimal,
        /// The maximum valid amount.
        max: Decimal,
    },

    /// Loan reason is required but not provided.
    #[error("Loan reason is required")]
    ReasonRequired,

    /// Attempted an invalid lifecycle transition.
    #[error("Invalid loan transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: LoanStatus,
        /// The attempted target status.
        to: LoanStatus,
    },

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl LoanError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::AmountOutOfRange { .. } | Self::ReasonRequired => 400,
            Self::InvalidTransition { .. } => 409,
            Self::Store(e) => e.status_code(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AmountOutOfRange { .. } | Self::ReasonRequired => "VALIDATION_ERROR",
            Self::InvalidTransition { .. } => "PRECONDITION_FAILED",
            Self::Store(e) => e.error_code(),
        }
    }
}
