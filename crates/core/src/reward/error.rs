//! Reward engine error types.

use rust_decimal::Decimal;
use thiserror::Error;

use stridebank_shared::AppError;

/// Errors that can occur while converting activity into rewards.
#[derive(Debug, Error)]
pub enum RewardError {
    /// Step increment must be a positive count.
    #[error("Step increment must be positive")]
    InvalidStepCount,

    /// Reward exceeds the available main balance.
    #[error("Reward {required} exceeds available balance {available}")]
    InsufficientFunds {
        /// The reward that would be transferred.
        required: Decimal,
        /// The account's current main balance.
        available: Decimal,
    },

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl RewardError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidStepCount => 400,
            Self::InsufficientFunds { .. } => 422,
            Self::Store(e) => e.status_code(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStepCount => "VALIDATION_ERROR",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::Store(e) => e.error_code(),
        }
    }
}
