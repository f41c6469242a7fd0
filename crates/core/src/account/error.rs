//! Account opening error types.

use thiserror::Error;

use stridebank_shared::AppError;

/// Errors that can occur while opening an account.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Display name is missing.
    #[error("Account name is required")]
    NameRequired,

    /// Another account already uses this email.
    #[error("Email {0} is already registered")]
    EmailTaken(String),

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl AccountError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NameRequired => 400,
            Self::EmailTaken(_) => 409,
            Self::Store(e) => e.status_code(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NameRequired => "VALIDATION_ERROR",
            Self::EmailTaken(_) => "EMAIL_TAKEN",
            Self::Store(e) => e.error_code(),
        }
    }
}
