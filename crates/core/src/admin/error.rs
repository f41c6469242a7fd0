//! Administrative service error types.

use thiserror::Error;

use stridebank_shared::AppError;
use stridebank_shared::types::UserId;

use crate::loan::LoanError;

/// Errors that can occur during administrative operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Caller is not an administrator.
    #[error("Account {0} is not authorized for administrative operations")]
    NotAdmin(UserId),

    /// Delegated loan lifecycle failure.
    #[error(transparent)]
    Loan(#[from] LoanError),

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl AdminError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotAdmin(_) => 403,
            Self::Loan(e) => e.status_code(),
            Self::Store(e) => e.status_code(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotAdmin(_) => "UNAUTHORIZED",
            Self::Loan(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::LoanStatus;

    #[test]
    fn test_not_admin_error() {
        let err = AdminError::NotAdmin(UserId::new());
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_loan_error_delegates() {
        let err = AdminError::Loan(LoanError::InvalidTransition {
            from: LoanStatus::None,
            to: LoanStatus::Approved,
        });
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "PRECONDITION_FAILED");
    }

    #[test]
    fn test_store_error_delegates() {
        let err = AdminError::Store(AppError::NotFound("account".into()));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
