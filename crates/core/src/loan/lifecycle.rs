//! Pure loan lifecycle state machine.
//!
//! Validates and produces lifecycle transitions without touching any store.
//! The cycle is `NONE → PENDING → {APPROVED, REJECTED} → NONE` and repeats.

use rust_decimal::Decimal;

use super::error::LoanError;
use super::types::{LoanDecision, LoanTransition};
use crate::account::LoanStatus;

/// Stateless lifecycle rules for loan applications.
pub struct LoanLifecycle;

impl LoanLifecycle {
    /// Minimum valid loan request amount.
    #[must_use]
    pub fn min_amount() -> Decimal {
        Decimal::from(50)
    }

    /// Maximum valid loan request amount.
    #[must_use]
    pub fn max_amount() -> Decimal {
        Decimal::from(5000)
    }

    /// Submit a new application.
    ///
    /// Requires the current status to be `None`: an account with a pending
    /// or undecided application must not be able to overwrite it.
    ///
    /// # Errors
    ///
    /// Returns `LoanError::AmountOutOfRange` for an amount outside
    /// [50, 5000], `LoanError::ReasonRequired` for a blank reason, and
    /// `LoanError::InvalidTransition` when the status is not `None`.
    pub fn request(
        current: LoanStatus,
        amount: Decimal,
        reason: &str,
    ) -> Result<LoanTransition, LoanError> {
        if amount < Self::min_amount() || amount > Self::max_amount() {
            return Err(LoanError::AmountOutOfRange {
                amount,
                min: Self::min_amount(),
                max: Self::max_amount(),
            });
        }

        if reason.trim().is_empty() {
            return Err(LoanError::ReasonRequired);
        }

        match current {
            LoanStatus::None => Ok(LoanTransition::Request {
                new_status: LoanStatus::Pending,
                amount,
            }),
            _ => Err(LoanError::InvalidTransition {
                from: current,
                to: LoanStatus::Pending,
            }),
        }
    }

    /// Decide a pending application.
    ///
    /// `loan_amount` is the account's stored amount; it is carried into the
    /// ledger record unchanged so the audit trail always reflects what was
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidTransition` when the status is not
    /// `Pending`.
    pub fn decide(
        current: LoanStatus,
        decision: LoanDecision,
        loan_amount: Decimal,
    ) -> Result<LoanTransition, LoanError> {
        match current {
            LoanStatus::Pending => Ok(LoanTransition::Decide {
                new_status: decision.status(),
                decision,
                recorded_amount: loan_amount,
            }),
            _ => Err(LoanError::InvalidTransition {
                from: current,
                to: decision.status(),
            }),
        }
    }

    /// Acknowledge a decided application, clearing it back to `None`.
    ///
    /// Acknowledgement is local housekeeping, not a financial event: no
    /// ledger record is produced for this transition.
    ///
    /// # Errors
    ///
    /// Returns `LoanError::InvalidTransition` when the status is neither
    /// `Approved` nor `Rejected`.
    pub fn acknowledge(current: LoanStatus) -> Result<LoanTransition, LoanError> {
        if current.is_decided() {
            Ok(LoanTransition::Acknowledge {
                new_status: LoanStatus::None,
            })
        } else {
            Err(LoanError::InvalidTransition {
                from: current,
                to: LoanStatus::None,
            })
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - None → Pending (request)
    /// - Pending → Approved (decide)
    /// - Pending → Rejected (decide)
    /// - Approved → None (acknowledge)
    /// - Rejected → None (acknowledge)
    #[must_use]
    pub fn is_valid_transition(from: LoanStatus, to: LoanStatus) -> bool {
        matches!(
            (from, to),
            (LoanStatus::None, LoanStatus::Pending)
                | (
                    LoanStatus::Pending,
                    LoanStatus::Approved | LoanStatus::Rejected
                )
                | (LoanStatus::Approved | LoanStatus::Rejected, LoanStatus::None)
        )
    }
}
