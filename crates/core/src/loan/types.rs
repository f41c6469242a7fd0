//! Loan lifecycle domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::LoanStatus;
use crate::ledger::TransactionKind;

/// Administrative outcome for a pending loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanDecision {
    /// Grant the application.
    Approved,
    /// Refuse the application.
    Rejected,
}

impl LoanDecision {
    /// Returns the string representation of the decision.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Parses a decision from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// The loan status this decision moves the account into.
    #[must_use]
    pub const fn status(&self) -> LoanStatus {
        match self {
            Self::Approved => LoanStatus::Approved,
            Self::Rejected => LoanStatus::Rejected,
        }
    }

    /// The ledger record kind this decision produces.
    #[must_use]
    pub const fn record_kind(&self) -> TransactionKind {
        match self {
            Self::Approved => TransactionKind::LoanApproval,
            Self::Rejected => TransactionKind::LoanRejection,
        }
    }
}

impl fmt::Display for LoanDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated lifecycle transition, ready to be applied to an account.
///
/// Each variant captures the resulting status and the data the ledger
/// record (if any) must carry.
#[derive(Debug, Clone)]
pub enum LoanTransition {
    /// Submit a new application.
    Request {
        /// The new status after submission (`Pending`).
        new_status: LoanStatus,
        /// The requested amount, stored on the account.
        amount: Decimal,
    },
    /// Decide a pending application.
    Decide {
        /// The new status after the decision.
        new_status: LoanStatus,
        /// The decision taken.
        decision: LoanDecision,
        /// The amount recorded in the ledger: the account's stored
        /// `loan_amount` at request time, never caller input.
        recorded_amount: Decimal,
    },
    /// Acknowledge a decided application.
    Acknowledge {
        /// The new status after acknowledgement (`None`).
        new_status: LoanStatus,
    },
}

impl LoanTransition {
    /// Returns the new status resulting from this transition.
    #[must_use]
    pub const fn new_status(&self) -> LoanStatus {
        match self {
            Self::Request { new_status, .. }
            | Self::Decide { new_status, .. }
            | Self::Acknowledge { new_status } => *new_status,
        }
    }
}
