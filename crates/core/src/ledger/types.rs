//! Append-only ledger record types.
//!
//! A [`TransactionRecord`] is the immutable audit record of one business
//! event. Records are created by the reward, loan, subscription, and account
//! services and never mutated or deleted afterwards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use stridebank_shared::types::{EntryId, UserId};

use crate::account::UserAccount;

/// The business event a ledger record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Activity reward moved from the main balance into Fit-Savings.
    SavingsTransfer,
    /// A member submitted a loan application.
    LoanRequest,
    /// An administrator approved a pending loan.
    LoanApproval,
    /// An administrator rejected a pending loan.
    LoanRejection,
    /// Subscription tier changed (self-service or administrative override).
    TierChange,
    /// Welcome bonus credited at account opening.
    InitialDeposit,
}

impl TransactionKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SavingsTransfer => "SAVINGS_TRANSFER",
            Self::LoanRequest => "LOAN_REQUEST",
            Self::LoanApproval => "LOAN_APPROVAL",
            Self::LoanRejection => "LOAN_REJECTION",
            Self::TierChange => "TIER_CHANGE",
            Self::InitialDeposit => "INITIAL_DEPOSIT",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable audit record of one business event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique record identifier.
    pub id: EntryId,
    /// The account the event belongs to.
    pub user_id: UserId,
    /// Snapshot of the account's display name at creation time.
    pub user_name: String,
    /// The kind of business event.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Monetary amount attached to the event.
    pub amount: Decimal,
    /// When the record was created.
    pub timestamp: DateTime<Utc>,
    /// Human-readable description of the event.
    pub description: String,
}

impl TransactionRecord {
    /// Creates a record attributed to `account`, stamped with a fresh ID and
    /// the current time.
    #[must_use]
    pub fn new(
        account: &UserAccount,
        kind: TransactionKind,
        amount: Decimal,
        description: String,
    ) -> Self {
        Self {
            id: EntryId::new(),
            user_id: account.id,
            user_name: account.name.clone(),
            kind,
            amount,
            timestamp: Utc::now(),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{LoanStatus, SubscriptionTier, UserRole};
    use rust_decimal_macros::dec;

    fn test_account() -> UserAccount {
        UserAccount {
            id: UserId::new(),
            email: "jane@example.com".into(),
            name: "Jane Doe".into(),
            role: UserRole::User,
            main_balance: dec!(5000),
            hsa_balance: dec!(250),
            total_steps: 12_500,
            subscription_tier: SubscriptionTier::Basic,
            loan_status: LoanStatus::None,
            loan_amount: dec!(0),
            version: 0,
        }
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(TransactionKind::SavingsTransfer.as_str(), "SAVINGS_TRANSFER");
        assert_eq!(TransactionKind::LoanRequest.as_str(), "LOAN_REQUEST");
        assert_eq!(TransactionKind::LoanApproval.as_str(), "LOAN_APPROVAL");
        assert_eq!(TransactionKind::LoanRejection.as_str(), "LOAN_REJECTION");
        assert_eq!(TransactionKind::TierChange.as_str(), "TIER_CHANGE");
        assert_eq!(TransactionKind::InitialDeposit.as_str(), "INITIAL_DEPOSIT");
    }

    #[test]
    fn test_kind_serde_wire_value() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::SavingsTransfer).unwrap(),
            "\"SAVINGS_TRANSFER\""
        );
    }

    #[test]
    fn test_record_snapshots_attribution() {
        let account = test_account();
        let record = TransactionRecord::new(
            &account,
            TransactionKind::SavingsTransfer,
            dec!(1.00),
            "Fit-Savings: Synced 1000 steps.".into(),
        );

        assert_eq!(record.user_id, account.id);
        assert_eq!(record.user_name, "Jane Doe");
        assert_eq!(record.amount, dec!(1.00));
        assert_eq!(record.kind, TransactionKind::SavingsTransfer);
    }

    #[test]
    fn test_record_serializes_kind_as_type_field() {
        let account = test_account();
        let record = TransactionRecord::new(
            &account,
            TransactionKind::InitialDeposit,
            dec!(1000),
            "Welcome Bonus Deposit".into(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "INITIAL_DEPOSIT");
    }
}
