//! Loan service applying lifecycle transitions against the store.

use std::sync::Arc;

use rust_decimal::Decimal;

use stridebank_shared::types::UserId;

use super::error::LoanError;
use super::lifecycle::LoanLifecycle;
use super::types::LoanDecision;
use crate::account::UserAccount;
use crate::ledger::{TransactionKind, TransactionRecord};
use crate::store::Store;

/// Result of a loan operation that produced a ledger record.
#[derive(Debug, Clone)]
pub struct LoanOutcome {
    /// The account after the transition.
    pub account: UserAccount,
    /// The audit record for the transition.
    pub record: TransactionRecord,
}

/// Service that drives accounts through the loan lifecycle.
#[derive(Clone)]
pub struct LoanService {
    store: Arc<dyn Store>,
}

impl LoanService {
    /// Creates a new loan service.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Submits a loan application for `user_id`.
    ///
    /// On success the account moves to `PENDING` with `loan_amount` set, and
    /// one `LOAN_REQUEST` record carrying the reason is appended, atomically.
    ///
    /// # Errors
    ///
    /// Validation and transition failures per [`LoanLifecycle::request`];
    /// `NotFound` for an unknown account.
    pub fn request_loan(
        &self,
        user_id: UserId,
        amount: Decimal,
        reason: &str,
    ) -> Result<LoanOutcome, LoanError> {
        let mut account = self.store.account(user_id)?;

        let transition = LoanLifecycle::request(account.loan_status, amount, reason)?;
        account.loan_status = transition.new_status();
        account.loan_amount = amount;

        let record = TransactionRecord::new(
            &account,
            TransactionKind::LoanRequest,
            amount,
            format!("Loan Request for: {}", reason.trim()),
        );

        let account = self.store.commit(account, Some(record.clone()))?;

        Ok(LoanOutcome { account, record })
    }

    /// Decides a pending application.
    ///
    /// The ledger record carries the account's stored `loan_amount`, never a
    /// caller-supplied value. Authorization is the admin service's concern;
    /// this method only enforces the state machine.
    ///
    /// # Errors
    ///
    /// `LoanError::InvalidTransition` when the account has no pending
    /// application; `NotFound` for an unknown account.
    pub fn decide_loan(
        &self,
        user_id: UserId,
        decision: LoanDecision,
    ) -> Result<LoanOutcome, LoanError> {
        let mut account = self.store.account(user_id)?;

        let transition = LoanLifecycle::decide(account.loan_status, decision, account.loan_amount)?;
        // The recorded amount is the stored loan_amount at request time.
        let recorded_amount = account.loan_amount;
        account.loan_status = transition.new_status();

        let record = TransactionRecord::new(
            &account,
            decision.record_kind(),
            recorded_amount,
            format!("Loan {decision} by Admin"),
        );

        let account = self.store.commit(account, Some(record.clone()))?;

        Ok(LoanOutcome { account, record })
    }

    /// Acknowledges a decided application, returning the account to `NONE`
    /// with `loan_amount` reset to zero. Produces no ledger record.
    ///
    /// # Errors
    ///
    /// `LoanError::InvalidTransition` when the application is not decided;
    /// `NotFound` for an unknown account.
    pub fn acknowledge(&self, user_id: UserId) -> Result<UserAccount, LoanError> {
        let mut account = self.store.account(user_id)?;

        let transition = LoanLifecycle::acknowledge(account.loan_status)?;
        account.loan_status = transition.new_status();
        account.loan_amount = Decimal::ZERO;

        let account = self.store.commit(account, None)?;

        Ok(account)
    }
}
