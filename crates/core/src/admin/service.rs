//! Administrative decision service.
//!
//! Orchestrates the admin terminal: pending-loan triage, loan decisions,
//! tier overrides, and the full audit log. Every operation checks the
//! acting account's role first.

use std::sync::Arc;

use rust_decimal::Decimal;

use stridebank_shared::types::UserId;

use super::error::AdminError;
use super::types::PendingLoan;
use crate::account::{LoanStatus, SubscriptionTier, UserAccount};
use crate::ledger::TransactionRecord;
use crate::loan::{LoanDecision, LoanOutcome, LoanService};
use crate::store::Store;
use crate::subscription::{SubscriptionService, TierSwitchActor, TierSwitchOutcome};

/// Service backing the administrative terminal.
#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn Store>,
    loans: LoanService,
    subscriptions: SubscriptionService,
}

impl AdminService {
    /// Creates a new admin service.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            loans: LoanService::new(Arc::clone(&store)),
            subscriptions: SubscriptionService::new(Arc::clone(&store)),
            store,
        }
    }

    /// Activity heuristic used to triage loan decisions: lifetime steps on
    /// a 0-100 scale (`total_steps / 10_000 * 10`), one decimal place,
    /// clamped at 100.
    #[must_use]
    pub fn activity_score(total_steps: u64) -> Decimal {
        let score = Decimal::from(total_steps) / Decimal::from(10_000) * Decimal::from(10);
        score.round_dp(1).min(Decimal::ONE_HUNDRED)
    }

    /// All accounts with a pending loan application, annotated with their
    /// activity score.
    ///
    /// # Errors
    ///
    /// `AdminError::NotAdmin` for a non-administrative caller.
    pub fn list_pending_loans(&self, actor: UserId) -> Result<Vec<PendingLoan>, AdminError> {
        self.require_admin(actor)?;

        let pending = self
            .store
            .accounts()?
            .into_iter()
            .filter(|a| a.loan_status == LoanStatus::Pending)
            .map(|account| PendingLoan {
                activity_score: Self::activity_score(account.total_steps),
                account,
            })
            .collect();

        Ok(pending)
    }

    /// Decides a pending loan application on behalf of `actor`.
    ///
    /// # Errors
    ///
    /// `AdminError::NotAdmin` for a non-administrative caller; lifecycle
    /// failures per [`LoanService::decide_loan`].
    pub fn decide_loan(
        &self,
        actor: UserId,
        user_id: UserId,
        decision: LoanDecision,
    ) -> Result<LoanOutcome, AdminError> {
        self.require_admin(actor)?;
        Ok(self.loans.decide_loan(user_id, decision)?)
    }

    /// Overrides a member's subscription tier.
    ///
    /// Overrides are never billing events: the ledger amount is always
    /// zero, whichever direction the tier moves.
    ///
    /// # Errors
    ///
    /// `AdminError::NotAdmin` for a non-administrative caller; `NotFound`
    /// for an unknown member account.
    pub fn override_tier(
        &self,
        actor: UserId,
        user_id: UserId,
        tier: SubscriptionTier,
    ) -> Result<TierSwitchOutcome, AdminError> {
        self.require_admin(actor)?;
        Ok(self
            .subscriptions
            .switch_tier(user_id, tier, TierSwitchActor::AdminOverride)?)
    }

    /// The full transaction ledger, newest first, for audit display.
    ///
    /// # Errors
    ///
    /// `AdminError::NotAdmin` for a non-administrative caller.
    pub fn list_all_transactions(&self, actor: UserId) -> Result<Vec<TransactionRecord>, AdminError> {
        self.require_admin(actor)?;
        Ok(self.store.entries()?)
    }

    /// All accounts, for the user management table.
    ///
    /// # Errors
    ///
    /// `AdminError::NotAdmin` for a non-administrative caller.
    pub fn list_accounts(&self, actor: UserId) -> Result<Vec<UserAccount>, AdminError> {
        self.require_admin(actor)?;
        Ok(self.store.accounts()?)
    }

    fn require_admin(&self, actor: UserId) -> Result<(), AdminError> {
        let account = self.store.account(actor)?;
        if account.is_admin() {
            Ok(())
        } else {
            Err(AdminError::NotAdmin(actor))
        }
    }
}
