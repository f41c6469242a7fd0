//! Account opening.
//!
//! Accounts are created once at signup with a pre-funded main balance and
//! every counter zeroed; nothing in this core ever deletes one.

use std::sync::Arc;

use rust_decimal::Decimal;

use stridebank_shared::types::UserId;

use super::error::AccountError;
use super::types::{LoanStatus, SubscriptionTier, UserAccount, UserRole};
use crate::ledger::{TransactionKind, TransactionRecord};
use crate::store::Store;

/// Result of opening an account: the stored account and its welcome deposit.
#[derive(Debug, Clone)]
pub struct OpenedAccount {
    /// The freshly created account.
    pub account: UserAccount,
    /// The `INITIAL_DEPOSIT` ledger record.
    pub record: TransactionRecord,
}

/// Service that opens member accounts.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn Store>,
}

impl AccountService {
    /// Amount credited to every new account as a welcome bonus.
    #[must_use]
    pub fn welcome_bonus() -> Decimal {
        Decimal::from(1000)
    }

    /// Creates a new account service.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Opens a `USER` account pre-funded with the welcome bonus and records
    /// the `INITIAL_DEPOSIT` ledger entry.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::NameRequired` for a blank name and
    /// `AccountError::EmailTaken` when the email is already registered.
    pub fn open_account(
        &self,
        name: &str,
        email: &str,
        tier: SubscriptionTier,
    ) -> Result<OpenedAccount, AccountError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AccountError::NameRequired);
        }

        if self.store.find_by_email(email)?.is_some() {
            return Err(AccountError::EmailTaken(email.to_string()));
        }

        let account = UserAccount {
            id: UserId::new(),
            email: email.to_string(),
            name: name.to_string(),
            role: UserRole::User,
            main_balance: Self::welcome_bonus(),
            hsa_balance: Decimal::ZERO,
            total_steps: 0,
            subscription_tier: tier,
            loan_status: LoanStatus::None,
            loan_amount: Decimal::ZERO,
            version: 0,
        };

        let record = TransactionRecord::new(
            &account,
            TransactionKind::InitialDeposit,
            Self::welcome_bonus(),
            "Welcome Bonus Deposit".to_string(),
        );

        self.store.open(account.clone(), record.clone())?;

        Ok(OpenedAccount { account, record })
    }
}
