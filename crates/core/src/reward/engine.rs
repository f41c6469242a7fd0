//! Reward engine: converts synced activity into a balance transfer.
//!
//! Every successful sync moves the reward from the main balance into the
//! Fit-Savings balance and bumps the lifetime step counter, with one
//! `SAVINGS_TRANSFER` ledger record, as a single atomic commit.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use stridebank_shared::types::UserId;

use super::error::RewardError;
use crate::account::{SubscriptionTier, UserAccount};
use crate::ledger::{TransactionKind, TransactionRecord};
use crate::store::Store;

/// Result of a successful activity sync.
#[derive(Debug, Clone)]
pub struct RewardOutcome {
    /// The account after the transfer.
    pub account: UserAccount,
    /// The `SAVINGS_TRANSFER` audit record.
    pub record: TransactionRecord,
}

/// Service converting activity-sync events into savings transfers.
#[derive(Clone)]
pub struct RewardEngine {
    store: Arc<dyn Store>,
    sync_delay: Duration,
}

impl RewardEngine {
    /// Creates a new reward engine.
    ///
    /// `sync_delay` models the device/network latency of an activity sync;
    /// tests pass `Duration::ZERO`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, sync_delay: Duration) -> Self {
        Self { store, sync_delay }
    }

    /// Reward rate in currency units per 1,000 steps for a tier.
    #[must_use]
    pub fn reward_rate(tier: SubscriptionTier) -> Decimal {
        match tier {
            SubscriptionTier::Basic => Decimal::ONE,
            SubscriptionTier::Premium => Decimal::new(150, 2),
        }
    }

    /// Reward for syncing `steps` on a tier: `rate * steps / 1000`.
    #[must_use]
    pub fn compute_reward(tier: SubscriptionTier, steps: u64) -> Decimal {
        Self::reward_rate(tier) * Decimal::from(steps) / Decimal::from(1000)
    }

    /// Syncs an activity increment for `user_id`.
    ///
    /// Reads the account, validates the transfer, awaits the sync delay and
    /// then commits `main_balance -= reward`, `hsa_balance += reward`,
    /// `total_steps += step_increment` together with the ledger record.
    ///
    /// # Cancellation
    ///
    /// The delay is the only suspension point and it sits strictly before
    /// the commit: dropping the returned future leaves account and ledger
    /// untouched.
    ///
    /// # Errors
    ///
    /// `RewardError::InvalidStepCount` for a zero increment;
    /// `RewardError::InsufficientFunds` when the reward exceeds the main
    /// balance (nothing is written); `NotFound`/`Conflict` from the store.
    pub async fn sync_activity(
        &self,
        user_id: UserId,
        step_increment: u64,
    ) -> Result<RewardOutcome, RewardError> {
        if step_increment == 0 {
            return Err(RewardError::InvalidStepCount);
        }

        let mut account = self.store.account(user_id)?;
        let reward = Self::compute_reward(account.subscription_tier, step_increment);

        if account.main_balance < reward {
            return Err(RewardError::InsufficientFunds {
                required: reward,
                available: account.main_balance,
            });
        }

        // Simulated device sync latency.
        tokio::time::sleep(self.sync_delay).await;

        account.main_balance -= reward;
        account.hsa_balance += reward;
        account.total_steps += step_increment;

        let record = TransactionRecord::new(
            &account,
            TransactionKind::SavingsTransfer,
            reward,
            format!("Fit-Savings: Synced {step_increment} steps."),
        );

        let account = self.store.commit(account, Some(record.clone()))?;

        Ok(RewardOutcome { account, record })
    }
}
