//! Subscription tier switch policy.

use std::sync::Arc;

use rust_decimal::Decimal;

use stridebank_shared::AppResult;
use stridebank_shared::types::UserId;

use super::types::{TierChange, TierDirection, TierSwitchActor, TierSwitchOutcome};
use crate::account::SubscriptionTier;
use crate::ledger::{TransactionKind, TransactionRecord};
use crate::store::Store;

/// Stateless tier-switch rules.
pub struct SubscriptionPolicy;

impl SubscriptionPolicy {
    /// Monthly price of the PREMIUM tier.
    #[must_use]
    pub fn premium_monthly_price() -> Decimal {
        Decimal::new(999, 2)
    }

    /// Classifies a tier switch.
    ///
    /// Returns `None` when the requested tier equals the current tier (a
    /// pure no-op). Otherwise returns the direction, the ledger amount per
    /// the actor rule, and the record description.
    #[must_use]
    pub fn classify(
        current: SubscriptionTier,
        new_tier: SubscriptionTier,
        actor: TierSwitchActor,
    ) -> Option<TierChange> {
        if current == new_tier {
            return None;
        }

        let direction = match new_tier {
            SubscriptionTier::Premium => TierDirection::Upgrade,
            SubscriptionTier::Basic => TierDirection::Downgrade,
        };

        // Only a self-service upgrade is a billing event.
        let amount = match (actor, direction) {
            (TierSwitchActor::SelfService, TierDirection::Upgrade) => {
                Self::premium_monthly_price()
            }
            _ => Decimal::ZERO,
        };

        let description = match actor {
            TierSwitchActor::SelfService => {
                let verb = match direction {
                    TierDirection::Upgrade => "Upgraded",
                    TierDirection::Downgrade => "Downgraded",
                };
                format!("{verb} subscription to {new_tier}")
            }
            TierSwitchActor::AdminOverride => format!("Admin updated tier to {new_tier}"),
        };

        Some(TierChange {
            from: current,
            to: new_tier,
            direction,
            amount,
            description,
        })
    }
}

/// Service applying tier switches against the store.
#[derive(Clone)]
pub struct SubscriptionService {
    store: Arc<dyn Store>,
}

impl SubscriptionService {
    /// Creates a new subscription service.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Switches `user_id` to `new_tier`.
    ///
    /// A same-tier request is a pure no-op: the account is returned
    /// untouched and no ledger record is created. Otherwise the tier write
    /// and one `TIER_CHANGE` record are committed atomically.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown account; `Conflict` on a concurrent write.
    pub fn switch_tier(
        &self,
        user_id: UserId,
        new_tier: SubscriptionTier,
        actor: TierSwitchActor,
    ) -> AppResult<TierSwitchOutcome> {
        let mut account = self.store.account(user_id)?;

        let Some(change) =
            SubscriptionPolicy::classify(account.subscription_tier, new_tier, actor)
        else {
            return Ok(TierSwitchOutcome::Unchanged(account));
        };

        account.subscription_tier = change.to;

        let record = TransactionRecord::new(
            &account,
            TransactionKind::TierChange,
            change.amount,
            change.description,
        );

        let account = self.store.commit(account, Some(record.clone()))?;

        Ok(TierSwitchOutcome::Switched {
            account,
            record,
            direction: change.direction,
        })
    }
}
