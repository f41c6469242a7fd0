//! Subscription policy domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::{SubscriptionTier, UserAccount};
use crate::ledger::TransactionRecord;

/// Who initiates a tier switch.
///
/// Administrative overrides are not billing events: their ledger records
/// always carry a zero amount, regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierSwitchActor {
    /// The member switches their own plan.
    SelfService,
    /// An administrator overrides the member's plan.
    AdminOverride,
}

/// Direction of a tier switch, used only for descriptions and caller-facing
/// notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TierDirection {
    /// BASIC → PREMIUM.
    Upgrade,
    /// PREMIUM → BASIC.
    Downgrade,
}

impl fmt::Display for TierDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upgrade => write!(f, "UPGRADE"),
            Self::Downgrade => write!(f, "DOWNGRADE"),
        }
    }
}

/// A classified tier switch: the data the account write and ledger record
/// must carry.
#[derive(Debug, Clone, PartialEq)]
pub struct TierChange {
    /// The tier being left.
    pub from: SubscriptionTier,
    /// The tier being entered.
    pub to: SubscriptionTier,
    /// Upgrade or downgrade, for the description only.
    pub direction: TierDirection,
    /// Ledger amount: the monthly price for a self-service upgrade, zero
    /// otherwise.
    pub amount: Decimal,
    /// Ledger record description.
    pub description: String,
}

/// Result of a tier switch request.
#[derive(Debug, Clone)]
pub enum TierSwitchOutcome {
    /// Requested tier equals the current tier: no write, no ledger record.
    Unchanged(UserAccount),
    /// The tier changed and was recorded.
    Switched {
        /// The account after the switch.
        account: UserAccount,
        /// The `TIER_CHANGE` audit record.
        record: TransactionRecord,
        /// Direction of the switch, for caller-facing notifications.
        direction: TierDirection,
    },
}

impl TierSwitchOutcome {
    /// The account after the operation, whether or not anything changed.
    #[must_use]
    pub const fn account(&self) -> &UserAccount {
        match self {
            Self::Unchanged(account) | Self::Switched { account, .. } => account,
        }
    }
}
