//! User account domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use stridebank_shared::types::UserId;

/// Role of a registered identity. Permanent after account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Regular member.
    User,
    /// Administrator with access to the decision terminal.
    Admin,
}

impl UserRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Subscription tier determining the reward rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionTier {
    /// Entry tier: 1.00 per 1,000 steps.
    Basic,
    /// Paid tier: 1.50 per 1,000 steps.
    Premium,
}

impl SubscriptionTier {
    /// Returns the string representation of the tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Premium => "PREMIUM",
        }
    }

    /// Parses a tier from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "BASIC" => Some(Self::Basic),
            "PREMIUM" => Some(Self::Premium),
            _ => None,
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position of an account in the loan lifecycle.
///
/// The valid transitions are:
/// - None → Pending (request)
/// - Pending → Approved (decide)
/// - Pending → Rejected (decide)
/// - Approved → None (acknowledge)
/// - Rejected → None (acknowledge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    /// No active loan application.
    None,
    /// Application submitted, awaiting an administrative decision.
    Pending,
    /// Application approved; awaiting acknowledgement by the member.
    Approved,
    /// Application rejected; awaiting acknowledgement by the member.
    Rejected,
}

impl LoanStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NONE" => Some(Self::None),
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if an administrative decision has been made but not
    /// yet acknowledged by the member.
    #[must_use]
    pub const fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One registered identity with its balances and lifecycle state.
///
/// Mutated exclusively through the reward, loan, subscription, and admin
/// services; every mutation goes through a version-checked store commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique, immutable identifier.
    pub id: UserId,
    /// Login email, unique across accounts.
    pub email: String,
    /// Display name, snapshotted into ledger entries.
    pub name: String,
    /// Role, permanent post-creation.
    pub role: UserRole,
    /// Primary spendable balance. Never driven negative by the reward engine.
    pub main_balance: Decimal,
    /// Accumulated reward savings balance ("Fit-Savings").
    pub hsa_balance: Decimal,
    /// Lifetime cumulative activity counter. Only ever increases.
    pub total_steps: u64,
    /// Current subscription tier.
    pub subscription_tier: SubscriptionTier,
    /// Current loan lifecycle state.
    pub loan_status: LoanStatus,
    /// Active or last-requested loan amount. Zero whenever `loan_status` is `None`.
    pub loan_amount: Decimal,
    /// Optimistic-concurrency sequence, bumped by the store on every commit.
    #[serde(default)]
    pub version: u64,
}

impl UserAccount {
    /// Returns true if this account may invoke administrative operations.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_as_str() {
        assert_eq!(SubscriptionTier::Basic.as_str(), "BASIC");
        assert_eq!(SubscriptionTier::Premium.as_str(), "PREMIUM");
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!(
            SubscriptionTier::parse("basic"),
            Some(SubscriptionTier::Basic)
        );
        assert_eq!(
            SubscriptionTier::parse("PREMIUM"),
            Some(SubscriptionTier::Premium)
        );
        assert_eq!(SubscriptionTier::parse("gold"), None);
    }

    #[test]
    fn test_loan_status_parse() {
        assert_eq!(LoanStatus::parse("NONE"), Some(LoanStatus::None));
        assert_eq!(LoanStatus::parse("pending"), Some(LoanStatus::Pending));
        assert_eq!(LoanStatus::parse("Approved"), Some(LoanStatus::Approved));
        assert_eq!(LoanStatus::parse("REJECTED"), Some(LoanStatus::Rejected));
        assert_eq!(LoanStatus::parse("invalid"), None);
    }

    #[test]
    fn test_loan_status_is_decided() {
        assert!(!LoanStatus::None.is_decided());
        assert!(!LoanStatus::Pending.is_decided());
        assert!(LoanStatus::Approved.is_decided());
        assert!(LoanStatus::Rejected.is_decided());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", LoanStatus::Pending), "PENDING");
        assert_eq!(format!("{}", SubscriptionTier::Premium), "PREMIUM");
        assert_eq!(format!("{}", UserRole::Admin), "ADMIN");
    }

    #[test]
    fn test_serde_wire_values() {
        assert_eq!(
            serde_json::to_string(&SubscriptionTier::Basic).unwrap(),
            "\"BASIC\""
        );
        assert_eq!(
            serde_json::to_string(&LoanStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        let status: LoanStatus = serde_json::from_str("\"APPROVED\"").unwrap();
        assert_eq!(status, LoanStatus::Approved);
    }
}
