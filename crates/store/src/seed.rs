//! Demo seed data for development deployments.

use rust_decimal::Decimal;
use tracing::info;

use stridebank_core::account::{LoanStatus, SubscriptionTier, UserAccount, UserRole};
use stridebank_core::store::Store;
use stridebank_shared::AppResult;
use stridebank_shared::types::UserId;

use crate::memory::MemoryStore;

/// Email of the seeded administrator account.
pub const ADMIN_EMAIL: &str = "admin@stridebank.io";
/// Email of the seeded demo member account.
pub const DEMO_EMAIL: &str = "demo@stridebank.io";

/// Seeds the demo administrator and member accounts.
///
/// Idempotent: a store that already holds the admin account is left as is.
pub fn seed_demo_accounts(store: &MemoryStore) -> AppResult<()> {
    if store.find_by_email(ADMIN_EMAIL)?.is_some() {
        return Ok(());
    }

    let admin = UserAccount {
        id: UserId::new(),
        email: ADMIN_EMAIL.to_string(),
        name: "Chief Admin".to_string(),
        role: UserRole::Admin,
        main_balance: Decimal::ZERO,
        hsa_balance: Decimal::ZERO,
        total_steps: 0,
        subscription_tier: SubscriptionTier::Premium,
        loan_status: LoanStatus::None,
        loan_amount: Decimal::ZERO,
        version: 0,
    };

    let demo = UserAccount {
        id: UserId::new(),
        email: DEMO_EMAIL.to_string(),
        name: "Jane Doe".to_string(),
        role: UserRole::User,
        main_balance: Decimal::from(5000),
        hsa_balance: Decimal::from(250),
        total_steps: 12_500,
        subscription_tier: SubscriptionTier::Basic,
        loan_status: LoanStatus::None,
        loan_amount: Decimal::ZERO,
        version: 0,
    };

    store.insert_account(admin)?;
    store.insert_account(demo)?;
    info!("Seeded demo accounts ({ADMIN_EMAIL}, {DEMO_EMAIL})");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_creates_demo_accounts() {
        let store = MemoryStore::new();
        seed_demo_accounts(&store).unwrap();

        let admin = store.find_by_email(ADMIN_EMAIL).unwrap().unwrap();
        assert!(admin.is_admin());
        assert_eq!(admin.subscription_tier, SubscriptionTier::Premium);

        let demo = store.find_by_email(DEMO_EMAIL).unwrap().unwrap();
        assert!(!demo.is_admin());
        assert_eq!(demo.main_balance, Decimal::from(5000));
        assert_eq!(demo.total_steps, 12_500);
    }

    #[test]
    fn test_seed_is_idempotent() {
        let store = MemoryStore::new();
        seed_demo_accounts(&store).unwrap();
        seed_demo_accounts(&store).unwrap();

        assert_eq!(store.accounts().unwrap().len(), 2);
    }
}
