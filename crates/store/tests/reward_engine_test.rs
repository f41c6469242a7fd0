//! Integration tests for the reward engine over the in-memory store.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use stridebank_core::account::{LoanStatus, SubscriptionTier, UserAccount, UserRole};
use stridebank_core::ledger::TransactionKind;
use stridebank_core::reward::{RewardEngine, RewardError};
use stridebank_core::store::Store;
use stridebank_shared::types::UserId;
use stridebank_store::MemoryStore;

fn store_with_member(
    balance: Decimal,
    tier: SubscriptionTier,
) -> (Arc<MemoryStore>, UserId) {
    let store = Arc::new(MemoryStore::new());
    let account = UserAccount {
        id: UserId::new(),
        email: "demo@stridebank.io".into(),
        name: "Jane Doe".into(),
        role: UserRole::User,
        main_balance: balance,
        hsa_balance: dec!(250),
        total_steps: 12_500,
        subscription_tier: tier,
        loan_status: LoanStatus::None,
        loan_amount: Decimal::ZERO,
        version: 0,
    };
    let id = account.id;
    store.insert_account(account).unwrap();
    (store, id)
}

#[tokio::test]
async fn test_basic_sync_transfers_reward() {
    let (store, id) = store_with_member(dec!(5000), SubscriptionTier::Basic);
    let engine = RewardEngine::new(store.clone(), Duration::ZERO);

    let outcome = engine.sync_activity(id, 1000).await.unwrap();

    assert_eq!(outcome.account.main_balance, dec!(4999));
    assert_eq!(outcome.account.hsa_balance, dec!(251));
    assert_eq!(outcome.account.total_steps, 13_500);
    assert_eq!(outcome.record.kind, TransactionKind::SavingsTransfer);
    assert_eq!(outcome.record.amount, dec!(1.00));
    assert_eq!(outcome.record.description, "Fit-Savings: Synced 1000 steps.");

    // Balance mutation and ledger append are observed together.
    let stored = store.account(id).unwrap();
    assert_eq!(stored, outcome.account);
    let entries = store.entries_for(id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], outcome.record);
}

#[tokio::test]
async fn test_premium_sync_uses_higher_rate() {
    let (store, id) = store_with_member(dec!(100), SubscriptionTier::Premium);
    let engine = RewardEngine::new(store.clone(), Duration::ZERO);

    let outcome = engine.sync_activity(id, 2000).await.unwrap();

    assert_eq!(outcome.record.amount, dec!(3.00));
    assert_eq!(outcome.account.main_balance, dec!(97));
}

#[tokio::test]
async fn test_insufficient_balance_leaves_no_partial_effect() {
    let (store, id) = store_with_member(dec!(0.5), SubscriptionTier::Basic);
    let engine = RewardEngine::new(store.clone(), Duration::ZERO);

    let result = engine.sync_activity(id, 1000).await;
    assert!(matches!(
        result,
        Err(RewardError::InsufficientFunds { .. })
    ));

    let stored = store.account(id).unwrap();
    assert_eq!(stored.main_balance, dec!(0.5));
    assert_eq!(stored.hsa_balance, dec!(250));
    assert_eq!(stored.total_steps, 12_500);
    assert!(store.entries().unwrap().is_empty());
}

#[tokio::test]
async fn test_zero_step_increment_is_rejected() {
    let (store, id) = store_with_member(dec!(5000), SubscriptionTier::Basic);
    let engine = RewardEngine::new(store, Duration::ZERO);

    let result = engine.sync_activity(id, 0).await;
    assert!(matches!(result, Err(RewardError::InvalidStepCount)));
}

#[tokio::test]
async fn test_unknown_account_is_not_found() {
    let store = Arc::new(MemoryStore::new());
    let engine = RewardEngine::new(store, Duration::ZERO);

    let result = engine.sync_activity(UserId::new(), 1000).await;
    assert!(matches!(result, Err(RewardError::Store(_))));
}

#[tokio::test]
async fn test_cancelled_sync_leaves_no_mutation() {
    let (store, id) = store_with_member(dec!(5000), SubscriptionTier::Basic);
    let engine = RewardEngine::new(store.clone(), Duration::from_secs(30));

    let handle = tokio::spawn(async move { engine.sync_activity(id, 1000).await });
    // Let the task reach the sync-delay suspension point, then abandon it.
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    let stored = store.account(id).unwrap();
    assert_eq!(stored.main_balance, dec!(5000));
    assert_eq!(stored.hsa_balance, dec!(250));
    assert_eq!(stored.total_steps, 12_500);
    assert!(store.entries().unwrap().is_empty());
}

#[tokio::test]
async fn test_successive_syncs_accumulate() {
    let (store, id) = store_with_member(dec!(10), SubscriptionTier::Basic);
    let engine = RewardEngine::new(store.clone(), Duration::ZERO);

    engine.sync_activity(id, 1000).await.unwrap();
    engine.sync_activity(id, 500).await.unwrap();

    let stored = store.account(id).unwrap();
    assert_eq!(stored.main_balance, dec!(8.50));
    assert_eq!(stored.hsa_balance, dec!(251.50));
    assert_eq!(stored.total_steps, 14_000);
    assert_eq!(stored.version, 2);
    assert_eq!(store.entries_for(id).unwrap().len(), 2);
}
