//! Property-based tests for the reward calculation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::account::SubscriptionTier;
use crate::reward::engine::RewardEngine;

/// Strategy for generating tiers.
fn arb_tier() -> impl Strategy<Value = SubscriptionTier> {
    prop_oneof![
        Just(SubscriptionTier::Basic),
        Just(SubscriptionTier::Premium),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `reward = rate(tier) * steps / 1000` for any positive step count.
    #[test]
    fn prop_reward_formula(tier in arb_tier(), steps in 1u64..=1_000_000) {
        let reward = RewardEngine::compute_reward(tier, steps);
        let expected =
            RewardEngine::reward_rate(tier) * Decimal::from(steps) / Decimal::from(1000);
        prop_assert_eq!(reward, expected);
    }

    /// Rewards are strictly positive for positive step counts.
    #[test]
    fn prop_reward_positive(tier in arb_tier(), steps in 1u64..=1_000_000) {
        prop_assert!(RewardEngine::compute_reward(tier, steps) > Decimal::ZERO);
    }

    /// Premium always out-earns basic for the same activity.
    #[test]
    fn prop_premium_beats_basic(steps in 1u64..=1_000_000) {
        let basic = RewardEngine::compute_reward(SubscriptionTier::Basic, steps);
        let premium = RewardEngine::compute_reward(SubscriptionTier::Premium, steps);
        prop_assert!(premium > basic);
    }
}
