//! Property-based tests for the loan lifecycle state machine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::account::LoanStatus;
use crate::loan::error::LoanError;
use crate::loan::lifecycle::LoanLifecycle;
use crate::loan::types::{LoanDecision, LoanTransition};

/// Strategy for generating random loan statuses.
fn arb_status() -> impl Strategy<Value = LoanStatus> {
    prop_oneof![
        Just(LoanStatus::None),
        Just(LoanStatus::Pending),
        Just(LoanStatus::Approved),
        Just(LoanStatus::Rejected),
    ]
}

/// Strategy for generating decisions.
fn arb_decision() -> impl Strategy<Value = LoanDecision> {
    prop_oneof![Just(LoanDecision::Approved), Just(LoanDecision::Rejected)]
}

/// Strategy for amounts inside the valid [50, 5000] range (whole units).
fn arb_valid_amount() -> impl Strategy<Value = Decimal> {
    (50i64..=5000).prop_map(Decimal::from)
}

/// Strategy for non-empty reasons.
fn arb_reason() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,60}".prop_map(|s| format!("r{s}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A valid request succeeds from None and only from None.
    #[test]
    fn prop_request_only_from_none(
        status in arb_status(),
        amount in arb_valid_amount(),
        reason in arb_reason()
    ) {
        let result = LoanLifecycle::request(status, amount, &reason);
        if status == LoanStatus::None {
            let transition = result.unwrap();
            prop_assert_eq!(transition.new_status(), LoanStatus::Pending);
        } else {
            prop_assert!(
                matches!(result, Err(LoanError::InvalidTransition { .. })),
                "expected InvalidTransition, got {:?}",
                result
            );
        }
    }

    /// Out-of-range amounts are rejected regardless of status.
    #[test]
    fn prop_request_rejects_out_of_range(
        status in arb_status(),
        raw in prop_oneof![-10_000i64..50, 5001i64..100_000],
        reason in arb_reason()
    ) {
        let result = LoanLifecycle::request(status, Decimal::from(raw), &reason);
        prop_assert!(
            matches!(result, Err(LoanError::AmountOutOfRange { .. })),
            "expected AmountOutOfRange, got {:?}",
            result
        );
    }

    /// A decision succeeds from Pending and only from Pending, and always
    /// records the stored amount.
    #[test]
    fn prop_decide_only_from_pending(
        status in arb_status(),
        decision in arb_decision(),
        amount in arb_valid_amount()
    ) {
        let result = LoanLifecycle::decide(status, decision, amount);
        if status == LoanStatus::Pending {
            let transition = result.unwrap();
            prop_assert_eq!(transition.new_status(), decision.status());
            if let LoanTransition::Decide { recorded_amount, .. } = transition {
                prop_assert_eq!(recorded_amount, amount);
            } else {
                prop_assert!(false, "Expected Decide transition");
            }
        } else {
            prop_assert!(
                matches!(result, Err(LoanError::InvalidTransition { .. })),
                "expected InvalidTransition, got {:?}",
                result
            );
        }
    }

    /// Acknowledge succeeds exactly when a decision is awaiting the member,
    /// and always lands on None.
    #[test]
    fn prop_acknowledge_only_from_decided(status in arb_status()) {
        let result = LoanLifecycle::acknowledge(status);
        if status.is_decided() {
            prop_assert_eq!(result.unwrap().new_status(), LoanStatus::None);
        } else {
            prop_assert!(
                matches!(result, Err(LoanError::InvalidTransition { .. })),
                "expected InvalidTransition, got {:?}",
                result
            );
        }
    }

    /// Every transition produced by the lifecycle is valid per the
    /// transition table.
    #[test]
    fn prop_produced_transitions_are_valid(
        amount in arb_valid_amount(),
        decision in arb_decision(),
        reason in arb_reason()
    ) {
        let request = LoanLifecycle::request(LoanStatus::None, amount, &reason).unwrap();
        prop_assert!(LoanLifecycle::is_valid_transition(
            LoanStatus::None,
            request.new_status()
        ));

        let decide = LoanLifecycle::decide(LoanStatus::Pending, decision, amount).unwrap();
        prop_assert!(LoanLifecycle::is_valid_transition(
            LoanStatus::Pending,
            decide.new_status()
        ));

        let acknowledge = LoanLifecycle::acknowledge(decision.status()).unwrap();
        prop_assert!(LoanLifecycle::is_valid_transition(
            decision.status(),
            acknowledge.new_status()
        ));
    }
}
