//! Administrative view types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::UserAccount;

/// A pending loan application annotated for administrative triage.
#[derive(Debug, Clone, Serialize)]
pub struct PendingLoan {
    /// The applying account (its `loan_amount` holds the requested amount).
    pub account: UserAccount,
    /// Activity heuristic on a 0-100 scale, derived from lifetime steps.
    pub activity_score: Decimal,
}
