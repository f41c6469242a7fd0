//! Subscription tier switching.

pub mod policy;
pub mod types;

pub use policy::{SubscriptionPolicy, SubscriptionService};
pub use types::{TierChange, TierDirection, TierSwitchActor, TierSwitchOutcome};
