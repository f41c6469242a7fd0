//! Activity-to-savings reward engine.

pub mod engine;
pub mod error;

#[cfg(test)]
mod engine_props;

pub use engine::{RewardEngine, RewardOutcome};
pub use error::RewardError;
