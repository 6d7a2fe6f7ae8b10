//! Ability system for card effects.
//!
//! - `Ability`: one effect (pool counters, shop manipulation, hand churn)
//! - `AbilityPool`: apply-all or apply-one-of-choice grouping
//! - `AbilityOutcome`: applied, declined, or skipped
//!
//! Abilities never reach outside the `TurnContext` they are applied to.

mod ability;
mod pool;
mod resolver;

pub use ability::Ability;
pub use pool::{Abilities, AbilityPool};
pub use resolver::AbilityOutcome;
