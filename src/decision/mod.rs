//! Player decisions.
//!
//! - `DecisionProvider`: the trait the engine calls for every choice
//! - `CardChoice`: a card offered for selection
//! - `FirstChoice`, `ScriptedDecisions`: bundled providers

mod provider;
mod scripted;

pub use provider::{choose_ability, choose_card, choose_opponent, CardChoice, DecisionProvider};
pub use scripted::{FirstChoice, ScriptedDecisions};
