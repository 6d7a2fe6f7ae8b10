//! A player's turn.
//!
//! ## Key Types
//!
//! - `TurnContext`: the table, the acting player, their opponents and the pool
//! - `ResourcePool`: damage, heal and currency gathered this turn
//! - `AttackReport`: what an attack destroyed and how far it got
//!
//! The player zone-transition operations (`draw_to_hand`, `refresh_hand`,
//! `buy_from_shop`, ...) are defined on `GameState` in `transitions`.

mod actions;
mod combat;
mod context;
mod pool;
mod transitions;

pub use actions::PurchaseOutcome;
pub use combat::{AttackPhase, AttackReport};
pub use context::TurnContext;
pub use pool::{Resource, ResourcePool};
