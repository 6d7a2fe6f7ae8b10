//! # rust-deckbattler
//!
//! Turn engine for a deck-building space card battler.
//!
//! ## Design Principles
//!
//! 1. **One Zone Per Card**: Every card at the table lives in one arena slot
//!    with a zone tag. Transfers update the tag and the zone order together,
//!    so a card is never in two zones or lost between them.
//!
//! 2. **N-Player First**: Every API takes a `PlayerId`; nothing assumes two
//!    players.
//!
//! 3. **Injected Choices**: Every selection and yes/no question goes
//!    through a `DecisionProvider` passed into the operation, and every
//!    shuffle through the table's `Shuffler`. A scripted provider and an
//!    identity shuffler make any sequence of operations reproducible.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, the table state, RNG, configuration
//! - `zones`: Zone identifiers and the zone manager
//! - `cards`: Card definitions, instances and the registry
//! - `abilities`: Ability variants and ability pools
//! - `decision`: The decision provider trait and bundled providers
//! - `shop`: The face-up display and its supply
//! - `turn`: Turn context, resource pool, player actions and attacks
//! - `error`: The error taxonomy
//!
//! ## Example
//!
//! ```
//! use rust_deckbattler::{
//!     Ability, AbilityPool, CardDefinition, CardId, CardRegistry, Faction, FirstChoice,
//!     GameState, PlayerId, TableConfig, TurnContext,
//! };
//!
//! let viper = CardDefinition::ship(CardId::new(1), "Viper", 0, Faction::Neutral)
//!     .with_on_play(AbilityPool::all([Ability::PoolDamage(1)]));
//! let registry: CardRegistry = [viper].into_iter().collect();
//!
//! let mut state = GameState::new(2, TableConfig::default(), registry);
//! let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
//! state.add_deck(p0, vec![CardId::new(1); 10]).unwrap();
//! state.refresh_hand(p0).unwrap();
//!
//! let mut turn = TurnContext::new(&mut state, p0).unwrap();
//! turn.play_hand(&mut FirstChoice).unwrap();
//! turn.attack(&mut FirstChoice).unwrap();
//!
//! assert_eq!(state.health(p1), Ok(45));
//! ```

pub mod core;
pub mod zones;
pub mod cards;
pub mod abilities;
pub mod decision;
pub mod shop;
pub mod turn;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PlayerId, PlayerMap, PlayerState,
    GameRng, Shuffler, KeepOrder,
    TableConfig, GameState,
};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::cards::{
    CardId, CardKind, CardDefinition, CardInstance, CardRegistry, Faction, Trigger,
};

pub use crate::abilities::{Ability, AbilityOutcome, AbilityPool};

pub use crate::decision::{DecisionProvider, FirstChoice, ScriptedDecisions};

pub use crate::shop::Shop;

pub use crate::turn::{
    AttackPhase, AttackReport, PurchaseOutcome, Resource, ResourcePool, TurnContext,
};

pub use crate::error::{GameError, Result};
