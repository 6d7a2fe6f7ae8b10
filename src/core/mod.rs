//! Core engine types: entities, players, the table state, RNG, configuration.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod state;

pub use entity::EntityId;
pub use player::{PlayerId, PlayerMap, PlayerState};
pub use rng::{GameRng, KeepOrder, Shuffler};
pub use config::TableConfig;
pub use state::GameState;
