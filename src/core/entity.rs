//! Card instance identification.
//!
//! Every physical card at the table has a unique `EntityId`, allocated by
//! `GameState` when the card enters the arena. Two copies of the same card
//! definition are two entities; identity never depends on card content.
//!
//! ```
//! use rust_deckbattler::core::EntityId;
//!
//! let scout = EntityId(7);
//! assert_eq!(scout.raw(), 7);
//! assert_eq!(scout.to_string(), "Entity(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID following this one (used by the arena allocator).
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
