//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: cost,
//! faction, kind, hit points and its four ability pools. Which zone a
//! particular copy is in belongs to the arena, not the definition.

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityPool;

/// Unique identifier for a card definition.
///
/// This identifies the card type (e.g. "Scout"), not a copy at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Federation,
    Slime,
    Techno,
    Empire,
    Neutral,
}

/// What a card does when played from hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Fires its on-play pool and is consumed.
    Ship,
    /// Stays in play among the owner's bases.
    Station,
    /// Stays in play among the owner's outposts and shields the owner.
    Outpost,
}

/// Static card definition.
///
/// Hit points are present exactly when the kind is not `Ship`; the
/// constructors are the only way to pick a kind, so the two never disagree.
///
/// ## Example
///
/// ```
/// use rust_deckbattler::abilities::{Ability, AbilityPool};
/// use rust_deckbattler::cards::{CardDefinition, CardId, CardKind, Faction};
///
/// let scout = CardDefinition::ship(CardId::new(1), "Scout", 0, Faction::Neutral)
///     .with_on_play(AbilityPool::all([Ability::PoolMoney(1)]));
/// assert_eq!(scout.kind(), CardKind::Ship);
/// assert_eq!(scout.hp(), None);
///
/// let wall = CardDefinition::outpost(CardId::new(2), "Bulwark", 4, Faction::Empire, 5);
/// assert_eq!(wall.hp(), Some(5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Price in the shop.
    pub cost: u32,

    pub faction: Faction,

    kind: CardKind,
    hp: Option<u32>,

    /// Fired when a ship is played from hand, or on demand for a base.
    pub on_play: AbilityPool,
    /// Fired when the card is scrapped for its effect.
    pub on_scrap: AbilityPool,
    /// Fired when an ally of the same faction is in play.
    pub on_ally: AbilityPool,
    /// Fired when two allies of the same faction are in play.
    pub on_double_ally: AbilityPool,
}

impl CardDefinition {
    fn with_kind(
        id: CardId,
        name: impl Into<String>,
        cost: u32,
        faction: Faction,
        kind: CardKind,
        hp: Option<u32>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            faction,
            kind,
            hp,
            on_play: AbilityPool::default(),
            on_scrap: AbilityPool::default(),
            on_ally: AbilityPool::default(),
            on_double_ally: AbilityPool::default(),
        }
    }

    /// Create a ship (no hit points).
    #[must_use]
    pub fn ship(id: CardId, name: impl Into<String>, cost: u32, faction: Faction) -> Self {
        Self::with_kind(id, name, cost, faction, CardKind::Ship, None)
    }

    /// Create a station.
    #[must_use]
    pub fn station(
        id: CardId,
        name: impl Into<String>,
        cost: u32,
        faction: Faction,
        hp: u32,
    ) -> Self {
        Self::with_kind(id, name, cost, faction, CardKind::Station, Some(hp))
    }

    /// Create an outpost.
    #[must_use]
    pub fn outpost(
        id: CardId,
        name: impl Into<String>,
        cost: u32,
        faction: Faction,
        hp: u32,
    ) -> Self {
        Self::with_kind(id, name, cost, faction, CardKind::Outpost, Some(hp))
    }

    #[must_use]
    pub fn with_on_play(mut self, pool: AbilityPool) -> Self {
        self.on_play = pool;
        self
    }

    #[must_use]
    pub fn with_on_scrap(mut self, pool: AbilityPool) -> Self {
        self.on_scrap = pool;
        self
    }

    #[must_use]
    pub fn with_ally(mut self, pool: AbilityPool) -> Self {
        self.on_ally = pool;
        self
    }

    #[must_use]
    pub fn with_double_ally(mut self, pool: AbilityPool) -> Self {
        self.on_double_ally = pool;
        self
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// Hit points, `None` for ships.
    #[must_use]
    pub fn hp(&self) -> Option<u32> {
        self.hp
    }

    /// The pool fired by `trigger`.
    #[must_use]
    pub fn pool(&self, trigger: Trigger) -> &AbilityPool {
        match trigger {
            Trigger::Play => &self.on_play,
            Trigger::Scrap => &self.on_scrap,
            Trigger::Ally => &self.on_ally,
            Trigger::DoubleAlly => &self.on_double_ally,
        }
    }
}

/// The four moments a card's abilities can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    Play,
    Scrap,
    Ally,
    DoubleAlly,
}
