//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition a table can use.
//! Content loading fills it before play; the engine only reads it.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::error::{GameError, Result};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use rust_deckbattler::cards::{CardDefinition, CardId, CardRegistry, Faction};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::ship(CardId::new(1), "Scout", 0, Faction::Neutral));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Scout");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition, failing with `UnknownCard` if missing.
    pub fn lookup(&self, id: CardId) -> Result<&CardDefinition> {
        self.cards.get(&id).ok_or(GameError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<CardDefinition> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}
