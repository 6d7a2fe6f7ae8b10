//! Ability pools: how a card's abilities combine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Ability;

/// Abilities stored inline; printed cards rarely carry more than two.
pub type Abilities = SmallVec<[Ability; 2]>;

/// A group of abilities that fire together.
///
/// - `All`: every ability fires, in order
/// - `OneOf`: the player picks exactly one to fire
///
/// The default pool is an empty `All`, which does nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityPool {
    All(Abilities),
    OneOf(Abilities),
}

impl AbilityPool {
    pub fn all(abilities: impl IntoIterator<Item = Ability>) -> Self {
        Self::All(abilities.into_iter().collect())
    }

    pub fn one_of(abilities: impl IntoIterator<Item = Ability>) -> Self {
        Self::OneOf(abilities.into_iter().collect())
    }

    #[must_use]
    pub fn abilities(&self) -> &[Ability] {
        match self {
            Self::All(abilities) | Self::OneOf(abilities) => abilities,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities().len()
    }
}

impl Default for AbilityPool {
    fn default() -> Self {
        Self::All(SmallVec::new())
    }
}
