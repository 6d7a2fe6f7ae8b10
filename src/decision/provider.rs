//! The decision provider trait and its checked entry points.
//!
//! The engine calls a `DecisionProvider` whenever a player has to pick a
//! card, an ability, an opponent, or answer a yes/no question. Providers
//! are plain capabilities passed into each operation, so an AI, a UI and a
//! scripted test double all plug in the same way.
//!
//! The provider is trusted to answer, not to answer correctly: every
//! selection goes through the `choose_*` helpers below, which reject
//! answers outside the offered candidates with `SelectionOutOfRange`.

use log::warn;

use crate::abilities::Ability;
use crate::cards::CardDefinition;
use crate::core::{EntityId, GameState, PlayerId};
use crate::error::{GameError, Result};

/// A card offered for selection, with its definition for inspection.
#[derive(Clone, Copy, Debug)]
pub struct CardChoice<'a> {
    pub entity: EntityId,
    pub card: &'a CardDefinition,
}

/// Interface between the engine and whoever makes a player's choices.
///
/// `chooser` is the player the decision is made for. It is usually the
/// acting player, but an opponent chooses which of their own cards to
/// discard.
pub trait DecisionProvider {
    /// Pick one of `candidates` and return its entity.
    fn select_card(&mut self, chooser: PlayerId, candidates: &[CardChoice<'_>]) -> EntityId;

    /// Pick one of `candidates` and return its index.
    fn select_ability(&mut self, chooser: PlayerId, candidates: &[Ability]) -> usize;

    /// Pick one of `candidates`.
    fn select_opponent(&mut self, chooser: PlayerId, candidates: &[PlayerId]) -> PlayerId;

    /// Answer a yes/no question.
    fn confirm(&mut self, chooser: PlayerId, prompt: &str) -> bool;
}

/// Ask `decider` to pick one of `candidates`, validating the answer.
pub fn choose_card(
    decider: &mut dyn DecisionProvider,
    state: &GameState,
    chooser: PlayerId,
    candidates: &[EntityId],
) -> Result<EntityId> {
    if candidates.is_empty() {
        return Err(GameError::SelectionOutOfRange { what: "card", len: 0 });
    }

    let choices = candidates
        .iter()
        .map(|&entity| {
            Ok(CardChoice {
                entity,
                card: state.definition(entity)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let picked = decider.select_card(chooser, &choices);
    if candidates.contains(&picked) {
        Ok(picked)
    } else {
        warn!("{chooser} picked {picked}, which was not offered");
        Err(GameError::SelectionOutOfRange {
            what: "card",
            len: candidates.len(),
        })
    }
}

/// Ask `decider` to pick one of `candidates`.
///
/// Fails with `EmptyChoice` if there is nothing to choose from.
pub fn choose_ability<'p>(
    decider: &mut dyn DecisionProvider,
    chooser: PlayerId,
    candidates: &'p [Ability],
) -> Result<&'p Ability> {
    if candidates.is_empty() {
        return Err(GameError::EmptyChoice);
    }

    let index = decider.select_ability(chooser, candidates);
    candidates.get(index).ok_or_else(|| {
        warn!("{chooser} picked ability #{index} of {}", candidates.len());
        GameError::SelectionOutOfRange {
            what: "ability",
            len: candidates.len(),
        }
    })
}

/// Ask `decider` to pick one of `candidates`, validating the answer.
pub fn choose_opponent(
    decider: &mut dyn DecisionProvider,
    chooser: PlayerId,
    candidates: &[PlayerId],
) -> Result<PlayerId> {
    if candidates.is_empty() {
        return Err(GameError::SelectionOutOfRange {
            what: "opponent",
            len: 0,
        });
    }

    let picked = decider.select_opponent(chooser, candidates);
    if candidates.contains(&picked) {
        Ok(picked)
    } else {
        warn!("{chooser} targeted {picked}, who was not offered");
        Err(GameError::SelectionOutOfRange {
            what: "opponent",
            len: candidates.len(),
        })
    }
}
