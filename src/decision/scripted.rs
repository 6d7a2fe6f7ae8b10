//! Ready-made decision providers.
//!
//! - `FirstChoice`: always takes the first candidate and accepts every
//!   optional ability. Useful as a baseline bot.
//! - `ScriptedDecisions`: follows per-kind queues of answers, falling back
//!   to `FirstChoice` behavior once a queue runs dry. Every prompt it is
//!   asked is recorded, so tests can assert on them.

use std::collections::VecDeque;

use crate::abilities::Ability;
use crate::core::{EntityId, PlayerId};

use super::provider::{CardChoice, DecisionProvider};

/// Picks the first candidate every time and says yes to everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoice;

impl DecisionProvider for FirstChoice {
    fn select_card(&mut self, _chooser: PlayerId, candidates: &[CardChoice<'_>]) -> EntityId {
        candidates.first().map_or(EntityId(u32::MAX), |choice| choice.entity)
    }

    fn select_ability(&mut self, _chooser: PlayerId, _candidates: &[Ability]) -> usize {
        0
    }

    fn select_opponent(&mut self, _chooser: PlayerId, candidates: &[PlayerId]) -> PlayerId {
        candidates.first().copied().unwrap_or(PlayerId::new(u8::MAX))
    }

    fn confirm(&mut self, _chooser: PlayerId, _prompt: &str) -> bool {
        true
    }
}

/// A provider that replays a fixed script.
///
/// # Example
/// ```
/// use rust_deckbattler::core::{EntityId, PlayerId};
/// use rust_deckbattler::decision::{DecisionProvider, ScriptedDecisions};
///
/// let mut script = ScriptedDecisions::new()
///     .confirm(false)
///     .opponent(PlayerId::new(2));
///
/// assert!(!DecisionProvider::confirm(&mut script, PlayerId::new(0), "Destroy a base?"));
/// assert!(DecisionProvider::confirm(&mut script, PlayerId::new(0), "Destroy a base?")); // script exhausted
/// assert_eq!(script.prompts().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    cards: VecDeque<EntityId>,
    abilities: VecDeque<usize>,
    opponents: VecDeque<PlayerId>,
    confirms: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedDecisions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a card pick.
    #[must_use]
    pub fn card(mut self, entity: EntityId) -> Self {
        self.cards.push_back(entity);
        self
    }

    /// Queue several card picks, in order.
    #[must_use]
    pub fn cards(mut self, entities: impl IntoIterator<Item = EntityId>) -> Self {
        self.cards.extend(entities);
        self
    }

    /// Queue an ability pick by index.
    #[must_use]
    pub fn ability(mut self, index: usize) -> Self {
        self.abilities.push_back(index);
        self
    }

    /// Queue an opponent pick.
    #[must_use]
    pub fn opponent(mut self, player: PlayerId) -> Self {
        self.opponents.push_back(player);
        self
    }

    /// Queue a yes/no answer.
    #[must_use]
    pub fn confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    /// Every confirmation prompt asked so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// True once every queued answer has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cards.is_empty()
            && self.abilities.is_empty()
            && self.opponents.is_empty()
            && self.confirms.is_empty()
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn select_card(&mut self, chooser: PlayerId, candidates: &[CardChoice<'_>]) -> EntityId {
        match self.cards.pop_front() {
            Some(entity) => entity,
            None => FirstChoice.select_card(chooser, candidates),
        }
    }

    fn select_ability(&mut self, _chooser: PlayerId, _candidates: &[Ability]) -> usize {
        self.abilities.pop_front().unwrap_or(0)
    }

    fn select_opponent(&mut self, chooser: PlayerId, candidates: &[PlayerId]) -> PlayerId {
        match self.opponents.pop_front() {
            Some(player) => player,
            None => FirstChoice.select_opponent(chooser, candidates),
        }
    }

    fn confirm(&mut self, _chooser: PlayerId, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirms.pop_front().unwrap_or(true)
    }
}
