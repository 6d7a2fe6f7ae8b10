//! Turn actions taken by the acting player.
//!
//! ## Key Types
//!
//! - `PurchaseOutcome`: result of a shop purchase attempt
//!
//! Every action here works on a `TurnContext` and reaches the table only
//! through its zone-transition operations.

use log::debug;

use super::context::TurnContext;
use super::pool::Resource;
use crate::abilities::AbilityOutcome;
use crate::cards::{CardKind, Trigger};
use crate::core::EntityId;
use crate::decision::{choose_ability, choose_card, DecisionProvider};
use crate::error::{GameError, Result};
use crate::zones::Zone;

/// What came of a `buy_card` attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// The card moved to the buyer's discard pile.
    Bought(EntityId),
    /// The selected card costs more than the pool's currency.
    InsufficientFunds,
    /// The shop display is empty.
    NothingOnDisplay,
}

impl TurnContext<'_> {
    /// Play every card in hand.
    ///
    /// Ships leave the table and fire their on-play pool. Stations go to
    /// the bases area and outposts to the outposts area without firing
    /// anything. The hand is snapshotted first; cards an ability already
    /// moved out of hand are passed over.
    pub fn play_hand(&mut self, decider: &mut dyn DecisionProvider) -> Result<()> {
        let registry = self.state.registry();
        let hand_zone = Zone::Hand(self.player);
        let snapshot = self.state.zones.cards_vec(hand_zone);

        for entity in snapshot {
            if !self.state.zones.is_in_zone(entity, hand_zone) {
                continue;
            }
            let card_id = self
                .state
                .instance(entity)
                .ok_or(GameError::UnknownEntity(entity))?
                .card_id;
            let card = registry.lookup(card_id)?;

            match card.kind() {
                CardKind::Ship => {
                    self.state.consume_from_hand(self.player, entity)?;
                    debug!("{} played ship {}", self.player, card.name);
                    card.on_play.apply(self, decider)?;
                }
                CardKind::Station => {
                    self.state.deploy(self.player, entity, Zone::Bases(self.player))?;
                }
                CardKind::Outpost => {
                    self.state
                        .deploy(self.player, entity, Zone::Outposts(self.player))?;
                }
            }
        }
        Ok(())
    }

    /// Pick a card in hand or among the bases and use one of its ally abilities.
    pub fn apply_ally_ability(
        &mut self,
        decider: &mut dyn DecisionProvider,
    ) -> Result<AbilityOutcome> {
        self.apply_card_ability(Trigger::Ally, decider)
    }

    /// Pick a card in hand or among the bases and use one of its
    /// double-ally abilities.
    pub fn apply_double_ally_ability(
        &mut self,
        decider: &mut dyn DecisionProvider,
    ) -> Result<AbilityOutcome> {
        self.apply_card_ability(Trigger::DoubleAlly, decider)
    }

    /// Pick a card in hand or among the bases and use one of its scrap
    /// abilities.
    pub fn apply_scrap_ability(
        &mut self,
        decider: &mut dyn DecisionProvider,
    ) -> Result<AbilityOutcome> {
        self.apply_card_ability(Trigger::Scrap, decider)
    }

    /// Pick one of the acting player's bases and use one of its on-play
    /// abilities.
    pub fn apply_base_ability(
        &mut self,
        decider: &mut dyn DecisionProvider,
    ) -> Result<AbilityOutcome> {
        let bases = self.state.zones.cards_vec(Zone::Bases(self.player));
        self.apply_ability_of(&bases, Trigger::Play, decider)
    }

    fn apply_card_ability(
        &mut self,
        trigger: Trigger,
        decider: &mut dyn DecisionProvider,
    ) -> Result<AbilityOutcome> {
        let mut candidates = self.state.zones.cards_vec(Zone::Hand(self.player));
        candidates.extend(self.state.zones.cards(Zone::Bases(self.player)));
        self.apply_ability_of(&candidates, trigger, decider)
    }

    /// Select a card from `candidates`, then one ability of its `trigger`
    /// pool, and apply it. Nothing to select from is a skip; a selected
    /// card with an empty pool is `EmptyChoice`.
    fn apply_ability_of(
        &mut self,
        candidates: &[EntityId],
        trigger: Trigger,
        decider: &mut dyn DecisionProvider,
    ) -> Result<AbilityOutcome> {
        if candidates.is_empty() {
            debug!("{} has no card to use a {trigger:?} ability of", self.player);
            return Ok(AbilityOutcome::Skipped);
        }

        let registry = self.state.registry();
        let card = choose_card(decider, self.state, self.player, candidates)?;
        let card_id = self
            .state
            .instance(card)
            .ok_or(GameError::UnknownEntity(card))?
            .card_id;
        let pool = registry.lookup(card_id)?.pool(trigger);

        let ability = choose_ability(decider, self.player, pool.abilities())?;
        ability.apply(self, decider)
    }

    /// Try to buy a shop display card with the pool's currency.
    ///
    /// Only the eligibility check is made; the currency counter is left
    /// as it is.
    pub fn buy_card(&mut self, decider: &mut dyn DecisionProvider) -> Result<PurchaseOutcome> {
        let display = self.state.shop.display(&self.state.zones);
        if display.is_empty() {
            return Ok(PurchaseOutcome::NothingOnDisplay);
        }

        let card = choose_card(decider, self.state, self.player, &display)?;
        let cost = i64::from(self.state.definition(card)?.cost);
        let funds = self.pool.get(Resource::Currency);
        if cost > funds {
            debug!("{} cannot afford {card} ({cost} > {funds})", self.player);
            return Ok(PurchaseOutcome::InsufficientFunds);
        }

        self.state.buy_from_shop(card, self.player)?;
        Ok(PurchaseOutcome::Bought(card))
    }

    /// End of turn: bank the pool's heal into health, then refresh the hand.
    pub fn discard_phase(&mut self) -> Result<()> {
        let heal = self.pool.take(Resource::Heal);
        let player = self.state.player_mut(self.player)?;
        player.health += heal;
        debug!("{} healed {heal}, health now {}", self.player, player.health);
        self.state.refresh_hand(self.player)
    }
}
