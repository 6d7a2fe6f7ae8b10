//! Player zone-transition operations.
//!
//! These are the only ways a player's cards change zone. Each one is a
//! single atomic transfer (or a sequence of them) on the zone manager.
//! Operations that affect another player, such as forcing a discard, go
//! through these too rather than touching zones directly.

use log::debug;

use crate::cards::CardInstance;
use crate::core::{EntityId, GameState, PlayerId};
use crate::decision::{choose_card, DecisionProvider};
use crate::error::{GameError, Result};
use crate::zones::Zone;

impl GameState {
    /// Shuffle the discard pile and put all of it onto the draw pile.
    ///
    /// Returns the number of cards moved.
    pub fn reshuffle_discard_into_draw(&mut self, player: PlayerId) -> Result<usize> {
        self.player(player)?;
        self.shuffle_zone(Zone::DiscardPile(player));
        let moved = self
            .zones
            .move_all(Zone::DiscardPile(player), Zone::DrawPile(player));
        debug!("{player} reshuffled {moved} cards into the draw pile");
        Ok(moved)
    }

    /// Move the top of the draw pile into hand.
    ///
    /// An empty draw pile is refilled from the discard pile once; if both
    /// are empty this fails with `NoCardsAvailable`.
    pub fn draw_to_hand(&mut self, player: PlayerId) -> Result<EntityId> {
        self.player(player)?;
        if self.zones.is_empty(Zone::DrawPile(player)) {
            self.reshuffle_discard_into_draw(player)?;
        }
        match self.zones.draw_into(Zone::DrawPile(player), Zone::Hand(player)) {
            Err(GameError::EmptyZone { .. }) => Err(GameError::NoCardsAvailable { player }),
            result => result,
        }
    }

    /// Move a card from hand to the discard pile.
    pub fn discard_from_hand(&mut self, player: PlayerId, entity: EntityId) -> Result<()> {
        self.zones
            .transfer(entity, Zone::Hand(player), Zone::DiscardPile(player))
    }

    /// Have `player` pick a card from their own hand and discard it.
    ///
    /// Returns `None` when the hand is empty.
    pub fn discard_chosen_card(
        &mut self,
        player: PlayerId,
        decider: &mut dyn DecisionProvider,
    ) -> Result<Option<EntityId>> {
        let hand = self.zones.cards_vec(Zone::Hand(player));
        if hand.is_empty() {
            debug!("{player} has no cards to discard");
            return Ok(None);
        }
        let card = choose_card(decider, self, player, &hand)?;
        self.discard_from_hand(player, card)?;
        Ok(Some(card))
    }

    /// Discard the whole hand, then draw a fresh one of the configured size.
    pub fn refresh_hand(&mut self, player: PlayerId) -> Result<()> {
        self.player(player)?;
        let discarded = self
            .zones
            .move_all(Zone::Hand(player), Zone::DiscardPile(player));
        debug!("{player} discarded {discarded} cards from hand");

        for _ in 0..self.config().hand_size {
            self.draw_to_hand(player)?;
        }
        Ok(())
    }

    /// Destroyed base goes to its owner's discard pile.
    pub fn destroy_base(&mut self, owner: PlayerId, entity: EntityId) -> Result<()> {
        self.zones
            .transfer(entity, Zone::Bases(owner), Zone::DiscardPile(owner))
    }

    /// Destroyed outpost goes to its owner's discard pile.
    pub fn destroy_outpost(&mut self, owner: PlayerId, entity: EntityId) -> Result<()> {
        self.zones
            .transfer(entity, Zone::Outposts(owner), Zone::DiscardPile(owner))
    }

    /// Put a station or outpost from hand into play.
    pub fn deploy(&mut self, player: PlayerId, entity: EntityId, area: Zone) -> Result<()> {
        self.zones.transfer(entity, Zone::Hand(player), area)
    }

    /// Remove a played ship from hand; it goes to no zone.
    pub fn consume_from_hand(&mut self, player: PlayerId, entity: EntityId) -> Result<CardInstance> {
        self.remove_card(entity, Zone::Hand(player))
    }

    /// Move a shop display card to `buyer`'s discard pile and refill the display.
    pub fn buy_from_shop(&mut self, entity: EntityId, buyer: PlayerId) -> Result<()> {
        self.player(buyer)?;
        let shop = self.shop;
        shop.sell_to(&mut self.zones, entity, Zone::DiscardPile(buyer))?;
        self.set_owner(entity, buyer);
        debug!("{buyer} acquired {entity}");
        Ok(())
    }

    /// Remove a shop display card from the game and refill the display.
    pub fn scrap_from_shop(&mut self, entity: EntityId) -> Result<CardInstance> {
        let shop = self.shop;
        let instance = self.remove_card(entity, Zone::ShopDisplay)?;
        shop.replenish(&mut self.zones);
        Ok(instance)
    }
}
