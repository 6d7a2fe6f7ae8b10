//! The card arena and everything it tracks.
//!
//! `GameState` owns:
//! - One `CardInstance` per physical card (the arena slots)
//! - The `ZoneManager` holding each card's zone tag and per-zone order
//! - Per-player scalars (health)
//! - The shop layout and the shuffler used for reshuffles
//!
//! Cards enter the arena through `add_card` (content loading) and leave it
//! only when scrapped or consumed. While a card is in the arena it is in
//! exactly one zone.

use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use super::config::TableConfig;
use super::entity::EntityId;
use super::player::{PlayerId, PlayerMap, PlayerState};
use super::rng::{GameRng, Shuffler};
use crate::cards::{CardDefinition, CardId, CardInstance, CardRegistry};
use crate::error::{GameError, Result};
use crate::shop::Shop;
use crate::zones::{Zone, ZoneManager};

/// Full table state.
pub struct GameState {
    config: TableConfig,

    /// Shared card definitions. Held behind an `Arc` so ability pools can be
    /// read while the state itself is borrowed mutably.
    registry: Arc<CardRegistry>,

    /// Zone manager for card locations. Only the transitions in this crate
    /// move cards, so every arena slot always has exactly one zone.
    pub(crate) zones: ZoneManager,

    /// Card instances by entity ID.
    cards: FxHashMap<EntityId, CardInstance>,

    players: PlayerMap<PlayerState>,

    pub shop: Shop,

    /// Permutation service for reshuffles.
    shuffler: Box<dyn Shuffler>,

    next_entity_id: EntityId,
}

impl GameState {
    /// Create a table with `player_count` seats and an empty shop.
    ///
    /// Reshuffles use a `GameRng` seeded from the config.
    #[must_use]
    pub fn new(player_count: usize, config: TableConfig, registry: CardRegistry) -> Self {
        let players = PlayerMap::with_value(player_count, PlayerState::new(config.starting_health));
        Self {
            shop: Shop::new(config.shop_display_size),
            shuffler: Box::new(GameRng::new(config.seed)),
            config,
            registry: Arc::new(registry),
            zones: ZoneManager::new(),
            cards: FxHashMap::default(),
            players,
            next_entity_id: EntityId(0),
        }
    }

    /// Replace the permutation service.
    #[must_use]
    pub fn with_shuffler(mut self, shuffler: impl Shuffler + 'static) -> Self {
        self.shuffler = Box::new(shuffler);
        self
    }

    /// Read-only view of where every card is.
    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over all seated players.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    // === Players ===

    pub fn player(&self, player: PlayerId) -> Result<&PlayerState> {
        self.players.try_get(player).ok_or(GameError::UnknownPlayer(player))
    }

    pub fn player_mut(&mut self, player: PlayerId) -> Result<&mut PlayerState> {
        self.players
            .try_get_mut(player)
            .ok_or(GameError::UnknownPlayer(player))
    }

    /// Current health of a player.
    pub fn health(&self, player: PlayerId) -> Result<i64> {
        Ok(self.player(player)?.health)
    }

    // === Arena ===

    /// A handle to the card registry that outlives borrows of `self`.
    #[must_use]
    pub fn registry(&self) -> Arc<CardRegistry> {
        Arc::clone(&self.registry)
    }

    /// Create a new card instance of `card_id` in `zone`.
    ///
    /// Cards placed in a player's zone are owned by that player; shop cards
    /// are neutral.
    pub fn add_card(&mut self, card_id: CardId, zone: Zone) -> Result<EntityId> {
        self.registry.lookup(card_id)?;
        if let Some(owner) = zone.owner() {
            self.player(owner)?;
        }

        let entity = self.next_entity_id;
        self.next_entity_id = entity.next();

        let instance = match zone.owner() {
            Some(owner) => CardInstance::new(entity, card_id, owner),
            None => CardInstance::neutral(entity, card_id),
        };
        self.cards.insert(entity, instance);
        self.zones.put(entity, zone);
        Ok(entity)
    }

    /// Fill a player's draw pile. The last card listed ends up on top.
    pub fn add_deck(
        &mut self,
        player: PlayerId,
        cards: impl IntoIterator<Item = CardId>,
    ) -> Result<Vec<EntityId>> {
        cards
            .into_iter()
            .map(|card_id| self.add_card(card_id, Zone::DrawPile(player)))
            .collect()
    }

    /// Fill the shop supply and top up the display from it.
    ///
    /// The last card listed is the top of the supply, so it is the first
    /// one revealed. Returns the supply entities in listed order.
    pub fn stock_shop(&mut self, cards: impl IntoIterator<Item = CardId>) -> Result<Vec<EntityId>> {
        let stocked = cards
            .into_iter()
            .map(|card_id| self.add_card(card_id, Zone::ShopSupply))
            .collect::<Result<Vec<_>>>()?;
        self.shop.replenish(&mut self.zones);
        Ok(stocked)
    }

    #[must_use]
    pub fn instance(&self, entity: EntityId) -> Option<&CardInstance> {
        self.cards.get(&entity)
    }

    /// Definition of the card an entity is a copy of.
    pub fn definition(&self, entity: EntityId) -> Result<&CardDefinition> {
        let instance = self
            .cards
            .get(&entity)
            .ok_or(GameError::UnknownEntity(entity))?;
        self.registry.lookup(instance.card_id)
    }

    /// Change a card's owner (a shop purchase).
    pub fn set_owner(&mut self, entity: EntityId, owner: PlayerId) {
        if let Some(instance) = self.cards.get_mut(&entity) {
            instance.owner = Some(owner);
        }
    }

    /// Take a card out of `zone` and out of the arena.
    ///
    /// Used for scrapping and for consumed ships; afterwards the card is in
    /// no zone and no longer exists.
    pub fn remove_card(&mut self, entity: EntityId, zone: Zone) -> Result<CardInstance> {
        self.zones.take(entity, zone)?;
        let instance = self
            .cards
            .remove(&entity)
            .ok_or(GameError::NotFound { entity, zone })?;
        debug!("{entity} left the table from {zone}");
        Ok(instance)
    }

    /// Number of cards at the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // === Shuffling ===

    /// Shuffle a zone with the table's permutation service.
    pub fn shuffle_zone(&mut self, zone: Zone) {
        self.zones.shuffle(zone, self.shuffler.as_mut());
    }

    // === Invariants ===

    /// Check the single-zone invariant: every card in the arena is in
    /// exactly one zone and the zone manager tracks nothing else.
    #[must_use]
    pub fn check_zone_integrity(&self) -> bool {
        self.zones.is_consistent()
            && self.zones.total_cards() == self.cards.len()
            && self.cards.keys().all(|&entity| self.zones.contains(entity))
    }
}
