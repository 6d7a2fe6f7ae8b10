//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` is the zone-tag half of the card arena: it records,
//! for every card entity at the table, the one zone it is in, plus the
//! order of cards within each zone. It supports:
//! - Stack zones (draw/discard piles, shop supply): push and pop at the top
//! - Set zones (hand, bases, outposts, shop display): take by identity
//! - Atomic transfers that update the tag and both orders together
//! - Shuffle-transfer of a whole pile through an injected `Shuffler`
//!
//! Orders are `im::Vector`s, so cloning a manager for a snapshot is cheap.

use im::Vector;
use log::debug;
use rustc_hash::FxHashMap;

use crate::core::{EntityId, Shuffler};
use crate::error::{GameError, Result};

use super::{Zone, ZoneDiscipline};

/// Tracks card locations across zones.
///
/// Index 0 of a zone's order is the bottom; the last element is the top.
///
/// ## Usage
///
/// ```
/// use rust_deckbattler::core::{EntityId, PlayerId};
/// use rust_deckbattler::zones::{Zone, ZoneManager};
///
/// let p0 = PlayerId::new(0);
/// let mut manager = ZoneManager::new();
///
/// manager.put(EntityId(10), Zone::DrawPile(p0));
/// manager.put(EntityId(11), Zone::DrawPile(p0));
///
/// // Top of the pile goes to hand.
/// let drawn = manager.draw_into(Zone::DrawPile(p0), Zone::Hand(p0)).unwrap();
/// assert_eq!(drawn, EntityId(11));
/// assert_eq!(manager.zone_of(drawn), Some(Zone::Hand(p0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: entity -> zone
    locations: FxHashMap<EntityId, Zone>,

    /// Card order within each non-empty zone (bottom first).
    zone_order: FxHashMap<Zone, Vector<EntityId>>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card on top of a stack zone, or into a set zone.
    ///
    /// Panics if the entity is already tracked: a card can only be put
    /// somewhere after it has been taken from wherever it was.
    pub fn put(&mut self, entity: EntityId, zone: Zone) {
        if self.locations.contains_key(&entity) {
            panic!("Entity {:?} already exists in zone manager", entity);
        }

        self.locations.insert(entity, zone);
        self.zone_order.entry(zone).or_default().push_back(entity);
    }

    /// Remove and return the top card of a stack zone.
    ///
    /// The returned card is in no zone; callers either `put` it somewhere
    /// or drop it from the arena. Set zones fail with `WrongDiscipline`.
    pub fn draw(&mut self, zone: Zone) -> Result<EntityId> {
        require(zone, ZoneDiscipline::Stack)?;
        let entity = self
            .zone_order
            .get_mut(&zone)
            .and_then(Vector::pop_back)
            .ok_or(GameError::EmptyZone { zone })?;
        self.locations.remove(&entity);
        Ok(entity)
    }

    /// Remove a specific card from a set zone by identity.
    ///
    /// Fails with `NotFound` if the card is not in `zone`, and with
    /// `WrongDiscipline` if `zone` is a stack.
    pub fn take(&mut self, entity: EntityId, zone: Zone) -> Result<EntityId> {
        require(zone, ZoneDiscipline::Set)?;
        if self.locations.get(&entity) != Some(&zone) {
            return Err(GameError::NotFound { entity, zone });
        }

        if let Some(order) = self.zone_order.get_mut(&zone) {
            if let Some(idx) = order.iter().position(|&e| e == entity) {
                order.remove(idx);
            }
        }
        self.locations.remove(&entity);
        Ok(entity)
    }

    /// Move the top card of `from` onto `to`.
    pub fn draw_into(&mut self, from: Zone, to: Zone) -> Result<EntityId> {
        let entity = self.draw(from)?;
        self.put(entity, to);
        debug!("{entity} moved from {from} to {to}");
        Ok(entity)
    }

    /// Move a specific card from `from` to `to`.
    ///
    /// Either both the removal and the insertion happen, or neither does.
    pub fn transfer(&mut self, entity: EntityId, from: Zone, to: Zone) -> Result<()> {
        self.take(entity, from)?;
        self.put(entity, to);
        debug!("{entity} moved from {from} to {to}");
        Ok(())
    }

    /// Shuffle a zone in place.
    pub fn shuffle(&mut self, zone: Zone, shuffler: &mut dyn Shuffler) {
        if let Some(order) = self.zone_order.get_mut(&zone) {
            let mut cards: Vec<EntityId> = order.iter().copied().collect();
            shuffler.shuffle(&mut cards);
            *order = cards.into_iter().collect();
        }
    }

    /// Move every card of `from` onto `to`, bottom card first.
    ///
    /// Returns the number of cards moved.
    pub fn move_all(&mut self, from: Zone, to: Zone) -> usize {
        let Some(cards) = self.zone_order.remove(&from) else {
            return 0;
        };

        let moved = cards.len();
        for entity in cards {
            self.locations.insert(entity, to);
            self.zone_order.entry(to).or_default().push_back(entity);
        }
        moved
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn zone_of(&self, entity: EntityId) -> Option<Zone> {
        self.locations.get(&entity).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, entity: EntityId, zone: Zone) -> bool {
        self.locations.get(&entity) == Some(&zone)
    }

    /// Cards in a zone, bottom first.
    pub fn cards(&self, zone: Zone) -> impl Iterator<Item = EntityId> + '_ {
        self.zone_order.get(&zone).into_iter().flatten().copied()
    }

    /// Snapshot of a zone's cards, bottom first.
    #[must_use]
    pub fn cards_vec(&self, zone: Zone) -> Vec<EntityId> {
        self.cards(zone).collect()
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.zone_order.get(&zone).map_or(0, Vector::len)
    }

    #[must_use]
    pub fn is_empty(&self, zone: Zone) -> bool {
        self.zone_size(zone) == 0
    }

    /// Top card of a zone (last in order).
    #[must_use]
    pub fn top_card(&self, zone: Zone) -> Option<EntityId> {
        self.zone_order.get(&zone)?.last().copied()
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager tracks an entity at all.
    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.locations.contains_key(&entity)
    }

    /// Check that location tags and zone orders describe the same placement:
    /// each tracked card appears exactly once, in the order of its tagged zone.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut listed = 0;
        for (&zone, order) in &self.zone_order {
            for &entity in order {
                if self.locations.get(&entity) != Some(&zone) {
                    return false;
                }
                listed += 1;
            }
        }
        listed == self.locations.len()
    }
}

fn require(zone: Zone, discipline: ZoneDiscipline) -> Result<()> {
    if zone.discipline() == discipline {
        Ok(())
    } else {
        Err(GameError::WrongDiscipline { zone, discipline: zone.discipline() })
    }
}
