//! The shop: a face-up display backed by a face-down supply.
//!
//! Both halves are ordinary zones (`Zone::ShopDisplay`, `Zone::ShopSupply`)
//! in the table's zone manager. `Shop` holds the display capacity and the
//! rule that keeps the display full: after every card that leaves it, the
//! top of the supply is revealed until the display is back at capacity or
//! the supply runs out.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::EntityId;
use crate::error::Result;
use crate::zones::{Zone, ZoneManager};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    capacity: usize,
}

impl Shop {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Number of cards the display holds when the supply allows.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cards currently on display.
    #[must_use]
    pub fn display(&self, zones: &ZoneManager) -> Vec<EntityId> {
        zones.cards_vec(Zone::ShopDisplay)
    }

    /// Reveal supply cards until the display is full or the supply is empty.
    ///
    /// Returns the number of cards revealed.
    pub fn replenish(&self, zones: &mut ZoneManager) -> usize {
        let mut revealed = 0;
        while zones.zone_size(Zone::ShopDisplay) < self.capacity
            && !zones.is_empty(Zone::ShopSupply)
        {
            if zones.draw_into(Zone::ShopSupply, Zone::ShopDisplay).is_err() {
                break;
            }
            revealed += 1;
        }
        if zones.zone_size(Zone::ShopDisplay) < self.capacity {
            debug!(
                "shop supply exhausted, display down to {}",
                zones.zone_size(Zone::ShopDisplay)
            );
        }
        revealed
    }

    /// Move a display card to `destination` and refill the display.
    pub fn sell_to(
        &self,
        zones: &mut ZoneManager,
        entity: EntityId,
        destination: Zone,
    ) -> Result<()> {
        zones.transfer(entity, Zone::ShopDisplay, destination)?;
        self.replenish(zones);
        Ok(())
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self::new(5)
    }
}
