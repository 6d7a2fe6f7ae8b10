//! Card instances - one per physical card at the table.
//!
//! A `CardInstance` is an arena slot: it ties an `EntityId` to the
//! definition it is a copy of. Its location is kept by the zone manager,
//! never here, so there is exactly one place to update on a transfer.
//!
//! Shop cards have no owner until bought.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::{EntityId, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    pub entity_id: EntityId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// Player whose deck this card belongs to. `None` for shop cards.
    pub owner: Option<PlayerId>,
}

impl CardInstance {
    /// Create a card instance with an owner.
    #[must_use]
    pub fn new(entity_id: EntityId, card_id: CardId, owner: PlayerId) -> Self {
        Self {
            entity_id,
            card_id,
            owner: Some(owner),
        }
    }

    /// Create a neutral card instance (shop stock).
    #[must_use]
    pub fn neutral(entity_id: EntityId, card_id: CardId) -> Self {
        Self {
            entity_id,
            card_id,
            owner: None,
        }
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.owner.is_none()
    }
}
