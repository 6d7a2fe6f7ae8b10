//! Error types for the turn engine.
//!
//! Every fallible operation reports to its immediate caller. The only
//! locally recovered failure is draw-pile exhaustion, which triggers a
//! single reshuffle of the discard pile before giving up.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::{EntityId, PlayerId};
use crate::zones::{Zone, ZoneDiscipline};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot draw from empty {zone}")]
    EmptyZone { zone: Zone },

    #[error("{player} has no cards left in draw or discard pile")]
    NoCardsAvailable { player: PlayerId },

    #[error("{entity} is not in {zone}")]
    NotFound { entity: EntityId, zone: Zone },

    #[error("{zone} is a {discipline} zone")]
    WrongDiscipline { zone: Zone, discipline: ZoneDiscipline },

    #[error("decision provider returned a {what} outside the {len} offered candidates")]
    SelectionOutOfRange { what: &'static str, len: usize },

    #[error("ability choice offered with no abilities")]
    EmptyChoice,

    #[error("card costs {cost}, above the ability's ceiling of {max_price}")]
    PriceExceeded { cost: u32, max_price: u32 },

    #[error("{0} is not at the table")]
    UnknownEntity(EntityId),

    #[error("no card definition registered for {0}")]
    UnknownCard(CardId),

    #[error("{0} is not seated at this table")]
    UnknownPlayer(PlayerId),

    #[error("{target} is not an opponent of {player}")]
    NotAnOpponent { player: PlayerId, target: PlayerId },
}

pub type Result<T> = std::result::Result<T, GameError>;
