//! Zone identifiers and their properties.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Every place a card can be.
///
/// Player zones are tagged with their owner; the two shop zones are shared.
/// A card that is in none of these has been scrapped or consumed and no
/// longer exists at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    DrawPile(PlayerId),
    DiscardPile(PlayerId),
    Hand(PlayerId),
    Bases(PlayerId),
    Outposts(PlayerId),
    ShopSupply,
    ShopDisplay,
}

/// How cards enter and leave a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneDiscipline {
    /// Push and pop at the top only; supports bulk shuffle-transfer.
    Stack,
    /// Membership by identity; any card may be taken out.
    Set,
}

impl Zone {
    #[must_use]
    pub const fn discipline(self) -> ZoneDiscipline {
        match self {
            Zone::DrawPile(_) | Zone::DiscardPile(_) | Zone::ShopSupply => ZoneDiscipline::Stack,
            Zone::Hand(_) | Zone::Bases(_) | Zone::Outposts(_) | Zone::ShopDisplay => {
                ZoneDiscipline::Set
            }
        }
    }

    /// Owning player, or `None` for the shared shop zones.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Zone::DrawPile(p)
            | Zone::DiscardPile(p)
            | Zone::Hand(p)
            | Zone::Bases(p)
            | Zone::Outposts(p) => Some(p),
            Zone::ShopSupply | Zone::ShopDisplay => None,
        }
    }
}

impl std::fmt::Display for ZoneDiscipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneDiscipline::Stack => write!(f, "stack"),
            ZoneDiscipline::Set => write!(f, "set"),
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::DrawPile(p) => write!(f, "draw pile of {p}"),
            Zone::DiscardPile(p) => write!(f, "discard pile of {p}"),
            Zone::Hand(p) => write!(f, "hand of {p}"),
            Zone::Bases(p) => write!(f, "bases of {p}"),
            Zone::Outposts(p) => write!(f, "outposts of {p}"),
            Zone::ShopSupply => write!(f, "shop supply"),
            Zone::ShopDisplay => write!(f, "shop display"),
        }
    }
}
