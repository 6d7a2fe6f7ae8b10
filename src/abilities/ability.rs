//! Ability definitions.
//!
//! Abilities are the effects printed on cards. They are plain data here;
//! `resolver.rs` gives them meaning against a `TurnContext`.

use serde::{Deserialize, Serialize};

/// A single card effect.
///
/// ## Resource pool
///
/// - `PoolDamage`, `PoolHeal`, `PoolMoney`: add to the turn's counters
///
/// ## Shop
///
/// - `ShopScrap`: remove a display card from the game (optional)
/// - `ShopBuy`: take a display card up to a price ceiling for free (optional)
/// - `ShopDiscardAndDamage`: remove a display card and gain its cost as damage
///
/// ## Cards in hand
///
/// - `OpponentDiscardCard`: an opponent discards a card of their choice
/// - `DrawThenDiscard`: draw a card, then discard a card from hand
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    PoolDamage(i64),
    PoolHeal(i64),
    PoolMoney(i64),
    ShopScrap,
    ShopBuy { max_price: u32 },
    ShopDiscardAndDamage,
    OpponentDiscardCard,
    DrawThenDiscard,
}

impl Ability {
    /// Whether the player must agree before this ability does anything.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Ability::ShopScrap | Ability::ShopBuy { .. })
    }

    /// Human-readable rules text.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Ability::PoolDamage(n) => format!("Gain {n} damage"),
            Ability::PoolHeal(n) => format!("Gain {n} heal"),
            Ability::PoolMoney(n) => format!("Gain {n} trade"),
            Ability::ShopScrap => "Scrap a card in the shop".to_string(),
            Ability::ShopBuy { max_price } => {
                format!("Acquire a shop card costing up to {max_price} for free")
            }
            Ability::ShopDiscardAndDamage => {
                "Scrap a card in the shop and gain damage equal to its cost".to_string()
            }
            Ability::OpponentDiscardCard => "Target opponent discards a card".to_string(),
            Ability::DrawThenDiscard => "Draw a card, then discard a card".to_string(),
        }
    }

    /// Question put to the player before an optional ability fires.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("Use \"{}\"?", self.describe())
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
