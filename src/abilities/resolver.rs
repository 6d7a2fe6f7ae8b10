//! Ability resolution - applying abilities to a turn.
//!
//! Every side effect goes through the `TurnContext`: either a resource
//! pool counter changes or a card moves between zones using the table's
//! zone-transition operations. Pools apply in declared order and stop at
//! the first error; abilities already applied stay applied.

use log::{debug, trace};

use super::{Ability, AbilityPool};
use crate::decision::{choose_ability, choose_card, choose_opponent, DecisionProvider};
use crate::error::{GameError, Result};
use crate::turn::{Resource, TurnContext};
use crate::zones::Zone;

/// What happened when an ability was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbilityOutcome {
    /// The effect took place.
    Applied,
    /// An optional ability the player chose not to use.
    Declined,
    /// Nothing to act on (empty shop display, no opponents, empty hand).
    Skipped,
}

impl Ability {
    /// Apply this ability for the acting player of `ctx`.
    pub fn apply(
        &self,
        ctx: &mut TurnContext<'_>,
        decider: &mut dyn DecisionProvider,
    ) -> Result<AbilityOutcome> {
        trace!("{} resolves \"{self}\"", ctx.player);

        if self.is_optional() && !decider.confirm(ctx.player, &self.prompt()) {
            debug!("{} declined \"{self}\"", ctx.player);
            return Ok(AbilityOutcome::Declined);
        }

        match self {
            Ability::PoolDamage(n) => ctx.pool.add(Resource::Damage, *n),
            Ability::PoolHeal(n) => ctx.pool.add(Resource::Heal, *n),
            Ability::PoolMoney(n) => ctx.pool.add(Resource::Currency, *n),

            Ability::ShopScrap => {
                let Some(card) = pick_from_display(ctx, decider)? else {
                    return Ok(AbilityOutcome::Skipped);
                };
                ctx.state.scrap_from_shop(card)?;
            }

            Ability::ShopBuy { max_price } => {
                let Some(card) = pick_from_display(ctx, decider)? else {
                    return Ok(AbilityOutcome::Skipped);
                };
                let cost = ctx.state.definition(card)?.cost;
                if cost > *max_price {
                    return Err(GameError::PriceExceeded {
                        cost,
                        max_price: *max_price,
                    });
                }
                ctx.state.buy_from_shop(card, ctx.player)?;
            }

            Ability::ShopDiscardAndDamage => {
                let Some(card) = pick_from_display(ctx, decider)? else {
                    return Ok(AbilityOutcome::Skipped);
                };
                let cost = ctx.state.definition(card)?.cost;
                ctx.state.scrap_from_shop(card)?;
                ctx.pool.add(Resource::Damage, i64::from(cost));
            }

            Ability::OpponentDiscardCard => {
                if ctx.opponents.is_empty() {
                    return Ok(AbilityOutcome::Skipped);
                }
                let target = choose_opponent(decider, ctx.player, &ctx.opponents)?;
                if ctx.state.discard_chosen_card(target, decider)?.is_none() {
                    return Ok(AbilityOutcome::Skipped);
                }
            }

            Ability::DrawThenDiscard => {
                ctx.state.draw_to_hand(ctx.player)?;
                ctx.state.discard_chosen_card(ctx.player, decider)?;
            }
        }

        Ok(AbilityOutcome::Applied)
    }
}

/// Let the acting player pick a shop display card, if there is one.
fn pick_from_display(
    ctx: &mut TurnContext<'_>,
    decider: &mut dyn DecisionProvider,
) -> Result<Option<crate::core::EntityId>> {
    let display = ctx.state.zones.cards_vec(Zone::ShopDisplay);
    if display.is_empty() {
        return Ok(None);
    }
    choose_card(decider, ctx.state, ctx.player, &display).map(Some)
}

impl AbilityPool {
    /// Apply the pool for the acting player of `ctx`.
    ///
    /// `All` applies every ability in order; `OneOf` asks the player to pick
    /// one and fails with `EmptyChoice` if the pool is empty.
    pub fn apply(
        &self,
        ctx: &mut TurnContext<'_>,
        decider: &mut dyn DecisionProvider,
    ) -> Result<Vec<AbilityOutcome>> {
        match self {
            AbilityPool::All(abilities) => {
                let mut outcomes = Vec::with_capacity(abilities.len());
                for ability in abilities {
                    outcomes.push(ability.apply(ctx, decider)?);
                }
                Ok(outcomes)
            }
            AbilityPool::OneOf(abilities) => {
                let ability = choose_ability(decider, ctx.player, abilities)?;
                Ok(vec![ability.apply(ctx, decider)?])
            }
        }
    }
}
