//! The turn context threaded through every ability, purchase and attack.

use smallvec::SmallVec;

use super::pool::ResourcePool;
use crate::core::{GameState, PlayerId};
use crate::error::{GameError, Result};

/// Mutable aggregate for one turn: the table, who is acting, who can be
/// targeted, and the turn's resource pool.
///
/// A context exclusively borrows the table for its lifetime, so no two
/// operations can interleave on the same state.
pub struct TurnContext<'a> {
    pub state: &'a mut GameState,
    pub player: PlayerId,
    pub opponents: SmallVec<[PlayerId; 4]>,
    pub pool: ResourcePool,
}

impl<'a> TurnContext<'a> {
    /// Start `player`'s turn with every other seated player as an opponent.
    pub fn new(state: &'a mut GameState, player: PlayerId) -> Result<Self> {
        state.player(player)?;
        let opponents = state.player_ids().filter(|&p| p != player).collect();
        Ok(Self {
            state,
            player,
            opponents,
            pool: ResourcePool::new(),
        })
    }

    /// Start `player`'s turn against an explicit set of opponents.
    pub fn with_opponents(
        state: &'a mut GameState,
        player: PlayerId,
        opponents: impl IntoIterator<Item = PlayerId>,
    ) -> Result<Self> {
        state.player(player)?;
        let opponents: SmallVec<[PlayerId; 4]> = opponents.into_iter().collect();
        if let Some(&unknown) = opponents.iter().find(|&&p| state.player(p).is_err()) {
            return Err(GameError::UnknownPlayer(unknown));
        }
        Ok(Self {
            state,
            player,
            opponents,
            pool: ResourcePool::new(),
        })
    }

    /// Hand the table to the next player with a fresh pool.
    pub fn pass_to(self, player: PlayerId) -> Result<TurnContext<'a>> {
        TurnContext::new(self.state, player)
    }
}
