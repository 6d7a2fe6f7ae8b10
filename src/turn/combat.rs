//! Attack resolution.
//!
//! An attack spends the pool's damage against one opponent in a fixed
//! order of phases:
//!
//! 1. `Outposts`: destroy outposts the damage can pay for, one at a time.
//! 2. `Bases`: entered only once every outpost is gone. The attacker
//!    confirms each base destruction.
//! 3. `Health`: whatever damage is left comes off the opponent's health.
//!
//! Any standing outpost ends the attack after the first phase, even one
//! the damage could never destroy.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::context::TurnContext;
use crate::core::{EntityId, PlayerId};
use crate::decision::{choose_card, choose_opponent, DecisionProvider};
use crate::error::{GameError, Result};
use crate::zones::Zone;

/// States of the attack state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackPhase {
    Outposts,
    Bases,
    Health,
    Done,
}

/// What an attack did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    /// The attacked opponent; `None` if there was no damage to attack with.
    pub target: Option<PlayerId>,
    /// Outposts destroyed, in destruction order.
    pub destroyed_outposts: Vec<EntityId>,
    /// Bases destroyed, in destruction order.
    pub destroyed_bases: Vec<EntityId>,
    /// Damage subtracted from the target's health.
    pub health_damage: i64,
    /// Every phase entered, ending with `Done`.
    pub phases: SmallVec<[AttackPhase; 4]>,
}

impl AttackReport {
    fn new(target: Option<PlayerId>) -> Self {
        Self {
            target,
            destroyed_outposts: Vec::new(),
            destroyed_bases: Vec::new(),
            health_damage: 0,
            phases: SmallVec::new(),
        }
    }

    fn enter(&mut self, phase: AttackPhase) {
        debug!("attack on {:?}: {phase:?}", self.target);
        self.phases.push(phase);
    }

    /// Last phase entered before `Done`, or `Done` if none was.
    #[must_use]
    pub fn furthest_phase(&self) -> AttackPhase {
        self.phases
            .iter()
            .rev()
            .copied()
            .find(|&phase| phase != AttackPhase::Done)
            .unwrap_or(AttackPhase::Done)
    }

    /// Whether the attack got past the outposts.
    #[must_use]
    pub fn breached(&self) -> bool {
        self.phases.contains(&AttackPhase::Bases)
    }
}

impl TurnContext<'_> {
    /// Select an opponent and attack them with the pool's damage.
    ///
    /// Without damage no opponent is asked for and the attack is a no-op.
    pub fn attack(&mut self, decider: &mut dyn DecisionProvider) -> Result<AttackReport> {
        if self.pool.damage <= 0 {
            let mut report = AttackReport::new(None);
            report.enter(AttackPhase::Done);
            return Ok(report);
        }
        let target = choose_opponent(decider, self.player, &self.opponents)?;
        self.resolve_attack(target, decider)
    }

    /// Attack `target` with the pool's damage.
    ///
    /// `target` must be one of this turn's opponents. Damage spent on outposts and bases is subtracted from the pool; the
    /// remainder dealt to health empties it.
    pub fn resolve_attack(
        &mut self,
        target: PlayerId,
        decider: &mut dyn DecisionProvider,
    ) -> Result<AttackReport> {
        self.state.player(target)?;
        if !self.opponents.contains(&target) {
            return Err(GameError::NotAnOpponent { player: self.player, target });
        }
        let mut report = AttackReport::new(Some(target));

        if self.pool.damage <= 0 {
            report.enter(AttackPhase::Done);
            return Ok(report);
        }

        report.enter(AttackPhase::Outposts);
        loop {
            let destroyable = self.destroyable(Zone::Outposts(target))?;
            if destroyable.is_empty() {
                break;
            }
            let (outpost, hp) = self.pick_target(&destroyable, decider)?;
            self.pool.damage -= hp;
            self.state.destroy_outpost(target, outpost)?;
            debug!("{} destroyed outpost {outpost}, {} damage left", self.player, self.pool.damage);
            report.destroyed_outposts.push(outpost);
        }

        if self.pool.damage <= 0 || !self.state.zones.is_empty(Zone::Outposts(target)) {
            report.enter(AttackPhase::Done);
            return Ok(report);
        }

        report.enter(AttackPhase::Bases);
        let prompt = format!("Destroy a base of {target}?");
        while self.pool.damage > 0 {
            let destroyable = self.destroyable(Zone::Bases(target))?;
            if destroyable.is_empty() || !decider.confirm(self.player, &prompt) {
                break;
            }
            let (base, hp) = self.pick_target(&destroyable, decider)?;
            self.pool.damage -= hp;
            self.state.destroy_base(target, base)?;
            debug!("{} destroyed base {base}, {} damage left", self.player, self.pool.damage);
            report.destroyed_bases.push(base);
        }

        report.enter(AttackPhase::Health);
        let damage = std::mem::take(&mut self.pool.damage);
        self.state.player_mut(target)?.health -= damage;
        report.health_damage = damage;
        debug!("{target} took {damage} damage");

        report.enter(AttackPhase::Done);
        Ok(report)
    }

    /// Cards in `zone` whose hit points the pool's damage covers.
    fn destroyable(&self, zone: Zone) -> Result<Vec<EntityId>> {
        let mut destroyable = Vec::new();
        for entity in self.state.zones.cards(zone) {
            if self.hit_points(entity)? <= self.pool.damage {
                destroyable.push(entity);
            }
        }
        Ok(destroyable)
    }

    fn pick_target(
        &self,
        candidates: &[EntityId],
        decider: &mut dyn DecisionProvider,
    ) -> Result<(EntityId, i64)> {
        let card = choose_card(decider, &*self.state, self.player, candidates)?;
        Ok((card, self.hit_points(card)?))
    }

    fn hit_points(&self, entity: EntityId) -> Result<i64> {
        let hp = self.state.definition(entity)?.hp().unwrap_or(0);
        Ok(i64::from(hp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, CardRegistry, Faction};
    use crate::core::{GameState, TableConfig};
    use crate::decision::{FirstChoice, ScriptedDecisions};

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn table() -> GameState {
        let registry: CardRegistry = [
            CardDefinition::outpost(CardId::new(3), "Picket", 2, Faction::Empire, 3),
            CardDefinition::station(CardId::new(4), "Depot", 3, Faction::Techno, 4),
            CardDefinition::outpost(CardId::new(5), "Bastion", 6, Faction::Empire, 5),
        ]
        .into_iter()
        .collect();
        GameState::new(2, TableConfig::default(), registry)
    }

    #[test]
    fn test_undefended_goes_straight_to_health() {
        let mut state = table();
        let mut ctx = TurnContext::new(&mut state, P0).unwrap();
        ctx.pool.damage = 6;

        let report = ctx.attack(&mut FirstChoice).unwrap();

        assert_eq!(report.target, Some(P1));
        assert_eq!(report.health_damage, 6);
        assert_eq!(
            report.phases.as_slice(),
            &[
                AttackPhase::Outposts,
                AttackPhase::Bases,
                AttackPhase::Health,
                AttackPhase::Done
            ]
        );
        assert_eq!(ctx.pool.damage, 0);
        assert_eq!(ctx.state.health(P1), Ok(44));
    }

    #[test]
    fn test_zero_damage_is_a_no_op() {
        let mut state = table();
        state.add_card(CardId::new(4), Zone::Bases(P1)).unwrap();
        let mut ctx = TurnContext::new(&mut state, P0).unwrap();

        let report = ctx.attack(&mut FirstChoice).unwrap();

        assert_eq!(report.target, None);
        assert_eq!(report.phases.as_slice(), &[AttackPhase::Done]);
        assert_eq!(report.furthest_phase(), AttackPhase::Done);
        assert_eq!(ctx.state.health(P1), Ok(50));
        assert_eq!(ctx.state.zones.zone_size(Zone::Bases(P1)), 1);
    }

    #[test]
    fn test_declining_base_spares_it() {
        let mut state = table();
        let base = state.add_card(CardId::new(4), Zone::Bases(P1)).unwrap();
        let mut ctx = TurnContext::new(&mut state, P0).unwrap();
        ctx.pool.damage = 5;
        let mut script = ScriptedDecisions::new().confirm(false);

        let report = ctx.resolve_attack(P1, &mut script).unwrap();

        assert!(report.destroyed_bases.is_empty());
        assert!(report.breached());
        assert_eq!(report.health_damage, 5);
        assert!(ctx.state.zones.is_in_zone(base, Zone::Bases(P1)));
        assert_eq!(script.prompts(), &["Destroy a base of Player 1?".to_string()]);
    }

    #[test]
    fn test_base_too_strong_is_never_offered() {
        let mut state = table();
        state.add_card(CardId::new(4), Zone::Bases(P1)).unwrap();
        let mut ctx = TurnContext::new(&mut state, P0).unwrap();
        ctx.pool.damage = 3;
        let mut script = ScriptedDecisions::new();

        let report = ctx.resolve_attack(P1, &mut script).unwrap();

        assert!(script.prompts().is_empty());
        assert_eq!(report.health_damage, 3);
    }

    #[test]
    fn test_standing_outpost_blocks() {
        let mut state = table();
        let picket = state.add_card(CardId::new(3), Zone::Outposts(P1)).unwrap();
        let bastion = state.add_card(CardId::new(5), Zone::Outposts(P1)).unwrap();
        let mut ctx = TurnContext::new(&mut state, P0).unwrap();
        ctx.pool.damage = 7;

        let report = ctx.resolve_attack(P1, &mut FirstChoice).unwrap();

        // Picket falls (7 -> 4), Bastion (hp 5) holds.
        assert_eq!(report.destroyed_outposts, vec![picket]);
        assert_eq!(report.furthest_phase(), AttackPhase::Outposts);
        assert!(!report.breached());
        assert_eq!(ctx.pool.damage, 4);
        assert!(ctx.state.zones.is_in_zone(bastion, Zone::Outposts(P1)));
        assert_eq!(ctx.state.health(P1), Ok(50));
    }

    #[test]
    fn test_unknown_target() {
        let mut state = table();
        let mut ctx = TurnContext::new(&mut state, P0).unwrap();
        ctx.pool.damage = 1;

        assert_eq!(
            ctx.resolve_attack(PlayerId::new(7), &mut FirstChoice),
            Err(GameError::UnknownPlayer(PlayerId::new(7)))
        );
    }

    #[test]
    fn test_zero_damage_needs_no_opponent() {
        let mut state = table();
        let mut ctx = TurnContext::with_opponents(&mut state, P0, []).unwrap();
        let mut script = ScriptedDecisions::new();

        let report = ctx.attack(&mut script).unwrap();

        assert_eq!(report.target, None);
        assert_eq!(report.phases.as_slice(), &[AttackPhase::Done]);
        assert!(script.prompts().is_empty());
    }

    #[test]
    fn test_cannot_attack_self() {
        let mut state = table();
        state.add_card(CardId::new(4), Zone::Bases(P0)).unwrap();
        let mut ctx = TurnContext::new(&mut state, P0).unwrap();
        ctx.pool.damage = 6;

        assert_eq!(
            ctx.resolve_attack(P0, &mut FirstChoice),
            Err(GameError::NotAnOpponent { player: P0, target: P0 })
        );
        assert_eq!(ctx.pool.damage, 6);
        assert_eq!(ctx.state.health(P0), Ok(50));
        assert_eq!(ctx.state.zones.zone_size(Zone::Bases(P0)), 1);
    }

    #[test]
    fn test_no_opponents() {
        let mut state = table();
        let mut ctx = TurnContext::with_opponents(&mut state, P0, []).unwrap();
        ctx.pool.damage = 1;

        assert_eq!(
            ctx.attack(&mut FirstChoice),
            Err(GameError::SelectionOutOfRange { what: "opponent", len: 0 })
        );
    }
}
