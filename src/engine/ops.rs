//! Operations: influence, coups, realignments, the space race and the
//! dice-driven event procedures (wars, Olympics, Summit, traps).
//!
//! Every random outcome arrives as a Neutral dice request; the resolve
//! functions here only ever see the rolled values.

use super::scoring::{score_region, RegionStatus};
use super::Game;
use crate::core::{Side, SideMap};
use crate::effects::hooks::{
    coup_after, coup_ops, coup_roll, coup_shield, influence_bonus_regions, influence_forbidden_regions,
    realign_roll, realign_shield, CoupEffects,
};
use crate::effects::EffectTag;
use crate::input::{InputKind, InputOption, InputRequest};
use crate::map::data::{CUBA, TURKEY, WEST_GERMANY};
use crate::map::{in_any, CountryId, CountrySet, Region};
use crate::stack::{Callback, CoupPlan, DiceUse, InfluenceEdit, InfluencePick, RealignPlan, Stage, WarPlan};

impl Game {
    // =========================================================================
    // Influence
    // =========================================================================

    /// Spend `ops` operations points on influence.
    pub(crate) fn ops_influence(&mut self, side: Side, ops: u32) {
        let baskets = &self.state.baskets;
        let bonus = influence_bonus_regions(baskets, side);
        let forbidden = influence_forbidden_regions(baskets, side);
        let reps = ops + bonus.len() as u32;
        let map = &self.state.map;
        // Placing outside a bonus region forfeits that region's extra point.
        let countries: Vec<_> = CountryId::all()
            .filter(|&c| !in_any(c, &forbidden) && map.can_place_influence(c, side, reps))
            .filter(|&c| {
                let lost = bonus.iter().filter(|&&r| !c.in_region(r)).count() as u32;
                map.placement_cost(c, side) + lost <= reps
            })
            .collect();
        let request = InputRequest::new(
            side,
            InputKind::SelectCountry,
            format!("Place {reps} influence"),
            countries.into_iter().map(InputOption::Country),
            Callback::OpsInfluence { side, bonus },
        )
        .with_reps(reps)
        .with_unit("influence");
        self.set_request(request);
    }

    /// Ask for the countries of an event's influence change.
    pub(crate) fn influence_pick(&mut self, pick: InfluencePick) {
        let map = &self.state.map;
        let target = pick.target;
        let eligible = |c: CountryId| match pick.edit {
            InfluenceEdit::Add(_) => true,
            InfluenceEdit::Remove(_) | InfluenceEdit::RemoveAll | InfluenceEdit::Double => {
                map.influence(c, target) > 0
            }
            InfluenceEdit::MatchOpponent => map.influence(c, target.opp()) > map.influence(c, target),
        };
        let countries: Vec<_> = pick.countries.iter().filter(|&c| !c.is_superpower() && eligible(c)).collect();
        let mut request = InputRequest::new(
            pick.chooser,
            InputKind::SelectCountry,
            pick.prompt,
            countries.into_iter().map(InputOption::Country),
            Callback::Influence { target, edit: pick.edit },
        )
        .with_reps(pick.reps)
        .with_unit("influence");
        if let Some(max) = pick.max_per_country {
            request = request.with_max_per_option(max);
        }
        if let Some(label) = pick.stop {
            request = request.with_stop(label);
        }
        self.set_request(request);
    }

    /// Apply one edit to `side`'s influence in `country`. Returns the
    /// influence left there.
    pub(crate) fn apply_edit(&mut self, country: CountryId, side: Side, edit: InfluenceEdit) -> u32 {
        let map = &mut self.state.map;
        match edit {
            InfluenceEdit::Add(n) => map.add_influence(country, side, n),
            InfluenceEdit::Remove(n) => {
                map.remove_influence(country, side, n);
            }
            InfluenceEdit::RemoveAll => map.set_influence(country, side, 0),
            InfluenceEdit::MatchOpponent => {
                let level = map.influence(country, side).max(map.influence(country, side.opp()));
                map.set_influence(country, side, level);
            }
            InfluenceEdit::Double => {
                let level = map.influence(country, side) * 2;
                map.set_influence(country, side, level);
            }
        }
        map.influence(country, side)
    }

    // =========================================================================
    // Coups
    // =========================================================================

    pub(crate) fn coup_target(&mut self, plan: CoupPlan) {
        let side = plan.side;
        let defcon = if plan.free { 5 } else { self.state.defcon };
        let shield = coup_shield(&self.state.baskets, side, &self.state.map);
        let map = &self.state.map;
        let countries: Vec<_> = CountryId::all()
            .filter(|&c| map.can_coup(c, side, defcon, shield))
            .filter(|&c| plan.targets.map_or(true, |t| t.contains(c)))
            .collect();
        let prompt = format!("Choose a coup target ({} ops)", plan.ops);
        let optional = plan.optional;
        let mut request = InputRequest::new(
            side,
            InputKind::SelectCountry,
            prompt,
            countries.into_iter().map(InputOption::Country),
            Callback::CoupTarget(plan),
        );
        if optional {
            request = request.with_stop("Skip the coup");
        }
        self.set_request(request);
    }

    /// Countries where `side` can remove 2 influence to end an opposing
    /// Cuban Missile Crisis.
    pub(crate) fn crisis_exits(&self, side: Side) -> Vec<CountryId> {
        let candidates: &[CountryId] = match side {
            Side::Ussr => &[CUBA],
            _ => &[WEST_GERMANY, TURKEY],
        };
        candidates
            .iter()
            .copied()
            .filter(|&c| self.state.map.influence(c, side) >= 2)
            .collect()
    }

    /// Whether a coup by `side` would start the opposing Cuban Missile
    /// Crisis and the side can still defuse it.
    pub(crate) fn crisis_pending(&self, side: Side) -> bool {
        self.state.baskets.has(side.opp(), EffectTag::CubanMissileCrisis) && !self.crisis_exits(side).is_empty()
    }

    pub(crate) fn crisis_defuse(&mut self, side: Side) {
        let options = self
            .crisis_exits(side)
            .into_iter()
            .map(|c| {
                let stages = vec![
                    Stage::EditInfluence(c, side, InfluenceEdit::Remove(2)),
                    Stage::RemoveEffect(side.opp(), EffectTag::CubanMissileCrisis),
                ];
                (format!("Remove 2 influence from {c}"), stages)
            })
            .collect();
        self.choose_or_stop(side, "Defuse the Cuban Missile Crisis?", options, Some("Keep the crisis".to_string()));
    }

    pub(crate) fn resolve_coup(&mut self, plan: CoupPlan, country: CountryId, roll: u8) {
        let side = plan.side;
        let baskets = &self.state.baskets;
        let ops = (plan.ops as i32 + coup_ops(baskets, side, country)).max(0) as u32;
        let modifier = coup_roll(baskets, side, country);
        let mut effects = coup_after(baskets, side, country);
        if plan.free {
            effects = effects.merge(CoupEffects { no_milops: true, ..CoupEffects::default() });
        }
        if effects.defcon_one {
            tracing::info!(target: "cold_war::ops", side = %side, country = %country, "coup.missile_crisis");
            self.nuclear_war(side);
            return;
        }

        let outcome = self.state.map.coup(country, side, ops, roll, modifier);
        tracing::info!(
            target: "cold_war::ops",
            side = %side,
            country = %country,
            roll,
            ops,
            modifier,
            margin = outcome.margin,
            removed = outcome.removed,
            added = outcome.added,
            "coup.resolved"
        );
        if !effects.no_milops {
            self.change_milops(side, ops as u8);
        }
        if country.is_battleground() && !effects.no_defcon_bg {
            self.change_defcon(-1);
        }
        self.change_vp(effects.vp);

        if plan.second_coup && outcome.removed > 0 {
            let mut targets = plan.targets.unwrap_or_default();
            targets.remove(country);
            let again = CoupPlan {
                targets: Some(targets),
                second_coup: false,
                crisis_checked: false,
                ..plan
            }
            .optional();
            self.push(Stage::Coup(again));
        }
    }

    // =========================================================================
    // Realignments
    // =========================================================================

    pub(crate) fn realign_target(&mut self, mut plan: RealignPlan) {
        if plan.reps == 0 {
            if plan.bonus.is_empty() || plan.bonus_granted {
                return;
            }
            let regions = std::mem::take(&mut plan.bonus);
            let inside: CountrySet = CountryId::all().filter(|&c| in_any(c, &regions)).collect();
            let targets = plan.targets.map_or(inside, |t| t.iter().filter(|&c| inside.contains(c)).collect());
            plan.targets = Some(targets);
            plan.bonus_granted = true;
            plan.reps = 1;
        }
        let side = plan.side;
        let defcon = if plan.free { 5 } else { self.state.defcon };
        let shield = realign_shield(&self.state.baskets, side, &self.state.map);
        let map = &self.state.map;
        let countries: Vec<_> = CountryId::all()
            .filter(|&c| map.can_realign(c, side, defcon, shield))
            .filter(|&c| plan.targets.map_or(true, |t| t.contains(c)))
            .collect();
        let prompt = format!("Choose a realignment target ({} left)", plan.reps);
        let request = InputRequest::new(
            side,
            InputKind::SelectCountry,
            prompt,
            countries.into_iter().map(InputOption::Country),
            Callback::RealignTarget(plan),
        )
        .with_stop("Stop realigning");
        self.set_request(request);
    }

    /// `rolls` holds the USSR die, then the US die.
    pub(crate) fn resolve_realign(&mut self, country: CountryId, rolls: [u8; 2]) {
        let dice = SideMap::new(|s| rolls[s.index()]);
        let extra = SideMap::new(|s| realign_roll(&self.state.baskets, s));
        let outcome = self.state.map.realign(country, dice, extra);
        tracing::info!(
            target: "cold_war::ops",
            country = %country,
            ussr = outcome.totals.0,
            us = outcome.totals.1,
            loser = ?outcome.loser,
            removed = outcome.removed,
            "realign.resolved"
        );
    }

    // =========================================================================
    // Space race
    // =========================================================================

    pub(crate) fn space(&mut self, side: Side) {
        self.state.space_attempts[side] += 1;
        self.roll(DiceUse::Space(side), format!("{side} space race roll"));
    }

    fn resolve_space(&mut self, side: Side, roll: u8) {
        let needed = self.space_roll_needed(side);
        let success = roll <= needed;
        tracing::info!(target: "cold_war::ops", side = %side, roll, needed, success, "space.attempt");
        if success {
            self.change_space(side, 1);
        }
    }

    // =========================================================================
    // Dice-driven event procedures
    // =========================================================================

    fn resolve_war(&mut self, plan: WarPlan, roll: u8) {
        let (side, target) = (plan.side, plan.target);
        let opp = side.opp();
        let map = &self.state.map;
        let mut modifier = target
            .adjacent()
            .iter()
            .filter(|&&n| !n.is_superpower() && map.controls(n, opp))
            .count() as i32;
        if plan.count_target && map.controls(target, opp) {
            modifier += 1;
        }
        let success = i32::from(roll) - modifier >= plan.threshold;
        tracing::info!(target: "cold_war::ops", side = %side, country = %target, roll, modifier, success, "war.resolved");
        self.change_milops(side, plan.milops);
        if success {
            let taken = self.state.map.influence(target, opp);
            self.state.map.set_influence(target, opp, 0);
            self.state.map.add_influence(target, side, taken);
            self.award_vp(side, plan.vp);
        }
    }

    /// `rolls` holds the sponsor's die, then the opponent's.
    fn resolve_olympics(&mut self, sponsor: Side, rolls: [u8; 2]) {
        let sponsor_total = rolls[0] + 2;
        let opponent_total = rolls[1];
        tracing::info!(target: "cold_war::ops", sponsor = %sponsor, sponsor_total, opponent_total, "olympics.resolved");
        match sponsor_total.cmp(&opponent_total) {
            std::cmp::Ordering::Equal => self.push(Stage::Olympics(sponsor)),
            std::cmp::Ordering::Greater => self.award_vp(sponsor, 2),
            std::cmp::Ordering::Less => self.award_vp(sponsor.opp(), 2),
        }
    }

    /// `rolls` holds the USSR die, then the US die.
    fn resolve_summit(&mut self, rolls: [u8; 2]) {
        let totals = SideMap::new(|side| {
            let strong = Region::SCORED
                .into_iter()
                .filter(|&r| score_region(&self.state, r, false).status[side] >= RegionStatus::Domination)
                .count() as u8;
            rolls[side.index()] + strong
        });
        tracing::info!(target: "cold_war::ops", ussr = totals[Side::Ussr], us = totals[Side::Us], "summit.resolved");
        let winner = match totals[Side::Ussr].cmp(&totals[Side::Us]) {
            std::cmp::Ordering::Greater => Side::Ussr,
            std::cmp::Ordering::Less => Side::Us,
            std::cmp::Ordering::Equal => return,
        };
        self.award_vp(winner, 2);
        let options = vec![
            ("Improve DEFCON".to_string(), vec![Stage::ChangeDefcon(1)]),
            ("Degrade DEFCON".to_string(), vec![Stage::ChangeDefcon(-1)]),
            ("Leave DEFCON".to_string(), Vec::new()),
        ];
        self.choose(winner, "Move DEFCON one step?", options);
    }

    fn resolve_trap(&mut self, side: Side, roll: u8) {
        let tag = match side {
            Side::Us => EffectTag::Quagmire,
            _ => EffectTag::BearTrap,
        };
        let escaped = roll <= 4;
        tracing::info!(target: "cold_war::ops", side = %side, roll, escaped, "trap.roll");
        if escaped {
            self.state.baskets.remove(side, tag);
        }
    }

    /// Apply a completed dice request.
    pub(crate) fn resolve_dice(&mut self, purpose: DiceUse, rolls: &[u8]) {
        let die = |i: usize| rolls.get(i).copied().unwrap_or(1);
        match purpose {
            DiceUse::Coup(plan, country) => self.resolve_coup(plan, country, die(0)),
            DiceUse::Realign(_, country) => self.resolve_realign(country, [die(0), die(1)]),
            DiceUse::Space(side) => self.resolve_space(side, die(0)),
            DiceUse::War(plan) => self.resolve_war(plan, die(0)),
            DiceUse::Olympics(sponsor) => self.resolve_olympics(sponsor, [die(0), die(1)]),
            DiceUse::Summit => self.resolve_summit([die(0), die(1)]),
            DiceUse::Trap(side) => self.resolve_trap(side, die(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::map::data::*;
    use crate::map::GameMap;

    fn game() -> Game {
        let mut game = Game::new(GameConfig::new(9).with_autopilot(false));
        game.state.map = GameMap::new();
        game.state.ar = 1;
        game
    }

    #[test]
    fn test_ops_influence_lists_only_affordable_countries() {
        let mut game = game();
        game.state.baskets.add(Side::Ussr, EffectTag::VietnamRevolts);
        game.state.map.set_influence(IRAN, Side::Us, 3);
        game.state.map.set_influence(IRAN, Side::Ussr, 1);
        game.state.map.set_influence(VIETNAM, Side::Ussr, 1);
        game.state.map.set_influence(SYRIA, Side::Ussr, 1);

        // One op plus the Southeast Asia point.
        game.ops_influence(Side::Ussr, 1);
        let request = game.pending_request().unwrap();
        assert_eq!(request.reps(), 2);
        let options = request.available_options();
        assert!(!options.contains(&InputOption::Country(IRAN)));
        assert!(options.contains(&InputOption::Country(SYRIA)));
        assert!(options.contains(&InputOption::Country(VIETNAM)));

        for option in options {
            assert!(game.preview(option.clone()).is_ok(), "{option} was listed but refused");
        }
    }

    #[test]
    fn test_coup_accounting_and_tracks() {
        let mut game = game();
        game.state.map.set_influence(IRAN, Side::Us, 3);
        game.state.phasing = Side::Ussr;
        game.resolve_coup(CoupPlan::new(Side::Ussr, 3), IRAN, 5);
        assert_eq!(game.state.map.influence(IRAN, Side::Us), 0);
        assert_eq!(game.state.map.influence(IRAN, Side::Ussr), 1);
        assert_eq!(game.state.defcon, 4);
        assert_eq!(game.state.milops[Side::Ussr], 3);
    }

    #[test]
    fn test_free_coup_skips_milops() {
        let mut game = game();
        game.state.map.set_influence(ANGOLA, Side::Us, 1);
        game.resolve_coup(CoupPlan::new(Side::Ussr, 2).free(), ANGOLA, 4);
        assert_eq!(game.state.milops[Side::Ussr], 0);
        assert_eq!(game.state.map.influence(ANGOLA, Side::Ussr), 3);
    }

    #[test]
    fn test_missile_crisis_coup_loses() {
        let mut game = game();
        game.state.map.set_influence(ANGOLA, Side::Ussr, 1);
        game.state.baskets.add(Side::Ussr, EffectTag::CubanMissileCrisis);
        game.resolve_coup(CoupPlan::new(Side::Us, 2), ANGOLA, 6);
        assert!(game.result().unwrap().is_winner(Side::Ussr));
    }

    #[test]
    fn test_crisis_exits() {
        let mut game = game();
        game.state.baskets.add(Side::Us, EffectTag::CubanMissileCrisis);
        assert!(!game.crisis_pending(Side::Ussr));
        game.state.map.set_influence(CUBA, Side::Ussr, 2);
        assert!(game.crisis_pending(Side::Ussr));
        assert_eq!(game.crisis_exits(Side::Ussr), vec![CUBA]);
    }

    #[test]
    fn test_war_replaces_influence() {
        let mut game = game();
        game.state.map.set_influence(SOUTH_KOREA, Side::Us, 2);
        game.state.map.set_influence(JAPAN, Side::Us, 4);
        // Japan is US-controlled and adjacent: 5 - 1 = 4 wins.
        game.resolve_war(WarPlan::new(Side::Ussr, SOUTH_KOREA), 5);
        assert_eq!(game.state.map.influence(SOUTH_KOREA, Side::Us), 0);
        assert_eq!(game.state.map.influence(SOUTH_KOREA, Side::Ussr), 2);
        assert_eq!(game.state.vp, 2);
        assert_eq!(game.state.milops[Side::Ussr], 2);
    }

    #[test]
    fn test_failed_war_still_counts_milops() {
        let mut game = game();
        game.state.map.set_influence(SOUTH_KOREA, Side::Us, 2);
        game.resolve_war(WarPlan::new(Side::Ussr, SOUTH_KOREA), 3);
        assert_eq!(game.state.map.influence(SOUTH_KOREA, Side::Us), 2);
        assert_eq!(game.state.vp, 0);
        assert_eq!(game.state.milops[Side::Ussr], 2);
    }

    #[test]
    fn test_olympics_tie_rerolls() {
        let mut game = game();
        game.resolve_olympics(Side::Us, [2, 4]);
        assert_eq!(game.stack.peek(), Some(&Stage::Olympics(Side::Us)));
        game.resolve_olympics(Side::Us, [3, 4]);
        assert_eq!(game.state.vp, -2);
    }

    #[test]
    fn test_space_roll() {
        let mut game = game();
        game.resolve_space(Side::Us, 4);
        assert_eq!(game.state.space[Side::Us], 0);
        game.resolve_space(Side::Us, 3);
        assert_eq!(game.state.space[Side::Us], 1);
    }

    #[test]
    fn test_trap_escape() {
        let mut game = game();
        game.state.baskets.add(Side::Us, EffectTag::Quagmire);
        game.resolve_trap(Side::Us, 5);
        assert!(game.state.baskets.has(Side::Us, EffectTag::Quagmire));
        game.resolve_trap(Side::Us, 4);
        assert!(!game.state.baskets.has(Side::Us, EffectTag::Quagmire));
    }

    #[test]
    fn test_apply_edit_variants() {
        let mut game = game();
        game.state.map.set_influence(PANAMA, Side::Us, 2);
        game.state.map.set_influence(PANAMA, Side::Ussr, 3);
        assert_eq!(game.apply_edit(PANAMA, Side::Us, InfluenceEdit::MatchOpponent), 3);
        assert_eq!(game.apply_edit(PANAMA, Side::Ussr, InfluenceEdit::Double), 6);
        assert_eq!(game.apply_edit(PANAMA, Side::Us, InfluenceEdit::Remove(5)), 0);
        assert_eq!(game.apply_edit(PANAMA, Side::Ussr, InfluenceEdit::RemoveAll), 0);
    }
}
