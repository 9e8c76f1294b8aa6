//! VP, DEFCON, military operations and the space race.
//!
//! Every track change goes through here so the victory checks run in one
//! place. Once the game has a result, track changes are ignored.

use super::Game;
use crate::core::Side;
use crate::rules::{GameResult, VictoryReason};

/// VP for entering a space box, first and second to arrive.
const SPACE_VP: [(i32, i32); 9] = [(0, 0), (2, 1), (0, 0), (2, 0), (0, 0), (3, 1), (0, 0), (4, 2), (2, 0)];

/// Highest successful roll per current space box.
const SPACE_ROLL: [u8; 8] = [3, 4, 3, 4, 3, 4, 3, 2];

pub(crate) const SPACE_MAX: u8 = 8;
const MILOPS_MAX: u8 = 5;

impl Game {
    // === VP ===

    /// Change the VP track; positive favours the USSR.
    pub(crate) fn change_vp(&mut self, delta: i32) {
        if self.is_over() || delta == 0 {
            return;
        }
        self.state.vp += delta;
        tracing::info!(target: "cold_war::tracks", delta, vp = self.state.vp, "vp.changed");
        if self.state.vp.abs() >= self.config.vp_victory {
            self.end_game(GameResult::by_vp(self.state.vp, VictoryReason::VictoryPoints));
        }
    }

    /// `side` gains `amount` VP.
    pub(crate) fn award_vp(&mut self, side: Side, amount: i32) {
        self.change_vp(amount * side.vp_mult());
    }

    // === DEFCON ===

    /// Move DEFCON by `delta`. Falling below 2 ends the game against the
    /// phasing side.
    pub(crate) fn change_defcon(&mut self, delta: i32) {
        if self.is_over() || delta == 0 {
            return;
        }
        let prev = self.state.defcon;
        let next = (i32::from(prev) + delta).min(5);
        if next < 2 {
            self.nuclear_war(self.state.phasing);
            return;
        }
        self.state.defcon = next as u8;
        tracing::info!(target: "cold_war::tracks", from = prev, to = self.state.defcon, "defcon.changed");
        if prev > 2 && next == 2 && self.state.ar > 0 {
            self.state.defcon_two_this_round = true;
        }
    }

    pub(crate) fn set_defcon(&mut self, value: u8) {
        self.change_defcon(i32::from(value) - i32::from(self.state.defcon));
    }

    /// DEFCON 1: `loser` started the war.
    pub(crate) fn nuclear_war(&mut self, loser: Side) {
        self.state.defcon = 1;
        tracing::info!(target: "cold_war::tracks", loser = %loser, "defcon.nuclear_war");
        self.end_game(GameResult::new(Some(loser.opp()), VictoryReason::NuclearWar));
    }

    // === Military operations ===

    pub(crate) fn change_milops(&mut self, side: Side, amount: u8) {
        if self.is_over() {
            return;
        }
        let track = &mut self.state.milops[side];
        *track = track.saturating_add(amount).min(MILOPS_MAX);
    }

    // === Space race ===

    /// Whether `side` holds the ability of `space_box`: it got there and
    /// the opponent did not.
    pub(crate) fn has_space_ability(&self, side: Side, space_box: u8) -> bool {
        self.state.space[side] >= space_box && self.state.space[side.opp()] < space_box
    }

    /// Whether `side` may attempt the space race with `ops` operations.
    pub(crate) fn can_space(&self, side: Side, ops: u32) -> bool {
        let position = self.state.space[side];
        if position >= SPACE_MAX {
            return false;
        }
        let attempts = if self.has_space_ability(side, 2) { 2 } else { 1 };
        if self.state.space_attempts[side] >= attempts {
            return false;
        }
        let needed = match position {
            0..=3 => 2,
            4..=6 => 3,
            _ => 4,
        };
        ops >= needed
    }

    /// Roll needed to advance from `side`'s current box.
    pub(crate) fn space_roll_needed(&self, side: Side) -> u8 {
        SPACE_ROLL[usize::from(self.state.space[side].min(SPACE_MAX - 1))]
    }

    /// Advance `side` up to `steps` boxes. Only the final box reached
    /// awards VP.
    pub(crate) fn change_space(&mut self, side: Side, steps: u8) {
        if self.is_over() {
            return;
        }
        let before = self.state.space[side];
        let after = before.saturating_add(steps).min(SPACE_MAX);
        if after == before {
            return;
        }
        self.state.space[side] = after;
        let (first, second) = SPACE_VP[usize::from(after)];
        let vp = if self.state.space[side.opp()] < after { first } else { second };
        tracing::info!(target: "cold_war::tracks", side = %side, space = after, vp, "space.advanced");
        self.award_vp(side, vp);
    }

    // === Termination ===

    pub(crate) fn end_game(&mut self, result: GameResult) {
        if self.result.is_some() {
            return;
        }
        tracing::info!(target: "cold_war::engine", result = %result, vp = self.state.vp, turn = self.state.turn, "game.over");
        self.result = Some(result);
        self.pending = None;
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn game() -> Game {
        Game::new(GameConfig::new(1))
    }

    #[test]
    fn test_vp_threshold_ends_game() {
        let mut game = game();
        game.change_vp(-19);
        assert!(!game.is_over());
        game.award_vp(Side::Us, 1);
        let result = game.result().unwrap();
        assert!(result.is_winner(Side::Us));
        assert_eq!(result.reason, VictoryReason::VictoryPoints);
    }

    #[test]
    fn test_defcon_clamps_and_collapses() {
        let mut game = game();
        game.change_defcon(2);
        assert_eq!(game.state.defcon, 5);
        game.state.phasing = Side::Us;
        game.set_defcon(1);
        assert_eq!(game.state.defcon, 1);
        assert!(game.result().unwrap().is_winner(Side::Ussr));
    }

    #[test]
    fn test_defcon_two_flag_only_in_action_rounds() {
        let mut game = game();
        game.state.defcon = 3;
        game.change_defcon(-1);
        assert!(!game.state.defcon_two_this_round);
        game.state.defcon = 3;
        game.state.ar = 2;
        game.change_defcon(-1);
        assert!(game.state.defcon_two_this_round);
    }

    #[test]
    fn test_space_vp_first_and_second() {
        let mut game = game();
        game.change_space(Side::Us, 1);
        assert_eq!(game.state.vp, -2);
        game.change_space(Side::Ussr, 1);
        assert_eq!(game.state.vp, -1);
        // Two steps at once: only box 3 pays.
        game.change_space(Side::Ussr, 2);
        assert_eq!(game.state.space[Side::Ussr], 3);
        assert_eq!(game.state.vp, 1);
    }

    #[test]
    fn test_space_attempt_limits() {
        let mut game = game();
        assert!(game.can_space(Side::Ussr, 2));
        assert!(!game.can_space(Side::Ussr, 1));
        game.state.space_attempts[Side::Ussr] = 1;
        assert!(!game.can_space(Side::Ussr, 4));
        game.state.space[Side::Ussr] = 2;
        assert!(game.can_space(Side::Ussr, 2));
        game.state.space[Side::Ussr] = 7;
        assert!(!game.can_space(Side::Ussr, 3));
        assert_eq!(game.space_roll_needed(Side::Ussr), 2);
    }

    #[test]
    fn test_milops_capped() {
        let mut game = game();
        game.change_milops(Side::Us, 4);
        game.change_milops(Side::Us, 3);
        assert_eq!(game.state.milops[Side::Us], 5);
    }
}
