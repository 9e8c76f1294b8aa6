//! Answers for Neutral requests: dice and random card picks.

use super::Game;
use crate::input::{InputKind, InputOption};

impl Game {
    /// Answer the pending Neutral request: a die roll for dice requests,
    /// otherwise a uniformly random available option.
    pub(crate) fn autopilot_answer(&mut self) -> InputOption {
        let (kind, options) = match self.pending.as_ref() {
            Some(request) => (request.kind, request.available_options()),
            None => panic!("autopilot asked to answer with no request pending"),
        };
        let choice = if kind == InputKind::RollDice {
            Some(InputOption::Roll(self.rng.roll_die())).filter(|roll| options.contains(roll))
        } else {
            self.rng.choose(&options).cloned()
        };
        match choice {
            Some(option) => {
                tracing::debug!(target: "cold_war::autopilot", option = %option, "autopilot.answer");
                option
            }
            None => panic!("autopilot asked to answer a request with no options"),
        }
    }
}
