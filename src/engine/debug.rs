//! Debug interface: forced state changes and snapshots.
//!
//! None of this is needed to play a match. Tests and tooling use it to set
//! up positions directly and to save and restore a game with `bincode`.

use serde::{Deserialize, Serialize};

use super::Game;
use crate::cards::{catalog, CardId};
use crate::core::{GameConfig, GameRng, GameRngState, GameState, Side};
use crate::error::SnapshotError;
use crate::input::InputRequest;
use crate::map::CountryId;
use crate::rules::GameResult;
use crate::stack::{Stage, StageStack};

/// Everything needed to rebuild a `Game`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    pub state: GameState,
    pub stack: StageStack,
    pub pending: Option<InputRequest>,
    pub suspended: Vec<InputRequest>,
    pub rng: GameRngState,
    pub result: Option<GameResult>,
}

impl Game {
    pub fn debug_set_influence(&mut self, country: CountryId, side: Side, amount: u32) {
        tracing::debug!(target: "cold_war::debug", country = %country, side = %side, amount, "debug.set_influence");
        self.state.map.set_influence(country, side, amount);
    }

    /// Set the VP track. Reaching the victory threshold ends the game.
    pub fn debug_set_vp(&mut self, vp: i32) {
        self.change_vp(vp - self.state.vp);
    }

    pub fn debug_set_defcon(&mut self, defcon: u8) {
        self.set_defcon(defcon);
    }

    /// Fire `card`'s event for `side` right now.
    ///
    /// A pending request is set aside and comes back once the event has
    /// fully resolved.
    pub fn debug_trigger_event(&mut self, card: CardId, side: Side) {
        if self.is_over() {
            return;
        }
        tracing::debug!(target: "cold_war::debug", card = self.card(card).name, side = %side, "debug.trigger_event");
        if let Some(request) = self.pending.take() {
            self.suspended.push(request);
            self.push(Stage::Resume);
        }
        let event = self.card(card).event;
        event(self, side);
        self.advance();
    }

    /// Serialize the whole game.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        let snapshot = Snapshot {
            config: self.config.clone(),
            state: self.state.clone(),
            stack: self.stack.clone(),
            pending: self.pending.clone(),
            suspended: self.suspended.clone(),
            rng: self.rng.state(),
            result: self.result,
        };
        bincode::serialize(&snapshot).map_err(SnapshotError::Encode)
    }

    /// Rebuild a game from `snapshot` output.
    pub fn restore(bytes: &[u8]) -> Result<Game, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        tracing::debug!(target: "cold_war::debug", turn = snapshot.state.turn, "debug.restore");
        Ok(Game {
            rng: GameRng::from_state(&snapshot.rng),
            config: snapshot.config,
            catalog: catalog::shared(),
            state: snapshot.state,
            stack: snapshot.stack,
            pending: snapshot.pending,
            suspended: snapshot.suspended,
            result: snapshot.result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ids::DUCK_AND_COVER;
    use crate::map::data::ANGOLA;

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = Game::new(GameConfig::new(12));
        game.start();
        game.debug_set_influence(ANGOLA, Side::Us, 2);
        let bytes = game.snapshot().unwrap();
        let restored = Game::restore(&bytes).unwrap();
        assert_eq!(restored.state(), game.state());
        assert_eq!(restored.upcoming().count(), game.upcoming().count());
        assert_eq!(
            restored.pending_request().map(|r| r.available_options()),
            game.pending_request().map(|r| r.available_options())
        );
    }

    #[test]
    fn test_restore_rejects_garbage() {
        assert!(matches!(Game::restore(&[1, 2, 3]), Err(SnapshotError::Decode(_))));
    }

    #[test]
    fn test_trigger_event_keeps_pending_request() {
        let mut game = Game::new(GameConfig::new(12));
        game.start();
        let before = game.pending_request().unwrap().prompt.clone();
        game.debug_trigger_event(DUCK_AND_COVER, Side::Us);
        assert_eq!(game.state().defcon, 4);
        assert_eq!(game.state().vp, -1);
        assert_eq!(game.pending_request().unwrap().prompt, before);
    }
}
