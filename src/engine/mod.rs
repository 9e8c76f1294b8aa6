//! The game engine: one match, advanced one answer at a time.
//!
//! ## Flow
//!
//! `Game::start` runs setup stages until the first decision. From then on
//! the caller reads `pending_request`, answers with `submit`, and the
//! engine runs stages until the next decision or the end of the game.
//! Neutral requests (dice, random cards) are answered by the autopilot
//! unless the config turns it off.
//!
//! ```
//! use cold_war_engine::core::{GameConfig, Side};
//! use cold_war_engine::engine::Game;
//!
//! let mut game = Game::new(GameConfig::new(11));
//! game.start();
//!
//! let request = game.pending_request().unwrap();
//! assert_eq!(request.side, Side::Ussr);
//! let first = request.available_options()[0].clone();
//! game.submit(first).unwrap();
//! ```
//!
//! ## Layout
//!
//! - `stages`: dispatch of a popped `Stage`
//! - `tracks`: VP, DEFCON, military ops, space race, termination
//! - `turn`: setup, dealing, headlines, action rounds, end of turn
//! - `play`: card play, events, disposal
//! - `ops`: influence, coups, realignments, space, wars
//! - `scoring`: region scoring
//! - `answer`: callbacks run on answers and on completion
//! - `autopilot`: answers for Neutral requests
//! - `debug`: test hooks and snapshots

mod answer;
mod autopilot;
mod debug;
mod ops;
mod play;
pub mod scoring;
mod stages;
mod tracks;
mod turn;

pub use debug::Snapshot;
pub use scoring::{score_region, RegionScore, RegionStatus};

use std::sync::Arc;

use crate::cards::{catalog, CardDefinition, CardId, CardRegistry};
use crate::cards::ids::CHINA_CARD;
use crate::core::{GameConfig, GameRng, GameState, Pile, Side};
use crate::error::InputError;
use crate::input::{InputKind, InputOption, InputRequest};
use crate::map::GameMap;
use crate::rules::GameResult;
use crate::stack::{Callback, Stage, StageStack};
use crate::view::PlayerView;

/// One match.
///
/// Cloning is cheap: the state uses persistent collections and the card
/// catalog is shared. A clone is a fully independent game, which is how a
/// caller previews an answer before committing to it.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) catalog: Arc<CardRegistry>,
    pub(crate) state: GameState,
    pub(crate) stack: StageStack,
    pub(crate) pending: Option<InputRequest>,
    /// Requests set aside by the debug interface, resumed by `Stage::Resume`.
    pub(crate) suspended: Vec<InputRequest>,
    pub(crate) rng: GameRng,
    pub(crate) result: Option<GameResult>,
}

impl Game {
    /// Create a match with the setup stages queued but not yet run.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut state = GameState::new();
        if config.standard_setup {
            state.map = GameMap::standard();
        }
        let mut stack = StageStack::new();
        stack.push_all([
            Stage::ExpandDeck,
            Stage::Deal(Side::Ussr),
            Stage::StartingInfluence(Side::Ussr),
            Stage::StartingInfluence(Side::Us),
            Stage::HandicapInfluence,
            Stage::Headline,
        ]);
        Self {
            rng: GameRng::new(config.seed),
            config,
            catalog: catalog::shared(),
            state,
            stack,
            pending: None,
            suspended: Vec::new(),
            result: None,
        }
    }

    /// Deal the China Card and run setup until the first decision.
    pub fn start(&mut self) {
        tracing::info!(target: "cold_war::engine", seed = self.config.seed, "game.start");
        self.state.put(Pile::Hand(Side::Ussr), CHINA_CARD);
        self.state.china_card_playable = true;
        self.advance();
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The decision the engine is waiting for.
    #[must_use]
    pub fn pending_request(&self) -> Option<&InputRequest> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn catalog(&self) -> &CardRegistry {
        &self.catalog
    }

    /// Definition of a card in the catalog.
    #[must_use]
    pub fn card(&self, id: CardId) -> &CardDefinition {
        self.catalog.card(id)
    }

    /// Stages still queued, next first.
    pub fn upcoming(&self) -> impl Iterator<Item = &Stage> {
        self.stack.iter()
    }

    /// What `side` is allowed to see.
    #[must_use]
    pub fn player_view(&self, side: Side) -> PlayerView {
        PlayerView::new(self, side)
    }

    /// Switch the Neutral-request autopilot on or off mid-game.
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.config.autopilot = enabled;
        if enabled {
            self.advance();
        }
    }

    // === Input ===

    /// Answer the pending request and run until the next one.
    ///
    /// A rejected answer leaves the game exactly as it was.
    pub fn submit(&mut self, option: InputOption) -> Result<(), InputError> {
        self.accept(option)?;
        self.advance();
        Ok(())
    }

    /// Answer on a clone and return it, leaving this game untouched.
    pub fn preview(&self, option: InputOption) -> Result<Game, InputError> {
        let mut preview = self.clone();
        preview.rng = self.rng.clone().fork();
        preview.submit(option)?;
        Ok(preview)
    }

    fn accept(&mut self, option: InputOption) -> Result<(), InputError> {
        if self.result.is_some() {
            return Err(InputError::GameOver);
        }
        let Some(pending) = self.pending.as_ref() else {
            return Err(InputError::NoPendingRequest);
        };
        if let Err(err) = pending.validate(&option) {
            tracing::warn!(target: "cold_war::input", side = %pending.side, option = %option, error = %err, "input.rejected");
            return Err(err);
        }
        let mut request = pending.clone();
        if option == InputOption::Stop {
            request.stop();
        } else {
            request.record(&option);
            if let Err(err) = self.apply_answer(&mut request, &option) {
                tracing::warn!(target: "cold_war::input", side = %request.side, option = %option, error = %err, "input.rejected");
                return Err(err);
            }
        }
        tracing::debug!(target: "cold_war::input", side = %request.side, option = %option, reps = request.reps(), "input.accepted");
        self.pending = None;
        if request.is_complete() {
            self.complete_request(request);
        } else {
            self.pending = Some(request);
        }
        Ok(())
    }

    /// Run stages until a decision is needed or the game ends.
    pub(crate) fn advance(&mut self) {
        loop {
            if self.result.is_some() {
                return;
            }
            if let Some(request) = &self.pending {
                if !(self.config.autopilot && request.side == Side::Neutral) {
                    return;
                }
                let option = self.autopilot_answer();
                if let Err(err) = self.accept(option) {
                    panic!("autopilot answer was refused: {err}");
                }
                continue;
            }
            let Some(stage) = self.stack.pop() else {
                return;
            };
            tracing::debug!(target: "cold_war::engine", stage = %stage, "stage.run");
            self.run_stage(stage);
        }
    }

    // === Helpers for stages and events ===

    pub(crate) fn push(&mut self, stage: Stage) {
        self.stack.push(stage);
    }

    /// Push stages to run in the given order, before anything queued.
    pub(crate) fn push_all(&mut self, stages: impl IntoIterator<Item = Stage>) {
        self.stack.push_all(stages);
    }

    /// Leave a request pending. A request with nothing to choose completes
    /// on the spot.
    pub(crate) fn set_request(&mut self, request: InputRequest) {
        if self.result.is_some() {
            return;
        }
        assert!(self.pending.is_none(), "an input request is already pending");
        if request.is_complete() {
            self.complete_request(request);
        } else {
            tracing::debug!(target: "cold_war::input", side = %request.side, kind = ?request.kind, prompt = %request.prompt, "input.requested");
            self.pending = Some(request);
        }
    }

    /// Offer `side` labelled branches; the chosen branch's stages run next.
    pub(crate) fn choose(&mut self, side: Side, prompt: impl Into<String>, options: Vec<(String, Vec<Stage>)>) {
        self.choose_or_stop(side, prompt, options, None);
    }

    pub(crate) fn choose_or_stop(
        &mut self,
        side: Side,
        prompt: impl Into<String>,
        options: Vec<(String, Vec<Stage>)>,
        stop: Option<String>,
    ) {
        let (labels, branches): (Vec<_>, Vec<_>) = options.into_iter().unzip();
        let mut request = InputRequest::new(
            side,
            InputKind::SelectMultiple,
            prompt,
            labels.into_iter().map(InputOption::Label),
            Callback::Choice(branches),
        );
        if let Some(label) = stop {
            request = request.with_stop(label);
        }
        self.set_request(request);
    }
}

/// Request for `side` to pick a card from `cards`.
pub(crate) fn card_request(
    side: Side,
    prompt: impl Into<String>,
    cards: impl IntoIterator<Item = CardId>,
    callback: Callback,
) -> InputRequest {
    InputRequest::new(side, InputKind::SelectCard, prompt, cards.into_iter().map(InputOption::Card), callback)
}
