//! Shared helpers for the integration tests.

#![allow(dead_code)]

use cold_war_engine::cards::CardId;
use cold_war_engine::core::{GameConfig, Side};
use cold_war_engine::engine::Game;
use cold_war_engine::input::InputOption;
use cold_war_engine::map::CountryId;

/// Install a test log subscriber once; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Started game with the autopilot answering dice and shuffles.
pub fn started(seed: u64) -> Game {
    init_tracing();
    let mut game = Game::new(GameConfig::new(seed));
    game.start();
    game
}

/// Options of the pending request, with the stop pseudo-option last when
/// the request allows it.
pub fn choices(game: &Game) -> Vec<InputOption> {
    let Some(request) = game.pending_request() else {
        return Vec::new();
    };
    let mut options = request.available_options();
    if request.stop_label().is_some() {
        options.push(InputOption::Stop);
    }
    options
}

/// Answer `steps` requests, choosing by `pick` modulo the option count.
/// Returns the number of answers actually submitted.
pub fn drive(game: &mut Game, picks: impl IntoIterator<Item = usize>) -> usize {
    let mut submitted = 0;
    for pick in picks {
        if game.is_over() {
            break;
        }
        let options = choices(game);
        if options.is_empty() {
            break;
        }
        let option = options[pick % options.len()].clone();
        game.submit(option).expect("available options are legal");
        submitted += 1;
    }
    submitted
}

/// Answer with the first option until `done` holds, up to `limit` answers.
/// Returns whether `done` was reached.
pub fn answer_until(game: &mut Game, limit: usize, done: impl Fn(&Game) -> bool) -> bool {
    for _ in 0..limit {
        if done(game) {
            return true;
        }
        if drive(game, [0]) == 0 {
            break;
        }
    }
    done(game)
}

/// Play to the end with a simple deterministic picker, up to `limit` answers.
pub fn play_out(game: &mut Game, seed: usize, limit: usize) {
    let picks = (0..limit).map(|i| i.wrapping_mul(2_654_435_761).wrapping_add(seed) >> 7);
    drive(game, picks);
}

/// Whether each country's control marker agrees with its influence.
pub fn control_consistent(game: &Game) -> bool {
    let map = &game.state().map;
    CountryId::all().filter(|c| !c.is_superpower()).all(|country| {
        let ussr = map.influence(country, Side::Ussr);
        let us = map.influence(country, Side::Us);
        let expected = if ussr >= us + country.stability() {
            Side::Ussr
        } else if us >= ussr + country.stability() {
            Side::Us
        } else {
            Side::Neutral
        };
        map.control(country) == expected
    })
}

/// Every catalog card sits in at most one pile.
pub fn piles_exclusive(game: &Game) -> bool {
    (1..=110).all(|id| game.state().locations(CardId::new(id)).len() <= 1)
}
