//! Input protocol integration tests.
//!
//! These tests drive a match purely through `pending_request` and `submit`
//! and check that rejected answers never change the game.

mod common;

use cold_war_engine::cards::ids::DUCK_AND_COVER;
use cold_war_engine::core::{GameConfig, Side};
use cold_war_engine::engine::Game;
use cold_war_engine::error::InputError;
use cold_war_engine::input::{InputKind, InputOption};
use cold_war_engine::map::Region;
use cold_war_engine::rules::VictoryReason;

use common::{choices, started};

// =============================================================================
// Setup
// =============================================================================

/// Test that the first decision after setup shuffles is the USSR's
/// Eastern European starting influence.
#[test]
fn test_first_request_is_ussr_setup() {
    let game = started(1);
    let request = game.pending_request().unwrap();

    assert_eq!(request.side, Side::Ussr);
    assert_eq!(request.kind, InputKind::SelectCountry);
    assert_eq!(request.reps(), 6);
    for option in request.available_options() {
        let InputOption::Country(country) = option else {
            panic!("setup offers countries only");
        };
        assert!(country.in_region(Region::EasternEurope));
    }
}

/// Test that each accepted setup answer consumes one repetition.
#[test]
fn test_answer_consumes_repetition() {
    let mut game = started(2);
    let first = choices(&game)[0].clone();
    game.submit(first).unwrap();
    assert_eq!(game.pending_request().unwrap().reps(), 5);
}

/// Test that with the autopilot off the opening shuffle waits for the
/// neutral side.
#[test]
fn test_autopilot_off_exposes_shuffle() {
    let mut game = Game::new(GameConfig::new(3).with_autopilot(false));
    game.start();
    let request = game.pending_request().unwrap();
    assert_eq!(request.side, Side::Neutral);

    // Answering by hand is accepted like any other answer.
    let pick = request.available_options()[0].clone();
    game.submit(pick).unwrap();
    assert!(game.pending_request().is_some());
}

// =============================================================================
// Rejections
// =============================================================================

/// Test that an option outside the legal set is rejected without any
/// change to the game.
#[test]
fn test_illegal_option_leaves_state_untouched() {
    let mut game = started(4);
    let before = game.state().clone();
    let reps = game.pending_request().unwrap().reps();

    let err = game.submit(InputOption::Roll(9)).unwrap_err();

    assert!(matches!(err, InputError::IllegalOption { .. }));
    assert_eq!(game.state(), &before);
    assert_eq!(game.pending_request().unwrap().reps(), reps);
}

/// Test that stopping early is refused when the request has no stop option.
#[test]
fn test_stop_not_allowed() {
    let mut game = started(5);
    assert!(game.pending_request().unwrap().stop_label().is_none());
    assert_eq!(game.submit(InputOption::Stop), Err(InputError::StopNotAllowed));
}

/// Test that answering before the game has started is rejected.
#[test]
fn test_no_pending_request() {
    let mut game = Game::new(GameConfig::new(6));
    assert_eq!(game.submit(InputOption::Roll(1)), Err(InputError::NoPendingRequest));
}

/// Test that nothing is accepted after the game has ended.
#[test]
fn test_game_over_rejects_answers() {
    let mut game = started(7);
    game.debug_set_vp(-20);

    let result = game.result().unwrap();
    assert_eq!(result.winner, Some(Side::Us));
    assert_eq!(result.reason, VictoryReason::VictoryPoints);
    assert!(game.pending_request().is_none());
    assert_eq!(game.submit(InputOption::Stop), Err(InputError::GameOver));
}

// =============================================================================
// Preview
// =============================================================================

/// Test that previewing an answer leaves the original game untouched.
#[test]
fn test_preview_is_independent() {
    let game = started(8);
    let option = choices(&game)[0].clone();

    let preview = game.preview(option.clone()).unwrap();

    assert_eq!(preview.pending_request().unwrap().reps(), 5);
    assert_eq!(game.pending_request().unwrap().reps(), 6);
    assert_eq!(game.pending_request().unwrap().selected(&option), 0);
}

/// Test that a rejected preview reports the same error as a submit.
#[test]
fn test_preview_rejection() {
    let game = started(9);
    assert!(matches!(game.preview(InputOption::Roll(0)), Err(InputError::IllegalOption { .. })));
}

// =============================================================================
// Debug interface
// =============================================================================

/// Test that a debug event runs to completion and the interrupted request
/// comes back afterwards.
#[test]
fn test_debug_event_resumes_request() {
    let mut game = started(10);
    let before = game.pending_request().unwrap().clone();

    game.debug_trigger_event(DUCK_AND_COVER, Side::Us);

    assert_eq!(game.state().defcon, 4);
    assert_eq!(game.state().vp, -1);
    assert_eq!(game.pending_request(), Some(&before));
}
