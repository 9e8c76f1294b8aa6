//! Property tests over randomly played games.
//!
//! Every game is driven by a random sequence of option indices. After each
//! answer the public invariants of the state must still hold.

mod common;

use cold_war_engine::cards::ids::CHINA_CARD;
use cold_war_engine::core::{GameConfig, Side};
use cold_war_engine::engine::Game;
use cold_war_engine::map::CountryId;
use proptest::prelude::*;

use common::{choices, control_consistent, drive, piles_exclusive, started};

/// Check every invariant that must hold between any two answers.
fn check_invariants(game: &Game) -> Result<(), TestCaseError> {
    let state = game.state();
    prop_assert!((1..=5).contains(&state.defcon));
    if state.defcon == 1 {
        prop_assert!(game.is_over());
    }
    if !game.is_over() {
        prop_assert!(state.vp.abs() < game.config().vp_victory);
        prop_assert!(game.pending_request().is_some());
    }
    for side in Side::PLAYERS {
        prop_assert!(state.milops[side] <= 5);
        prop_assert!(state.space[side] <= 8);
    }
    prop_assert!(control_consistent(game));
    prop_assert!(piles_exclusive(game));
    prop_assert_eq!(state.locations(CHINA_CARD).len(), 1);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Test that random play never breaks the state invariants.
    #[test]
    fn prop_random_play_keeps_invariants(seed in 0u64..1_000, picks in prop::collection::vec(any::<usize>(), 1..400)) {
        let mut game = started(seed);
        for pick in picks {
            if game.is_over() {
                break;
            }
            let options = choices(&game);
            prop_assert!(!options.is_empty());
            let option = options[pick % options.len()].clone();
            prop_assert!(game.submit(option).is_ok());
            check_invariants(&game)?;
        }
    }

    /// Test that the same seed and the same answers give the same game.
    #[test]
    fn prop_replay_is_deterministic(seed in 0u64..1_000, picks in prop::collection::vec(any::<usize>(), 1..300)) {
        let mut first = started(seed);
        let mut second = started(seed);
        drive(&mut first, picks.iter().copied());
        drive(&mut second, picks.iter().copied());

        prop_assert_eq!(first.state(), second.state());
        prop_assert_eq!(first.result(), second.result());
    }

    /// Test that forced influence levels read back exactly and never
    /// disturb other countries.
    #[test]
    fn prop_debug_influence_is_local(index in 0usize..84, amount in 0u32..10) {
        let mut game = Game::new(GameConfig::new(1).with_standard_setup(false));
        let country = CountryId::all().filter(|c| !c.is_superpower()).nth(index).unwrap();

        game.debug_set_influence(country, Side::Us, amount);

        prop_assert_eq!(game.state().map.influence(country, Side::Us), amount);
        prop_assert_eq!(game.state().map.total_influence(Side::Us), amount);
        prop_assert!(control_consistent(&game));
    }

    /// Test that VP changes are reported from the USSR's point of view.
    #[test]
    fn prop_vp_victory_symmetric(vp in -30i32..=30) {
        let mut game = started(5);
        game.debug_set_vp(vp);
        let winner = game.result().and_then(|r| r.winner);
        if vp >= 20 {
            prop_assert_eq!(winner, Some(Side::Ussr));
        } else if vp <= -20 {
            prop_assert_eq!(winner, Some(Side::Us));
        } else {
            prop_assert!(!game.is_over());
            prop_assert_eq!(game.state().vp, vp);
        }
    }
}
