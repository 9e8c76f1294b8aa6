//! Card event procedures and prerequisites.
//!
//! Every event is a plain `fn(&mut Game, Side)` that receives the side the
//! event belongs to. An event either changes the state on the spot, leaves
//! one input request pending, or pushes stages in the order they should
//! run. Prerequisites are `fn(&Game, Side) -> bool` and never mutate.
//!
//! ## Layout
//!
//! - `scoring`: the seven region scoring cards
//! - `early`, `mid`, `late`: event cards by era

pub mod early;
pub mod late;
pub mod mid;
pub mod scoring;

use crate::cards::ids::CHINA_CARD;
use crate::cards::CardId;
use crate::core::Side;
use crate::engine::Game;
use crate::input::{InputKind, InputOption, InputRequest};
use crate::map::{CountryId, CountrySet, Region};
use crate::stack::{Callback, PlayFlags, Stage, WarPlan};

/// Every country in any of `regions`, superpowers excluded.
pub(crate) fn countries_in(regions: &[Region]) -> CountrySet {
    CountryId::all()
        .filter(|&c| !c.is_superpower() && regions.iter().any(|&r| c.in_region(r)))
        .collect()
}

/// Every country matching `keep`, superpowers excluded.
pub(crate) fn countries_where(keep: impl Fn(CountryId) -> bool) -> CountrySet {
    CountryId::all().filter(|&c| !c.is_superpower() && keep(c)).collect()
}

/// Let `side` spend a stand-in card's operations.
pub(crate) fn blank_ops(game: &mut Game, side: Side, blank: CardId, no_coup: bool) {
    let flags = PlayFlags { no_coup, ..PlayFlags::blank() };
    game.push(Stage::SelectAction { side, card: blank, flags });
}

/// Ask the side waging `plan` which of `targets` to attack.
pub(crate) fn war_target(game: &mut Game, plan: WarPlan, targets: impl IntoIterator<Item = CountryId>, prompt: &str) {
    let request = InputRequest::new(
        plan.side,
        InputKind::SelectCountry,
        prompt,
        targets.into_iter().map(InputOption::Country),
        Callback::WarTarget(plan),
    );
    game.set_request(request);
}

/// `side` takes `country` over: the opponent is wiped out and `side` is
/// raised to at least the country's stability.
pub(crate) fn take_over(game: &mut Game, country: CountryId, side: Side) {
    let map = &mut game.state.map;
    map.set_influence(country, side.opp(), 0);
    let level = map.influence(country, side).max(country.stability());
    map.set_influence(country, side, level);
}

/// Cards in `side`'s hand other than the China Card.
pub(crate) fn hand_without_china(game: &Game, side: Side) -> Vec<CardId> {
    game.state().hand(side).iter().copied().filter(|&c| c != CHINA_CARD).collect()
}

/// Show `side`'s whole hand to the opponent.
pub(crate) fn reveal_hand(game: &mut Game, side: Side) {
    let cards: Vec<CardId> = game.state().hand(side).iter().copied().collect();
    tracing::info!(target: "cold_war::events", side = %side, cards = cards.len(), "event.hand_revealed");
    for card in cards {
        game.state.reveal(side, card);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::cards::CardId;
    use crate::core::{GameConfig, Side};
    use crate::engine::Game;
    use crate::input::InputOption;

    /// An empty board in the first action round, dice left to the caller.
    pub fn game() -> Game {
        let mut game = Game::new(GameConfig::new(17).with_autopilot(false).with_standard_setup(false));
        game.stack.clear();
        game.state.ar = 1;
        game
    }

    pub fn hand(game: &mut Game, side: Side, cards: &[CardId]) {
        for &card in cards {
            game.state.put(crate::core::Pile::Hand(side), card);
        }
    }

    /// Answer the pending request with `option`, panicking on rejection.
    pub fn answer(game: &mut Game, option: InputOption) {
        game.submit(option).unwrap();
    }

    pub fn labels(game: &Game) -> Vec<String> {
        game.pending_request()
            .map(|r| {
                r.available_options()
                    .into_iter()
                    .filter_map(|o| match o {
                        InputOption::Label(l) => Some(l),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
