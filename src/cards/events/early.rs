//! Early War events.

use super::scoring::scored_region;
use super::{blank_ops, countries_in, countries_where, hand_without_china, reveal_hand, take_over, war_target};
use crate::cards::ids::{BLANK_1_OP, BLANK_4_OP, FIVE_YEAR_PLAN};
use crate::core::{Pile, Side};
use crate::effects::EffectTag;
use crate::engine::{card_request, Game};
use crate::input::{InputKind, InputOption, InputRequest};
use crate::map::data::*;
use crate::map::{CountrySet, Region};
use crate::stack::{Callback, InfluenceEdit, InfluencePick, PickUse, PlayFlags, Stage, WarPlan};

// =============================================================================
// Events
// =============================================================================

pub(crate) fn duck_and_cover(game: &mut Game, _: Side) {
    game.change_defcon(-1);
    let vp = 5 - i32::from(game.state.defcon);
    game.award_vp(Side::Us, vp);
}

/// A random USSR card is discarded; a US event on it fires.
pub(crate) fn five_year_plan(game: &mut Game, _: Side) {
    let cards: Vec<_> = hand_without_china(game, Side::Ussr)
        .into_iter()
        .filter(|&c| c != FIVE_YEAR_PLAN)
        .collect();
    if cards.is_empty() {
        return;
    }
    let request = card_request(
        Side::Neutral,
        "Five Year Plan: random USSR discard",
        cards,
        Callback::RandomCard { purpose: PickUse::FiveYearPlan, from: Side::Ussr },
    );
    game.set_request(request);
}

pub(crate) fn socialist_governments(game: &mut Game, side: Side) {
    let pick = InfluencePick::opponent(
        side,
        InfluenceEdit::Remove(1),
        countries_in(&[Region::WesternEurope]),
        3,
        "Remove 3 US influence from Western Europe",
    )
    .max_per_country(2);
    game.influence_pick(pick);
}

pub(crate) fn fidel(game: &mut Game, side: Side) {
    take_over(game, CUBA, side);
}

pub(crate) fn vietnam_revolts(game: &mut Game, side: Side) {
    game.state.map.add_influence(VIETNAM, side, 2);
    game.state.baskets.add(side, EffectTag::VietnamRevolts);
}

pub(crate) fn blockade(game: &mut Game, _: Side) {
    let cards: Vec<_> = hand_without_china(game, Side::Us)
        .into_iter()
        .filter(|&c| game.card_ops(Side::Us, c) >= 3)
        .collect();
    let on_decline = vec![Stage::EditInfluence(WEST_GERMANY, Side::Us, InfluenceEdit::RemoveAll)];
    let request = card_request(
        Side::Us,
        "Blockade: discard a 3+ operations card or lose all influence in West Germany",
        cards,
        Callback::OptionalDiscard { side: Side::Us, on_decline },
    )
    .with_stop("Do not discard");
    game.set_request(request);
}

pub(crate) fn korean_war(game: &mut Game, side: Side) {
    game.push(Stage::War(WarPlan::new(side, SOUTH_KOREA)));
}

pub(crate) fn romanian_abdication(game: &mut Game, side: Side) {
    take_over(game, ROMANIA, side);
}

pub(crate) fn arab_israeli_war(game: &mut Game, side: Side) {
    let plan = WarPlan { count_target: true, ..WarPlan::new(side, ISRAEL) };
    game.push(Stage::War(plan));
}

pub(crate) fn comecon(game: &mut Game, side: Side) {
    let map = &game.state.map;
    let countries = countries_where(|c| c.in_region(Region::EasternEurope) && !map.controls(c, side.opp()));
    let pick = InfluencePick::own(
        side,
        InfluenceEdit::Add(1),
        countries,
        4,
        "Add 1 influence in each of 4 non-US-controlled Eastern European countries",
    )
    .max_per_country(1);
    game.influence_pick(pick);
}

pub(crate) fn nasser(game: &mut Game, side: Side) {
    let map = &mut game.state.map;
    map.add_influence(EGYPT, side, 2);
    let half = (map.influence(EGYPT, side.opp()) + 1) / 2;
    map.remove_influence(EGYPT, side.opp(), half);
}

pub(crate) fn warsaw_pact(game: &mut Game, side: Side) {
    game.state.baskets.add(side.opp(), EffectTag::WarsawPact);
    let eastern = countries_in(&[Region::EasternEurope]);
    let remove = InfluencePick::opponent(
        side,
        InfluenceEdit::RemoveAll,
        eastern,
        4,
        "Remove all US influence from 4 Eastern European countries",
    )
    .max_per_country(1);
    let add = InfluencePick::own(side, InfluenceEdit::Add(1), eastern, 5, "Add 5 influence in Eastern Europe")
        .max_per_country(2);
    game.choose(
        side,
        "Warsaw Pact Formed",
        vec![
            ("Remove US influence".to_string(), vec![Stage::Influence(remove)]),
            ("Add USSR influence".to_string(), vec![Stage::Influence(add)]),
        ],
    );
}

pub(crate) fn de_gaulle(game: &mut Game, side: Side) {
    let map = &mut game.state.map;
    map.remove_influence(FRANCE, side.opp(), 2);
    map.add_influence(FRANCE, side, 1);
    game.state.baskets.add(side, EffectTag::DeGaulle);
}

pub(crate) fn captured_nazi_scientist(game: &mut Game, side: Side) {
    game.change_space(side, 1);
}

pub(crate) fn truman_doctrine(game: &mut Game, side: Side) {
    let map = &game.state.map;
    let countries = countries_where(|c| {
        c.in_region(Region::Europe) && map.control(c) == Side::Neutral && map.influence(c, side.opp()) > 0
    });
    let pick = InfluencePick::opponent(
        side,
        InfluenceEdit::RemoveAll,
        countries,
        1,
        "Remove all USSR influence from an uncontrolled European country",
    );
    game.influence_pick(pick);
}

pub(crate) fn olympic_games(game: &mut Game, side: Side) {
    let boycott = vec![
        Stage::ChangeDefcon(-1),
        Stage::SelectAction { side, card: BLANK_4_OP, flags: PlayFlags::blank() },
    ];
    game.choose(
        side.opp(),
        format!("{side} sponsors the Olympic Games"),
        vec![
            ("Participate".to_string(), vec![Stage::Olympics(side)]),
            ("Boycott".to_string(), boycott),
        ],
    );
}

pub(crate) fn nato(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::Nato);
}

pub(crate) fn independent_reds(game: &mut Game, side: Side) {
    let countries: CountrySet = [YUGOSLAVIA, ROMANIA, BULGARIA, HUNGARY, CZECHOSLOVAKIA].into_iter().collect();
    let pick = InfluencePick::own(
        side,
        InfluenceEdit::MatchOpponent,
        countries,
        1,
        "Match USSR influence in one country",
    );
    game.influence_pick(pick);
}

pub(crate) fn marshall_plan(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::MarshallPlan);
    let map = &game.state.map;
    let countries = countries_where(|c| c.in_region(Region::WesternEurope) && !map.controls(c, side.opp()));
    let pick = InfluencePick::own(
        side,
        InfluenceEdit::Add(1),
        countries,
        7,
        "Add 1 influence in each of 7 non-USSR-controlled Western European countries",
    )
    .max_per_country(1);
    game.influence_pick(pick);
}

pub(crate) fn indo_pakistani_war(game: &mut Game, side: Side) {
    war_target(game, WarPlan::new(side, INDIA), [INDIA, PAKISTAN], "Choose who is invaded");
}

pub(crate) fn containment(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::Containment);
}

pub(crate) fn cia_created(game: &mut Game, side: Side) {
    reveal_hand(game, side.opp());
    blank_ops(game, side, BLANK_1_OP, false);
}

pub(crate) fn us_japan_pact(game: &mut Game, side: Side) {
    let map = &mut game.state.map;
    let level = (map.influence(JAPAN, side.opp()) + 4).max(map.influence(JAPAN, side));
    map.set_influence(JAPAN, side, level);
    game.state.baskets.add(side, EffectTag::UsJapanPact);
}

pub(crate) fn suez_crisis(game: &mut Game, side: Side) {
    let countries: CountrySet = [FRANCE, UK, ISRAEL].into_iter().collect();
    let pick = InfluencePick::opponent(
        side,
        InfluenceEdit::Remove(1),
        countries,
        4,
        "Remove 4 US influence from France, the UK and Israel",
    )
    .max_per_country(2);
    game.influence_pick(pick);
}

pub(crate) fn east_european_unrest(game: &mut Game, side: Side) {
    let (edit, prompt) = if game.state.turn >= 8 {
        (InfluenceEdit::Remove(2), "Remove 2 USSR influence from each of 3 Eastern European countries")
    } else {
        (InfluenceEdit::Remove(1), "Remove 1 USSR influence from each of 3 Eastern European countries")
    };
    let pick = InfluencePick::opponent(side, edit, countries_in(&[Region::EasternEurope]), 3, prompt).max_per_country(1);
    game.influence_pick(pick);
}

pub(crate) fn decolonization(game: &mut Game, side: Side) {
    let pick = InfluencePick::own(
        side,
        InfluenceEdit::Add(1),
        countries_in(&[Region::Africa, Region::SoutheastAsia]),
        4,
        "Add 1 influence in each of 4 countries in Africa or Southeast Asia",
    )
    .max_per_country(1);
    game.influence_pick(pick);
}

pub(crate) fn red_scare_purge(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::RedScarePurge);
}

pub(crate) fn un_intervention(game: &mut Game, side: Side) {
    let cards: Vec<_> = game
        .state
        .hand(side)
        .iter()
        .copied()
        .filter(|&c| game.card(c).owner == side.opp())
        .collect();
    if game.state.baskets.remove(Side::Ussr, EffectTag::U2Incident) {
        game.award_vp(Side::Ussr, 1);
    }
    let request = card_request(
        side,
        "Choose an opponent's card to play for operations only",
        cards,
        Callback::UnIntervention(side),
    );
    game.set_request(request);
}

pub(crate) fn de_stalinization(game: &mut Game, side: Side) {
    let countries: Vec<_> = game.state.map.countries_with_influence(side).filter(|c| !c.is_superpower()).collect();
    let request = InputRequest::new(
        side,
        InputKind::SelectCountry,
        "Remove up to 4 USSR influence",
        countries.into_iter().map(InputOption::Country),
        Callback::DeStalinizationRemove { removed: 0 },
    )
    .with_reps(4)
    .with_unit("influence")
    .with_stop("Stop removing influence");
    game.set_request(request);
}

pub(crate) fn nuclear_test_ban(game: &mut Game, side: Side) {
    let vp = i32::from(game.state.defcon) - 2;
    game.award_vp(side, vp);
    game.change_defcon(2);
}

pub(crate) fn formosan_resolution(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::FormosanResolution);
}

/// As a headline the USSR headline is cancelled. In an action round a
/// USSR play of this card gives the US 1 VP.
pub(crate) fn defectors(game: &mut Game, _: Side) {
    if game.state.ar == 0 {
        if let Some(card) = game.state.headlines[Side::Ussr] {
            tracing::info!(target: "cold_war::events", card = game.card(card).name, "event.headline_cancelled");
            game.state.move_card(card, Pile::Discard);
        }
    } else if game.state.phasing == Side::Ussr {
        game.award_vp(Side::Us, 1);
    }
}

pub(crate) fn cambridge_five(game: &mut Game, side: Side) {
    let scoring: Vec<_> = game
        .state
        .hand(side.opp())
        .iter()
        .copied()
        .filter(|&c| game.card(c).is_scoring())
        .collect();
    let mut regions = Vec::with_capacity(scoring.len());
    for card in scoring {
        game.state.reveal(side.opp(), card);
        regions.extend(scored_region(card));
    }
    if regions.is_empty() {
        return;
    }
    let pick = InfluencePick::own(
        side,
        InfluenceEdit::Add(1),
        countries_in(&regions),
        1,
        "Add 1 influence in a region the US can score",
    );
    game.influence_pick(pick);
}

pub(crate) fn special_relationship(game: &mut Game, side: Side) {
    let pick = if game.state.baskets.has(side, EffectTag::Nato) {
        game.award_vp(side, 2);
        InfluencePick::own(
            side,
            InfluenceEdit::Add(2),
            countries_in(&[Region::WesternEurope]),
            1,
            "Add 2 influence in a Western European country",
        )
    } else {
        let countries: CountrySet = UK.adjacent().iter().copied().collect();
        InfluencePick::own(side, InfluenceEdit::Add(1), countries, 1, "Add 1 influence next to the UK")
    };
    game.influence_pick(pick);
}

pub(crate) fn norad(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::Norad);
}

// =============================================================================
// Prerequisites
// =============================================================================

pub(crate) fn socialist_governments_playable(game: &Game, _: Side) -> bool {
    !game.state.baskets.has(Side::Us, EffectTag::IronLady)
}

pub(crate) fn arab_israeli_war_playable(game: &Game, _: Side) -> bool {
    !game.state.baskets.has(Side::Us, EffectTag::CampDavid)
}

pub(crate) fn nato_playable(game: &Game, _: Side) -> bool {
    let baskets = &game.state.baskets;
    baskets.has(Side::Us, EffectTag::WarsawPact) || baskets.has(Side::Us, EffectTag::MarshallPlan)
}

pub(crate) fn un_intervention_playable(game: &Game, side: Side) -> bool {
    game.state.hand(side).iter().any(|&c| game.card(c).owner == side.opp())
}

pub(crate) fn cambridge_five_playable(game: &Game, _: Side) -> bool {
    game.state.turn < 8
}

pub(crate) fn special_relationship_playable(game: &Game, _: Side) -> bool {
    game.state.map.controls(UK, Side::Us)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::events::testing::{answer, game, hand, labels};
    use crate::cards::ids::*;
    use crate::stack::CardAction;

    #[test]
    fn test_duck_and_cover() {
        let mut game = game();
        game.debug_trigger_event(DUCK_AND_COVER, Side::Us);
        assert_eq!(game.state().defcon, 4);
        assert_eq!(game.state().vp, -1);
    }

    #[test]
    fn test_fidel_takes_cuba() {
        let mut game = game();
        game.debug_set_influence(CUBA, Side::Us, 2);
        game.debug_trigger_event(FIDEL, Side::Ussr);
        assert_eq!(game.state().map.influence(CUBA, Side::Us), 0);
        assert_eq!(game.state().map.influence(CUBA, Side::Ussr), 3);
    }

    #[test]
    fn test_nasser_halves_us_rounding_up() {
        let mut game = game();
        game.debug_set_influence(EGYPT, Side::Us, 3);
        game.debug_trigger_event(NASSER, Side::Ussr);
        assert_eq!(game.state().map.influence(EGYPT, Side::Us), 1);
        assert_eq!(game.state().map.influence(EGYPT, Side::Ussr), 2);
    }

    #[test]
    fn test_us_japan_pact_reaches_control() {
        let mut game = game();
        game.debug_set_influence(JAPAN, Side::Ussr, 2);
        game.debug_trigger_event(US_JAPAN_PACT, Side::Us);
        assert_eq!(game.state().map.influence(JAPAN, Side::Us), 6);
        assert!(game.state().baskets.has(Side::Us, EffectTag::UsJapanPact));
    }

    #[test]
    fn test_blockade_decline_clears_west_germany() {
        let mut game = game();
        game.debug_set_influence(WEST_GERMANY, Side::Us, 4);
        hand(&mut game, Side::Us, &[DUCK_AND_COVER, FORMOSAN_RESOLUTION]);
        game.debug_trigger_event(BLOCKADE, Side::Ussr);
        let request = game.pending_request().unwrap();
        assert_eq!(request.available_options(), vec![InputOption::Card(DUCK_AND_COVER)]);
        answer(&mut game, InputOption::Stop);
        assert_eq!(game.state().map.influence(WEST_GERMANY, Side::Us), 0);
    }

    #[test]
    fn test_blockade_discard_keeps_west_germany() {
        let mut game = game();
        game.debug_set_influence(WEST_GERMANY, Side::Us, 4);
        hand(&mut game, Side::Us, &[DUCK_AND_COVER]);
        game.debug_trigger_event(BLOCKADE, Side::Ussr);
        answer(&mut game, InputOption::Card(DUCK_AND_COVER));
        assert_eq!(game.state().map.influence(WEST_GERMANY, Side::Us), 4);
        assert_eq!(game.state().card_location(DUCK_AND_COVER), Some(Pile::Discard));
    }

    #[test]
    fn test_warsaw_pact_add_branch() {
        let mut game = game();
        game.debug_trigger_event(WARSAW_PACT, Side::Ussr);
        assert!(game.state().baskets.has(Side::Us, EffectTag::WarsawPact));
        assert_eq!(labels(&game).len(), 2);
        answer(&mut game, InputOption::Label("Add USSR influence".into()));
        for country in [POLAND, POLAND, EAST_GERMANY, EAST_GERMANY, HUNGARY] {
            answer(&mut game, InputOption::Country(country));
        }
        assert_eq!(game.state().map.influence(POLAND, Side::Ussr), 2);
        assert_eq!(game.state().map.influence(HUNGARY, Side::Ussr), 1);
        assert!(game.pending_request().is_none());
    }

    #[test]
    fn test_de_gaulle() {
        let mut game = game();
        game.debug_set_influence(FRANCE, Side::Us, 3);
        game.debug_trigger_event(DE_GAULLE, Side::Ussr);
        assert_eq!(game.state().map.influence(FRANCE, Side::Us), 1);
        assert_eq!(game.state().map.influence(FRANCE, Side::Ussr), 1);
        assert!(game.state().baskets.has(Side::Ussr, EffectTag::DeGaulle));
    }

    #[test]
    fn test_truman_only_uncontrolled() {
        let mut game = game();
        game.debug_set_influence(ITALY, Side::Ussr, 1);
        game.debug_set_influence(POLAND, Side::Ussr, 4);
        game.debug_trigger_event(TRUMAN_DOCTRINE, Side::Us);
        let request = game.pending_request().unwrap();
        assert_eq!(request.available_options(), vec![InputOption::Country(ITALY)]);
    }

    #[test]
    fn test_olympic_boycott_gives_blank_ops() {
        let mut game = game();
        game.debug_trigger_event(OLYMPIC_GAMES, Side::Us);
        assert_eq!(game.pending_request().unwrap().side, Side::Ussr);
        answer(&mut game, InputOption::Label("Boycott".into()));
        assert_eq!(game.state().defcon, 4);
        let request = game.pending_request().unwrap();
        assert_eq!(request.side, Side::Us);
        assert_eq!(request.kind, InputKind::CardAction);
    }

    #[test]
    fn test_independent_reds_offers_only_behind() {
        let mut game = game();
        game.debug_set_influence(ROMANIA, Side::Ussr, 3);
        game.debug_set_influence(HUNGARY, Side::Ussr, 1);
        game.debug_set_influence(HUNGARY, Side::Us, 1);
        game.debug_trigger_event(INDEPENDENT_REDS, Side::Us);
        answer(&mut game, InputOption::Country(ROMANIA));
        assert_eq!(game.state().map.influence(ROMANIA, Side::Us), 3);
    }

    #[test]
    fn test_nuclear_test_ban() {
        let mut game = game();
        game.debug_set_defcon(4);
        game.debug_trigger_event(NUCLEAR_TEST_BAN, Side::Ussr);
        assert_eq!(game.state().vp, 2);
        assert_eq!(game.state().defcon, 5);
    }

    #[test]
    fn test_de_stalinization_moves_influence() {
        let mut game = game();
        game.debug_set_influence(CUBA, Side::Ussr, 2);
        game.debug_trigger_event(DE_STALINIZATION, Side::Ussr);
        assert_eq!(game.pending_request().unwrap().available_options(), vec![InputOption::Country(CUBA)]);
        answer(&mut game, InputOption::Country(CUBA));
        answer(&mut game, InputOption::Country(CUBA));
        // Cuba is empty now, so the removal step ends on its own.
        let request = game.pending_request().unwrap();
        assert_eq!(request.reps(), 2);
        answer(&mut game, InputOption::Country(ANGOLA));
        answer(&mut game, InputOption::Country(ANGOLA));
        assert_eq!(game.state().map.influence(CUBA, Side::Ussr), 0);
        assert_eq!(game.state().map.influence(ANGOLA, Side::Ussr), 2);
    }

    #[test]
    fn test_defectors_cancels_ussr_headline() {
        let mut game = game();
        game.state.ar = 0;
        game.state.put(Pile::Headline(Side::Ussr), FIDEL);
        game.debug_trigger_event(DEFECTORS, Side::Us);
        assert_eq!(game.state().card_location(FIDEL), Some(Pile::Discard));
        assert_eq!(game.state().headlines[Side::Ussr], None);
    }

    #[test]
    fn test_defectors_played_by_ussr() {
        let mut game = game();
        game.state.phasing = Side::Ussr;
        game.debug_trigger_event(DEFECTORS, Side::Ussr);
        assert_eq!(game.state().vp, -1);
    }

    #[test]
    fn test_un_intervention_needs_opponent_card() {
        let mut game = game();
        hand(&mut game, Side::Us, &[DUCK_AND_COVER]);
        assert!(!un_intervention_playable(&game, Side::Us));
        hand(&mut game, Side::Us, &[FIDEL]);
        assert!(un_intervention_playable(&game, Side::Us));
    }

    #[test]
    fn test_un_intervention_plays_for_ops() {
        let mut game = game();
        hand(&mut game, Side::Us, &[FIDEL]);
        game.state.baskets.add(Side::Ussr, EffectTag::U2Incident);
        game.debug_trigger_event(UN_INTERVENTION, Side::Us);
        assert_eq!(game.state().vp, 1);
        answer(&mut game, InputOption::Card(FIDEL));
        let request = game.pending_request().unwrap();
        assert_eq!(request.kind, InputKind::CardAction);
        assert!(!request.available_options().contains(&InputOption::Action(CardAction::ResolveEventFirst)));
    }

    #[test]
    fn test_special_relationship_with_nato() {
        let mut game = game();
        game.state.baskets.add(Side::Us, EffectTag::Nato);
        game.debug_trigger_event(SPECIAL_RELATIONSHIP, Side::Us);
        assert_eq!(game.state().vp, -2);
        answer(&mut game, InputOption::Country(ITALY));
        assert_eq!(game.state().map.influence(ITALY, Side::Us), 2);
    }

    #[test]
    fn test_cambridge_five_reveals_scoring() {
        let mut game = game();
        hand(&mut game, Side::Us, &[EUROPE_SCORING, DUCK_AND_COVER]);
        game.debug_trigger_event(CAMBRIDGE_FIVE, Side::Ussr);
        assert!(game.state().revealed[Side::Us].contains(&EUROPE_SCORING));
        assert!(!game.state().revealed[Side::Us].contains(&DUCK_AND_COVER));
        let options = game.pending_request().unwrap().available_options();
        assert!(options.contains(&InputOption::Country(ITALY)));
        assert!(!options.contains(&InputOption::Country(ANGOLA)));
    }

    #[test]
    fn test_five_year_plan_skips_itself() {
        let mut game = game();
        hand(&mut game, Side::Ussr, &[FIVE_YEAR_PLAN, CHINA_CARD, FIDEL]);
        game.debug_trigger_event(FIVE_YEAR_PLAN, Side::Us);
        let request = game.pending_request().unwrap();
        assert_eq!(request.side, Side::Neutral);
        assert_eq!(request.available_options(), vec![InputOption::Card(FIDEL)]);
        answer(&mut game, InputOption::Card(FIDEL));
        assert_eq!(game.state().card_location(FIDEL), Some(Pile::Discard));
    }
}
