//! Late War events.

use super::{blank_ops, countries_in, hand_without_china, reveal_hand, war_target};
use crate::cards::ids::{BLANK_4_OP, ORTEGA_ELECTED, TEAR_DOWN_THIS_WALL};
use crate::core::Side;
use crate::effects::EffectTag;
use crate::engine::{card_request, Game};
use crate::map::data::*;
use crate::map::{CountrySet, Region};
use crate::rules::VictoryReason;
use crate::stack::{Callback, CoupPlan, InfluenceEdit, InfluencePick, PickUse, RealignPlan, Stage, WarPlan};

// =============================================================================
// Events
// =============================================================================

pub(crate) fn iranian_hostage_crisis(game: &mut Game, side: Side) {
    game.state.map.set_influence(IRAN, side.opp(), 0);
    game.state.map.add_influence(IRAN, side, 2);
    game.state.baskets.add(side.opp(), EffectTag::IranianHostageCrisis);
}

pub(crate) fn iron_lady(game: &mut Game, side: Side) {
    game.state.map.add_influence(ARGENTINA, side.opp(), 1);
    game.state.map.set_influence(UK, side.opp(), 0);
    game.award_vp(side, 1);
    game.state.baskets.add(side, EffectTag::IronLady);
}

pub(crate) fn reagan_bombs_libya(game: &mut Game, side: Side) {
    let vp = game.state.map.influence(LIBYA, side.opp()) / 2;
    game.award_vp(side, vp as i32);
}

pub(crate) fn star_wars(game: &mut Game, side: Side) {
    let cards: Vec<_> = game
        .state
        .discard
        .iter()
        .copied()
        .filter(|&c| !game.card(c).is_scoring())
        .collect();
    let request = card_request(
        side,
        "Choose a discarded event to play",
        cards,
        Callback::TakeFromDiscard { side, trigger: true },
    );
    game.set_request(request);
}

pub(crate) fn north_sea_oil(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::NorthSeaOil);
    if game.state.ar > 0 {
        game.state.ar_budget[side] = 8;
    }
}

pub(crate) fn reformer(game: &mut Game, side: Side) {
    let (reps, prompt) = if game.state.vp > 0 {
        (6, "Add 6 influence in Europe")
    } else {
        (4, "Add 4 influence in Europe")
    };
    let pick = InfluencePick::own(side, InfluenceEdit::Add(1), countries_in(&[Region::Europe]), reps, prompt)
        .max_per_country(2);
    game.state.baskets.add(side, EffectTag::Reformer);
    game.influence_pick(pick);
}

pub(crate) fn marine_barracks(game: &mut Game, side: Side) {
    game.state.map.set_influence(LEBANON, side.opp(), 0);
    let pick = InfluencePick::opponent(
        side,
        InfluenceEdit::Remove(1),
        countries_in(&[Region::MiddleEast]),
        2,
        "Remove 2 US influence from the Middle East",
    );
    game.influence_pick(pick);
}

pub(crate) fn kal_007(game: &mut Game, side: Side) {
    game.change_defcon(-1);
    game.award_vp(side, 2);
    if game.state.map.controls(SOUTH_KOREA, side) {
        blank_ops(game, side, BLANK_4_OP, true);
    }
}

pub(crate) fn glasnost(game: &mut Game, side: Side) {
    game.change_defcon(1);
    game.award_vp(side, 2);
    if game.state.baskets.has(side, EffectTag::Reformer) {
        blank_ops(game, side, BLANK_4_OP, true);
    }
}

pub(crate) fn ortega_elected(game: &mut Game, side: Side) {
    game.state.map.set_influence(NICARAGUA, side.opp(), 0);
    let ops = game.card_ops(side, ORTEGA_ELECTED);
    let targets: CountrySet = NICARAGUA.adjacent().iter().copied().filter(|c| !c.is_superpower()).collect();
    let plan = CoupPlan::new(side, ops).free().within(targets).optional();
    game.push(Stage::Coup(plan));
}

pub(crate) fn terrorism(game: &mut Game, side: Side) {
    let victim = side.opp();
    let cards = hand_without_china(game, victim);
    let hostages = side == Side::Ussr && game.state.baskets.has(Side::Us, EffectTag::IranianHostageCrisis);
    let reps = (if hostages { 2 } else { 1 }).min(cards.len() as u32);
    let request = card_request(
        Side::Neutral,
        format!("Terrorism: random {victim} discard"),
        cards,
        Callback::RandomCard { purpose: PickUse::Terrorism, from: victim },
    )
    .with_reps(reps)
    .with_max_per_option(1);
    game.set_request(request);
}

pub(crate) fn iran_contra_scandal(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::IranContra);
}

pub(crate) fn chernobyl(game: &mut Game, side: Side) {
    let options = Region::SCORED
        .into_iter()
        .map(|region| (region.name().to_string(), vec![Stage::AddEffect(side, EffectTag::Chernobyl(region))]))
        .collect();
    game.choose(side, "Close a region to USSR influence placement", options);
}

pub(crate) fn latin_american_debt_crisis(game: &mut Game, side: Side) {
    let payer = side.opp();
    let cards: Vec<_> = hand_without_china(game, payer)
        .into_iter()
        .filter(|&c| game.card_ops(payer, c) >= 3)
        .collect();
    let doubling = InfluencePick::own(
        side,
        InfluenceEdit::Double,
        countries_in(&[Region::SouthAmerica]),
        2,
        "Double USSR influence in 2 South American countries",
    )
    .max_per_country(1);
    let request = card_request(
        payer,
        "Latin American Debt Crisis: discard a 3+ operations card",
        cards,
        Callback::OptionalDiscard { side: payer, on_decline: vec![Stage::Influence(doubling)] },
    )
    .with_stop("Do not discard");
    game.set_request(request);
}

pub(crate) fn tear_down_this_wall(game: &mut Game, side: Side) {
    game.state.baskets.remove(side.opp(), EffectTag::WillyBrandt);
    game.state.map.add_influence(EAST_GERMANY, side, 3);
    game.state.baskets.add(side, EffectTag::TearDownThisWall);

    let ops = game.card_ops(side, TEAR_DOWN_THIS_WALL);
    let europe = countries_in(&[Region::Europe]);
    let coup = CoupPlan::new(side, ops).free().within(europe).optional();
    let realign = RealignPlan { free: true, targets: Some(europe), ..RealignPlan::new(side, ops) };
    game.choose(
        side,
        "Tear Down This Wall: free operation in Europe",
        vec![
            ("Coup".to_string(), vec![Stage::Coup(coup)]),
            ("Realignments".to_string(), vec![Stage::Realign(realign)]),
            ("Neither".to_string(), Vec::new()),
        ],
    );
}

pub(crate) fn an_evil_empire(game: &mut Game, side: Side) {
    game.award_vp(side, 1);
    game.state.baskets.remove(side.opp(), EffectTag::FlowerPower);
    game.state.baskets.add(side, EffectTag::EvilEmpire);
}

pub(crate) fn aldrich_ames(game: &mut Game, side: Side) {
    reveal_hand(game, side.opp());
    let cards = hand_without_china(game, side.opp());
    let request = card_request(side, "Discard a card from the US hand", cards, Callback::AldrichAmes);
    game.set_request(request);
}

pub(crate) fn pershing_ii(game: &mut Game, side: Side) {
    game.award_vp(side, 1);
    let pick = InfluencePick::opponent(
        side,
        InfluenceEdit::Remove(1),
        countries_in(&[Region::WesternEurope]),
        3,
        "Remove 1 US influence from each of 3 Western European countries",
    )
    .max_per_country(1);
    game.influence_pick(pick);
}

/// The opponent gets 6 VP and the game ends on the spot, if the player
/// wants.
pub(crate) fn wargames(game: &mut Game, side: Side) {
    let end = vec![
        Stage::ChangeVp(6 * side.opp().vp_mult()),
        Stage::DecideByVp(VictoryReason::Wargames),
    ];
    game.choose(
        side,
        "Wargames",
        vec![("End the game".to_string(), end), ("Continue".to_string(), Vec::new())],
    );
}

pub(crate) fn solidarity(game: &mut Game, side: Side) {
    game.state.map.add_influence(POLAND, side, 3);
    game.state.baskets.remove(side, EffectTag::JohnPaulII);
}

pub(crate) fn iran_iraq_war(game: &mut Game, side: Side) {
    war_target(game, WarPlan::new(side, IRAN), [IRAN, IRAQ], "Choose who is invaded");
}

pub(crate) fn yuri_and_samantha(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::YuriAndSamantha);
}

pub(crate) fn awacs_sale(game: &mut Game, side: Side) {
    game.state.map.add_influence(SAUDI_ARABIA, side, 2);
    game.state.baskets.add(side, EffectTag::Awacs);
}

// =============================================================================
// Prerequisites
// =============================================================================

pub(crate) fn star_wars_playable(game: &Game, side: Side) -> bool {
    game.state.space[side] > game.state.space[side.opp()]
}

pub(crate) fn wargames_playable(game: &Game, _: Side) -> bool {
    game.state.defcon == 2
}

pub(crate) fn solidarity_playable(game: &Game, _: Side) -> bool {
    game.state.baskets.has(Side::Us, EffectTag::JohnPaulII)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::events::testing::{answer, game, hand, labels};
    use crate::cards::ids::*;
    use crate::core::Pile;
    use crate::input::{InputKind, InputOption};
    use crate::rules::GameResult;
    use crate::stack::CardAction;

    #[test]
    fn test_iron_lady() {
        let mut game = game();
        game.debug_set_influence(UK, Side::Ussr, 2);
        game.debug_trigger_event(IRON_LADY, Side::Us);
        assert_eq!(game.state().map.influence(UK, Side::Ussr), 0);
        assert_eq!(game.state().map.influence(ARGENTINA, Side::Ussr), 1);
        assert_eq!(game.state().vp, -1);
        assert!(game.state().baskets.has(Side::Us, EffectTag::IronLady));
    }

    #[test]
    fn test_reagan_bombs_libya_rounds_down() {
        let mut game = game();
        game.debug_set_influence(LIBYA, Side::Ussr, 5);
        game.debug_trigger_event(REAGAN_BOMBS_LIBYA, Side::Us);
        assert_eq!(game.state().vp, -2);
    }

    #[test]
    fn test_star_wars_plays_discarded_event() {
        let mut game = game();
        game.state.put(Pile::Discard, DUCK_AND_COVER);
        game.state.put(Pile::Discard, ASIA_SCORING);
        game.debug_trigger_event(STAR_WARS, Side::Us);
        assert_eq!(game.pending_request().unwrap().available_options(), vec![InputOption::Card(DUCK_AND_COVER)]);
        answer(&mut game, InputOption::Card(DUCK_AND_COVER));
        assert_eq!(game.state().defcon, 4);
        assert_eq!(game.state().card_location(DUCK_AND_COVER), Some(Pile::Discard));
    }

    #[test]
    fn test_reformer_bonus_when_ussr_ahead() {
        let mut game = game();
        game.debug_set_vp(3);
        game.debug_trigger_event(REFORMER, Side::Ussr);
        let request = game.pending_request().unwrap();
        assert_eq!(request.reps(), 6);
        assert_eq!(request.max_per_option(), 2);
        assert!(game.state().baskets.has(Side::Ussr, EffectTag::Reformer));
    }

    #[test]
    fn test_kal_007_grants_ops_only_with_korea() {
        let mut game = game();
        game.debug_trigger_event(KAL_007, Side::Us);
        assert_eq!(game.state().vp, -2);
        assert!(game.pending_request().is_none());

        game.debug_set_influence(SOUTH_KOREA, Side::Us, 3);
        game.debug_trigger_event(KAL_007, Side::Us);
        let request = game.pending_request().unwrap();
        assert_eq!(request.kind, InputKind::CardAction);
        assert!(!request.available_options().contains(&InputOption::Action(CardAction::Coup)));
    }

    #[test]
    fn test_terrorism_hits_twice_after_hostage_crisis() {
        let mut game = game();
        hand(&mut game, Side::Us, &[NATO, DUCK_AND_COVER, CHINA_CARD]);
        game.state.baskets.add(Side::Us, EffectTag::IranianHostageCrisis);
        game.debug_trigger_event(TERRORISM, Side::Ussr);
        let request = game.pending_request().unwrap();
        assert_eq!(request.side, Side::Neutral);
        assert_eq!(request.reps(), 2);
        assert_eq!(request.available_options().len(), 2);
    }

    #[test]
    fn test_chernobyl_region_choice() {
        let mut game = game();
        game.debug_trigger_event(CHERNOBYL, Side::Us);
        assert_eq!(labels(&game).len(), 6);
        answer(&mut game, InputOption::Label("Africa".into()));
        assert_eq!(game.state().baskets.chernobyl_region(), Some(Region::Africa));
    }

    #[test]
    fn test_debt_crisis_decline_doubles() {
        let mut game = game();
        game.debug_set_influence(BRAZIL, Side::Ussr, 2);
        game.debug_trigger_event(LATIN_AMERICAN_DEBT_CRISIS, Side::Ussr);
        // The US has nothing to discard, so the doubling follows at once.
        answer(&mut game, InputOption::Country(BRAZIL));
        assert_eq!(game.state().map.influence(BRAZIL, Side::Ussr), 4);
    }

    #[test]
    fn test_tear_down_this_wall_cancels_brandt() {
        let mut game = game();
        game.state.baskets.add(Side::Ussr, EffectTag::WillyBrandt);
        game.debug_trigger_event(TEAR_DOWN_THIS_WALL, Side::Us);
        assert!(!game.state().baskets.has(Side::Ussr, EffectTag::WillyBrandt));
        assert_eq!(game.state().map.influence(EAST_GERMANY, Side::Us), 3);
        assert_eq!(labels(&game), vec!["Coup", "Realignments", "Neither"]);
    }

    #[test]
    fn test_aldrich_ames_discards_chosen_card() {
        let mut game = game();
        hand(&mut game, Side::Us, &[NATO, CHINA_CARD]);
        game.debug_trigger_event(ALDRICH_AMES, Side::Ussr);
        assert!(game.state().revealed[Side::Us].contains(&NATO));
        answer(&mut game, InputOption::Card(NATO));
        assert_eq!(game.state().card_location(NATO), Some(Pile::Discard));
    }

    #[test]
    fn test_wargames_ends_game() {
        let mut game = game();
        game.debug_set_defcon(2);
        game.debug_set_vp(-3);
        game.debug_trigger_event(WARGAMES, Side::Us);
        answer(&mut game, InputOption::Label("End the game".into()));
        assert_eq!(game.state().vp, 3);
        assert_eq!(game.result(), Some(GameResult::new(Some(Side::Ussr), VictoryReason::Wargames)));
    }

    #[test]
    fn test_solidarity_prerequisite() {
        let mut game = game();
        assert!(!solidarity_playable(&game, Side::Us));
        game.state.baskets.add(Side::Us, EffectTag::JohnPaulII);
        assert!(solidarity_playable(&game, Side::Us));
        game.debug_trigger_event(SOLIDARITY, Side::Us);
        assert_eq!(game.state().map.influence(POLAND, Side::Us), 3);
        assert!(!solidarity_playable(&game, Side::Us));
    }
}
