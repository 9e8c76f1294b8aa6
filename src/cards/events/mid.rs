//! Mid War events.

use super::{blank_ops, countries_in, countries_where, hand_without_china, reveal_hand, war_target};
use crate::cards::ids::{BLANK_1_OP, BLANK_2_OP, BLANK_4_OP, CHE, CHINA_CARD, GRAIN_SALES, JUNTA, NORTH_SEA_OIL};
use crate::core::{Pile, Side};
use crate::effects::hooks::nato_shield;
use crate::effects::EffectTag;
use crate::engine::{card_request, Game};
use crate::map::data::*;
use crate::map::{CountryId, CountrySet, Region};
use crate::stack::{Callback, CoupPlan, InfluenceEdit, InfluencePick, PickUse, RealignPlan, Stage, WarPlan};

const OPEC_COUNTRIES: [CountryId; 7] = [EGYPT, IRAN, LIBYA, SAUDI_ARABIA, IRAQ, GULF_STATES, VENEZUELA];

const MUSLIM_COUNTRIES: [CountryId; 8] = [SUDAN, IRAN, IRAQ, EGYPT, LIBYA, SAUDI_ARABIA, SYRIA, JORDAN];

fn battlegrounds_controlled(game: &Game, side: Side, regions: &[Region]) -> usize {
    let map = &game.state.map;
    CountryId::all()
        .filter(|&c| c.is_battleground() && (regions.is_empty() || regions.iter().any(|&r| c.in_region(r))))
        .filter(|&c| map.controls(c, side))
        .count()
}

// =============================================================================
// Events
// =============================================================================

pub(crate) fn brush_war(game: &mut Game, side: Side) {
    let shield = if side == Side::Ussr {
        nato_shield(&game.state.baskets, &game.state.map)
    } else {
        CountrySet::new()
    };
    let targets: Vec<_> = CountryId::all()
        .filter(|&c| !c.is_superpower() && c.stability() <= 2 && !shield.contains(c))
        .collect();
    let Some(&first) = targets.first() else {
        return;
    };
    let plan = WarPlan { threshold: 3, vp: 1, milops: 3, ..WarPlan::new(side, first) };
    war_target(game, plan, targets, "Choose a stability 1 or 2 country to invade");
}

pub(crate) fn arms_race(game: &mut Game, side: Side) {
    let (own, other) = (game.state.milops[side], game.state.milops[side.opp()]);
    if own <= other {
        return;
    }
    let vp = if own >= game.state.defcon { 3 } else { 1 };
    game.award_vp(side, vp);
}

pub(crate) fn cuban_missile_crisis(game: &mut Game, side: Side) {
    game.set_defcon(2);
    game.state.baskets.add(side, EffectTag::CubanMissileCrisis);
}

pub(crate) fn nuclear_subs(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::NuclearSubs);
}

pub(crate) fn quagmire(game: &mut Game, side: Side) {
    let baskets = &mut game.state.baskets;
    baskets.remove(side.opp(), EffectTag::Norad);
    baskets.add(side.opp(), EffectTag::Quagmire);
}

pub(crate) fn salt_negotiations(game: &mut Game, side: Side) {
    game.change_defcon(2);
    game.state.baskets.add(side, EffectTag::SaltNegotiations);
    let cards: Vec<_> = game
        .state
        .discard
        .iter()
        .copied()
        .filter(|&c| !game.card(c).is_scoring())
        .collect();
    let request = card_request(
        side,
        "Take a non-scoring card from the discard pile",
        cards,
        Callback::TakeFromDiscard { side, trigger: false },
    )
    .with_stop("Do not take a card");
    game.set_request(request);
}

pub(crate) fn bear_trap(game: &mut Game, side: Side) {
    game.state.baskets.add(side.opp(), EffectTag::BearTrap);
}

pub(crate) fn summit(game: &mut Game, _: Side) {
    game.push(Stage::Summit);
}

pub(crate) fn how_i_learned(game: &mut Game, side: Side) {
    game.change_milops(side, 5);
    let options = (1..=5u8)
        .map(|level| (format!("DEFCON {level}"), vec![Stage::SetDefcon(level)]))
        .collect();
    game.choose(side, "Set the DEFCON level", options);
}

/// Two influence in Latin America, then a free coup or realignments there.
pub(crate) fn junta(game: &mut Game, side: Side) {
    let ops = game.card_ops(side, JUNTA);
    let latin = countries_in(&[Region::CentralAmerica, Region::SouthAmerica]);
    let pick = InfluencePick::own(
        side,
        InfluenceEdit::Add(2),
        latin,
        1,
        "Add 2 influence in a Central or South American country",
    );
    let coup = CoupPlan::new(side, ops).free().within(latin).optional();
    let realign = RealignPlan { free: true, targets: Some(latin), ..RealignPlan::new(side, ops) };
    game.push_all([
        Stage::Influence(pick),
        Stage::Choose {
            side,
            prompt: "Junta: free operation in Central or South America".to_string(),
            options: vec![
                ("Coup".to_string(), vec![Stage::Coup(coup)]),
                ("Realignments".to_string(), vec![Stage::Realign(realign)]),
                ("Neither".to_string(), Vec::new()),
            ],
        },
    ]);
}

pub(crate) fn kitchen_debates(game: &mut Game, side: Side) {
    game.award_vp(side, 2);
}

pub(crate) fn missile_envy(game: &mut Game, side: Side) {
    let giver = side.opp();
    let cards = hand_without_china(game, giver);
    let Some(best) = cards.iter().map(|&c| game.card(c).ops).max() else {
        return;
    };
    let highest: Vec<_> = cards.into_iter().filter(|&c| game.card(c).ops == best).collect();
    let request = card_request(
        giver,
        "Give your highest operations card",
        highest,
        Callback::MissileEnvyGive { receiver: side },
    );
    game.set_request(request);
}

pub(crate) fn we_will_bury_you(game: &mut Game, side: Side) {
    game.change_defcon(-1);
    game.state.baskets.add(side, EffectTag::WeWillBuryYou);
}

pub(crate) fn brezhnev_doctrine(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::BrezhnevDoctrine);
}

pub(crate) fn portuguese_empire(game: &mut Game, side: Side) {
    game.state.map.add_influence(ANGOLA, side, 2);
    game.state.map.add_influence(SE_AFRICAN_STATES, side, 2);
}

pub(crate) fn south_african_unrest(game: &mut Game, side: Side) {
    let add = |country, n| Stage::EditInfluence(country, side, InfluenceEdit::Add(n));
    let options = vec![
        ("2 in South Africa".to_string(), vec![add(SOUTH_AFRICA, 2)]),
        ("1 in South Africa, 2 in Angola".to_string(), vec![add(SOUTH_AFRICA, 1), add(ANGOLA, 2)]),
        ("1 in South Africa, 2 in Botswana".to_string(), vec![add(SOUTH_AFRICA, 1), add(BOTSWANA, 2)]),
        (
            "1 each in South Africa, Angola and Botswana".to_string(),
            vec![add(SOUTH_AFRICA, 1), add(ANGOLA, 1), add(BOTSWANA, 1)],
        ),
    ];
    game.choose(side, "South African Unrest", options);
}

pub(crate) fn allende(game: &mut Game, side: Side) {
    game.state.map.add_influence(CHILE, side, 2);
}

pub(crate) fn willy_brandt(game: &mut Game, side: Side) {
    game.award_vp(side, 1);
    game.state.map.add_influence(WEST_GERMANY, side, 1);
    game.state.baskets.add(side, EffectTag::WillyBrandt);
}

pub(crate) fn muslim_revolution(game: &mut Game, side: Side) {
    let countries: CountrySet = MUSLIM_COUNTRIES.into_iter().collect();
    let pick = InfluencePick::opponent(
        side,
        InfluenceEdit::RemoveAll,
        countries,
        2,
        "Remove all US influence from 2 countries",
    )
    .max_per_country(1);
    game.influence_pick(pick);
}

pub(crate) fn abm_treaty(game: &mut Game, side: Side) {
    game.change_defcon(1);
    blank_ops(game, side, BLANK_4_OP, false);
}

pub(crate) fn cultural_revolution(game: &mut Game, side: Side) {
    if game.state.holds(side.opp(), CHINA_CARD) {
        game.state.move_card(CHINA_CARD, Pile::Hand(side));
        game.state.china_card_playable = true;
    } else if game.state.holds(side, CHINA_CARD) {
        game.award_vp(side, 1);
    }
}

pub(crate) fn flower_power(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::FlowerPower);
}

pub(crate) fn u2_incident(game: &mut Game, side: Side) {
    game.award_vp(side, 1);
    game.state.baskets.add(side, EffectTag::U2Incident);
}

pub(crate) fn opec(game: &mut Game, side: Side) {
    let map = &game.state.map;
    let vp = OPEC_COUNTRIES.iter().filter(|&&c| map.controls(c, side)).count() as i32;
    game.award_vp(side, vp);
}

pub(crate) fn lone_gunman(game: &mut Game, side: Side) {
    reveal_hand(game, side.opp());
    blank_ops(game, side, BLANK_1_OP, false);
}

pub(crate) fn colonial_rear_guards(game: &mut Game, side: Side) {
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

pub(crate) fn panama_canal_returned(game: &mut Game, side: Side) {
    for country in [PANAMA, COSTA_RICA, VENEZUELA] {
        game.state.map.add_influence(country, side, 1);
    }
}

pub(crate) fn camp_david_accords(game: &mut Game, side: Side) {
    game.award_vp(side, 1);
    for country in [ISRAEL, JORDAN, EGYPT] {
        game.state.map.add_influence(country, side, 1);
    }
    game.state.baskets.add(side, EffectTag::CampDavid);
}

pub(crate) fn puppet_governments(game: &mut Game, side: Side) {
    let map = &game.state.map;
    let empty = countries_where(|c| map.influence(c, Side::Us) == 0 && map.influence(c, Side::Ussr) == 0);
    let pick = InfluencePick::own(
        side,
        InfluenceEdit::Add(1),
        empty,
        3,
        "Add 1 influence in each of 3 countries with no influence",
    )
    .max_per_country(1);
    game.influence_pick(pick);
}

pub(crate) fn grain_sales(game: &mut Game, side: Side) {
    let cards: Vec<_> = hand_without_china(game, side.opp())
        .into_iter()
        .filter(|&c| c != GRAIN_SALES)
        .collect();
    if cards.is_empty() {
        blank_ops(game, side, BLANK_2_OP, false);
        return;
    }
    let request = card_request(
        Side::Neutral,
        "Grain Sales: random USSR card",
        cards,
        Callback::RandomCard { purpose: PickUse::GrainSales, from: side.opp() },
    );
    game.set_request(request);
}

pub(crate) fn john_paul_ii(game: &mut Game, side: Side) {
    game.state.map.remove_influence(POLAND, side.opp(), 2);
    game.state.map.add_influence(POLAND, side, 1);
    game.state.baskets.add(side, EffectTag::JohnPaulII);
}

pub(crate) fn death_squads(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::DeathSquads);
}

pub(crate) fn oas_founded(game: &mut Game, side: Side) {
    let pick = InfluencePick::own(
        side,
        InfluenceEdit::Add(1),
        countries_in(&[Region::CentralAmerica, Region::SouthAmerica]),
        2,
        "Add 2 influence in Central or South America",
    );
    game.influence_pick(pick);
}

pub(crate) fn nixon_plays_the_china_card(game: &mut Game, side: Side) {
    if game.state.holds(side.opp(), CHINA_CARD) {
        game.state.move_card(CHINA_CARD, Pile::Hand(side));
        game.state.china_card_playable = false;
    } else if game.state.holds(side, CHINA_CARD) {
        game.award_vp(side, 2);
    }
}

pub(crate) fn sadat_expels_soviets(game: &mut Game, side: Side) {
    game.state.map.set_influence(EGYPT, side.opp(), 0);
    game.state.map.add_influence(EGYPT, side, 1);
}

pub(crate) fn shuttle_diplomacy(game: &mut Game, side: Side) {
    game.state.baskets.add(side, EffectTag::ShuttleDiplomacy);
}

pub(crate) fn voice_of_america(game: &mut Game, side: Side) {
    let pick = InfluencePick::opponent(
        side,
        InfluenceEdit::Remove(1),
        countries_where(|c| !c.in_region(Region::Europe)),
        4,
        "Remove 4 USSR influence from countries outside Europe",
    )
    .max_per_country(2);
    game.influence_pick(pick);
}

pub(crate) fn liberation_theology(game: &mut Game, side: Side) {
    let pick = InfluencePick::own(
        side,
        InfluenceEdit::Add(1),
        countries_in(&[Region::CentralAmerica]),
        3,
        "Add 3 influence in Central America",
    )
    .max_per_country(2);
    game.influence_pick(pick);
}

pub(crate) fn ussuri_river_skirmish(game: &mut Game, side: Side) {
    if game.state.holds(side.opp(), CHINA_CARD) {
        game.state.move_card(CHINA_CARD, Pile::Hand(side));
        game.state.china_card_playable = true;
        return;
    }
    if game.state.holds(side, CHINA_CARD) {
        let pick = InfluencePick::own(side, InfluenceEdit::Add(1), countries_in(&[Region::Asia]), 4, "Add 4 influence in Asia")
            .max_per_country(2);
        game.influence_pick(pick);
    }
}

pub(crate) fn ask_not(game: &mut Game, side: Side) {
    let cards = hand_without_china(game, side);
    let count = cards.len() as u32;
    let request = card_request(side, "Discard any number of cards", cards, Callback::AskNot { count })
        .with_reps(count)
        .with_max_per_option(1)
        .with_stop("Stop discarding");
    game.set_request(request);
}

pub(crate) fn alliance_for_progress(game: &mut Game, side: Side) {
    let vp = battlegrounds_controlled(game, side, &[Region::CentralAmerica, Region::SouthAmerica]) as i32;
    game.award_vp(side, vp);
}

pub(crate) fn one_small_step(game: &mut Game, side: Side) {
    game.change_space(side, 2);
}

pub(crate) fn che(game: &mut Game, side: Side) {
    let ops = game.card_ops(side, CHE);
    let targets = countries_where(|c| {
        !c.is_battleground()
            && [Region::CentralAmerica, Region::SouthAmerica, Region::Africa].iter().any(|&r| c.in_region(r))
    });
    let plan = CoupPlan { second_coup: true, ..CoupPlan::new(side, ops).within(targets).optional() };
    game.push(Stage::Coup(plan));
}

/// Draw five cards face up; the US discards any of them and the rest go
/// back into the draw pile.
pub(crate) fn our_man_in_tehran(game: &mut Game, side: Side) {
    for _ in 0..5 {
        let Some(card) = game.state.draw_pile.pop_back() else {
            break;
        };
        game.state.neutral_hand.push_back(card);
    }
    let cards: Vec<_> = game.state.neutral_hand.iter().copied().collect();
    let count = cards.len() as u32;
    let request = card_request(side, "Discard any of the drawn cards", cards, Callback::OurManInTehran)
        .with_reps(count)
        .with_max_per_option(1)
        .with_stop("Keep the rest");
    game.set_request(request);
}

// =============================================================================
// Prerequisites
// =============================================================================

pub(crate) fn kitchen_debates_playable(game: &Game, side: Side) -> bool {
    battlegrounds_controlled(game, side, &[]) > battlegrounds_controlled(game, side.opp(), &[])
}

pub(crate) fn willy_brandt_playable(game: &Game, _: Side) -> bool {
    !game.state.baskets.has(Side::Us, EffectTag::TearDownThisWall)
}

pub(crate) fn muslim_revolution_playable(game: &Game, _: Side) -> bool {
    !game.state.baskets.has(Side::Us, EffectTag::Awacs)
}

pub(crate) fn flower_power_playable(game: &Game, _: Side) -> bool {
    !game.state.baskets.has(Side::Us, EffectTag::EvilEmpire)
}

pub(crate) fn opec_playable(game: &Game, _: Side) -> bool {
    !game.state.baskets.has(Side::Us, EffectTag::NorthSeaOil) && !game.state.removed.contains(&NORTH_SEA_OIL)
}

pub(crate) fn one_small_step_playable(game: &Game, side: Side) -> bool {
    game.state.space[side] < game.state.space[side.opp()]
}

pub(crate) fn our_man_in_tehran_playable(game: &Game, side: Side) -> bool {
    countries_in(&[Region::MiddleEast]).iter().any(|c| game.state.map.controls(c, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::events::testing::{answer, game, hand, labels};
    use crate::cards::ids::*;
    use crate::input::{InputKind, InputOption};

    #[test]
    fn test_arms_race_needs_lead() {
        let mut game = game();
        game.state.milops[Side::Ussr] = 2;
        game.state.milops[Side::Us] = 2;
        game.debug_trigger_event(ARMS_RACE, Side::Ussr);
        assert_eq!(game.state().vp, 0);

        game.state.milops[Side::Ussr] = 5;
        game.debug_trigger_event(ARMS_RACE, Side::Ussr);
        assert_eq!(game.state().vp, 3);
    }

    #[test]
    fn test_cuban_missile_crisis() {
        let mut game = game();
        game.debug_trigger_event(CUBAN_MISSILE_CRISIS, Side::Ussr);
        assert_eq!(game.state().defcon, 2);
        assert!(game.state().baskets.has(Side::Ussr, EffectTag::CubanMissileCrisis));
    }

    #[test]
    fn test_quagmire_cancels_norad() {
        let mut game = game();
        game.state.baskets.add(Side::Us, EffectTag::Norad);
        game.debug_trigger_event(QUAGMIRE, Side::Ussr);
        assert!(!game.state().baskets.has(Side::Us, EffectTag::Norad));
        assert!(game.state().baskets.has(Side::Us, EffectTag::Quagmire));
    }

    #[test]
    fn test_how_i_learned_sets_defcon() {
        let mut game = game();
        game.debug_trigger_event(HOW_I_LEARNED, Side::Us);
        assert_eq!(game.state().milops[Side::Us], 5);
        assert_eq!(labels(&game).len(), 5);
        answer(&mut game, InputOption::Label("DEFCON 3".into()));
        assert_eq!(game.state().defcon, 3);
    }

    #[test]
    fn test_junta_influence_then_choice() {
        let mut game = game();
        game.debug_trigger_event(JUNTA, Side::Ussr);
        answer(&mut game, InputOption::Country(CHILE));
        assert_eq!(game.state().map.influence(CHILE, Side::Ussr), 2);
        assert_eq!(labels(&game), vec!["Coup", "Realignments", "Neither"]);
        answer(&mut game, InputOption::Label("Neither".into()));
        assert!(game.pending_request().is_none());
    }

    #[test]
    fn test_missile_envy_offers_highest_cards() {
        let mut game = game();
        hand(&mut game, Side::Us, &[NATO, MARSHALL_PLAN, DUCK_AND_COVER, CHINA_CARD]);
        game.debug_trigger_event(MISSILE_ENVY, Side::Ussr);
        let request = game.pending_request().unwrap();
        assert_eq!(request.side, Side::Us);
        let options = request.available_options();
        assert_eq!(options.len(), 2);
        assert!(options.contains(&InputOption::Card(NATO)));
        assert!(options.contains(&InputOption::Card(MARSHALL_PLAN)));
    }

    #[test]
    fn test_south_african_unrest_branch() {
        let mut game = game();
        game.debug_trigger_event(SOUTH_AFRICAN_UNREST, Side::Ussr);
        answer(&mut game, InputOption::Label("1 in South Africa, 2 in Botswana".into()));
        assert_eq!(game.state().map.influence(SOUTH_AFRICA, Side::Ussr), 1);
        assert_eq!(game.state().map.influence(BOTSWANA, Side::Ussr), 2);
    }

    #[test]
    fn test_cultural_revolution_takes_china_card() {
        let mut game = game();
        hand(&mut game, Side::Us, &[CHINA_CARD]);
        game.state.china_card_playable = false;
        game.debug_trigger_event(CULTURAL_REVOLUTION, Side::Ussr);
        assert!(game.state().holds(Side::Ussr, CHINA_CARD));
        assert!(game.state().china_card_playable);

        game.debug_trigger_event(CULTURAL_REVOLUTION, Side::Ussr);
        assert_eq!(game.state().vp, 1);
    }

    #[test]
    fn test_nixon_passes_china_card_face_down() {
        let mut game = game();
        hand(&mut game, Side::Ussr, &[CHINA_CARD]);
        game.debug_trigger_event(NIXON_PLAYS_THE_CHINA_CARD, Side::Us);
        assert!(game.state().holds(Side::Us, CHINA_CARD));
        assert!(!game.state().china_card_playable);
    }

    #[test]
    fn test_opec_counts_controlled_oil() {
        let mut game = game();
        game.debug_set_influence(LIBYA, Side::Ussr, 2);
        game.debug_set_influence(IRAQ, Side::Ussr, 3);
        game.debug_set_influence(VENEZUELA, Side::Ussr, 1);
        game.debug_trigger_event(OPEC, Side::Ussr);
        assert_eq!(game.state().vp, 2);
    }

    #[test]
    fn test_opec_blocked_after_north_sea_oil() {
        let mut game = game();
        assert!(opec_playable(&game, Side::Ussr));
        game.state.put(Pile::Removed, NORTH_SEA_OIL);
        assert!(!opec_playable(&game, Side::Ussr));
    }

    #[test]
    fn test_grain_sales_without_cards_gives_ops() {
        let mut game = game();
        game.debug_trigger_event(GRAIN_SALES, Side::Us);
        let request = game.pending_request().unwrap();
        assert_eq!(request.side, Side::Us);
        assert_eq!(request.kind, InputKind::CardAction);
    }

    #[test]
    fn test_grain_sales_return_branch() {
        let mut game = game();
        hand(&mut game, Side::Ussr, &[FIDEL]);
        game.debug_trigger_event(GRAIN_SALES, Side::Us);
        answer(&mut game, InputOption::Card(FIDEL));
        assert_eq!(labels(&game).len(), 2);
        answer(&mut game, InputOption::Label("Return Fidel and use Grain Sales for operations".into()));
        assert!(game.state().holds(Side::Ussr, FIDEL));
        assert_eq!(game.pending_request().unwrap().kind, InputKind::CardAction);
    }

    #[test]
    fn test_ask_not_replaces_discards() {
        let mut game = game();
        hand(&mut game, Side::Us, &[NATO, DUCK_AND_COVER, CHINA_CARD]);
        for card in [FIDEL, NASSER, BLOCKADE] {
            game.state.put(Pile::DrawPile, card);
        }
        game.debug_trigger_event(ASK_NOT, Side::Us);
        assert_eq!(game.pending_request().unwrap().reps(), 2);
        answer(&mut game, InputOption::Card(NATO));
        answer(&mut game, InputOption::Stop);
        assert_eq!(game.state().card_location(NATO), Some(Pile::Discard));
        assert_eq!(game.state().hand(Side::Us).len(), 3);
    }

    #[test]
    fn test_alliance_for_progress() {
        let mut game = game();
        game.debug_set_influence(PANAMA, Side::Us, 2);
        game.debug_set_influence(CHILE, Side::Us, 3);
        game.debug_set_influence(COSTA_RICA, Side::Us, 3);
        game.debug_trigger_event(ALLIANCE_FOR_PROGRESS, Side::Us);
        assert_eq!(game.state().vp, -2);
    }

    #[test]
    fn test_kitchen_debates_prerequisite() {
        let mut game = game();
        game.debug_set_influence(PANAMA, Side::Us, 2);
        assert!(kitchen_debates_playable(&game, Side::Us));
        game.debug_set_influence(CUBA, Side::Ussr, 3);
        assert!(!kitchen_debates_playable(&game, Side::Us));
    }

    #[test]
    fn test_brush_war_respects_nato() {
        let mut game = game();
        game.state.baskets.add(Side::Us, EffectTag::Nato);
        game.debug_set_influence(GREECE, Side::Us, 2);
        game.debug_trigger_event(BRUSH_WAR, Side::Ussr);
        let options = game.pending_request().unwrap().available_options();
        assert!(!options.contains(&InputOption::Country(GREECE)));
        assert!(options.contains(&InputOption::Country(PANAMA)));
        assert!(!options.contains(&InputOption::Country(ISRAEL)));
    }

    #[test]
    fn test_our_man_in_tehran_returns_rest() {
        let mut game = game();
        for card in [FIDEL, NASSER, BLOCKADE, NATO, SUMMIT, JUNTA] {
            game.state.put(Pile::DrawPile, card);
        }
        game.debug_trigger_event(OUR_MAN_IN_TEHRAN, Side::Us);
        assert_eq!(game.state().neutral_hand.len(), 5);
        answer(&mut game, InputOption::Card(JUNTA));
        answer(&mut game, InputOption::Stop);
        assert_eq!(game.state().card_location(JUNTA), Some(Pile::Discard));
        assert!(game.state().neutral_hand.is_empty());
        // The rest goes back through the shuffle, drawn one card at a time.
        let request = game.pending_request().unwrap();
        assert_eq!(request.side, Side::Neutral);
        assert_eq!(request.reps(), 5);
    }
}
