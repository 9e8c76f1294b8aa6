//! The standard card catalog.
//!
//! Builds the registry of all 110 event and scoring cards plus the four
//! blank stand-ins used when an event grants operations. The registry is
//! built once per process and shared behind an `Arc`.

use std::sync::{Arc, OnceLock};

use super::definition::{CardDefinition, CardId, Disposal, Era};
use super::events::{early, late, mid, scoring};
use super::registry::CardRegistry;
use crate::core::Side;

static CATALOG: OnceLock<Arc<CardRegistry>> = OnceLock::new();

/// The process-wide catalog.
pub fn shared() -> Arc<CardRegistry> {
    Arc::clone(CATALOG.get_or_init(|| Arc::new(standard_catalog())))
}

/// Build a fresh registry holding every card.
#[must_use]
pub fn standard_catalog() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for card in early_war().into_iter().chain(mid_war()).chain(late_war()).chain(blanks()) {
        registry.register(card);
    }
    tracing::debug!(target: "cold_war::cards", cards = registry.len(), "catalog.built");
    registry
}

// =============================================================================
// Early War
// =============================================================================

fn early_war() -> Vec<CardDefinition> {
    vec![
        CardDefinition::scoring(CardId(1), "Asia Scoring", Era::Early).with_event(scoring::asia),
        CardDefinition::scoring(CardId(2), "Europe Scoring", Era::Early).with_event(scoring::europe),
        CardDefinition::scoring(CardId(3), "Middle East Scoring", Era::Early).with_event(scoring::middle_east),
        CardDefinition::new(CardId(4), "Duck and Cover", Era::Early, 3, Side::Us)
            .with_event(early::duck_and_cover),
        CardDefinition::new(CardId(5), "Five Year Plan", Era::Early, 3, Side::Us)
            .with_event(early::five_year_plan),
        CardDefinition::new(CardId(6), "The China Card", Era::Early, 4, Side::Neutral)
            .no_headline()
            .no_action_event()
            .with_disposal(Disposal::ToOpponent),
        CardDefinition::new(CardId(7), "Socialist Governments", Era::Early, 3, Side::Ussr)
            .with_event(early::socialist_governments)
            .with_playable(early::socialist_governments_playable),
        CardDefinition::new(CardId(8), "Fidel", Era::Early, 2, Side::Ussr).unique().with_event(early::fidel),
        CardDefinition::new(CardId(9), "Vietnam Revolts", Era::Early, 2, Side::Ussr)
            .unique()
            .with_event(early::vietnam_revolts),
        CardDefinition::new(CardId(10), "Blockade", Era::Early, 1, Side::Ussr)
            .unique()
            .with_event(early::blockade),
        CardDefinition::new(CardId(11), "Korean War", Era::Early, 2, Side::Ussr)
            .unique()
            .with_event(early::korean_war),
        CardDefinition::new(CardId(12), "Romanian Abdication", Era::Early, 1, Side::Ussr)
            .unique()
            .with_event(early::romanian_abdication),
        CardDefinition::new(CardId(13), "Arab-Israeli War", Era::Early, 2, Side::Ussr)
            .with_event(early::arab_israeli_war)
            .with_playable(early::arab_israeli_war_playable),
        CardDefinition::new(CardId(14), "COMECON", Era::Early, 3, Side::Ussr)
            .unique()
            .with_event(early::comecon),
        CardDefinition::new(CardId(15), "Nasser", Era::Early, 1, Side::Ussr).unique().with_event(early::nasser),
        CardDefinition::new(CardId(16), "Warsaw Pact Formed", Era::Early, 3, Side::Ussr)
            .unique()
            .with_event(early::warsaw_pact),
        CardDefinition::new(CardId(17), "De Gaulle Leads France", Era::Early, 3, Side::Ussr)
            .unique()
            .with_event(early::de_gaulle),
        CardDefinition::new(CardId(18), "Captured Nazi Scientist", Era::Early, 1, Side::Neutral)
            .unique()
            .with_event(early::captured_nazi_scientist),
        CardDefinition::new(CardId(19), "Truman Doctrine", Era::Early, 1, Side::Us)
            .unique()
            .with_event(early::truman_doctrine),
        CardDefinition::new(CardId(20), "Olympic Games", Era::Early, 2, Side::Neutral)
            .with_event(early::olympic_games),
        CardDefinition::new(CardId(21), "NATO", Era::Early, 4, Side::Us)
            .unique()
            .with_event(early::nato)
            .with_playable(early::nato_playable),
        CardDefinition::new(CardId(22), "Independent Reds", Era::Early, 2, Side::Us)
            .unique()
            .with_event(early::independent_reds),
        CardDefinition::new(CardId(23), "Marshall Plan", Era::Early, 4, Side::Us)
            .unique()
            .with_event(early::marshall_plan),
        CardDefinition::new(CardId(24), "Indo-Pakistani War", Era::Early, 2, Side::Neutral)
            .with_event(early::indo_pakistani_war),
        CardDefinition::new(CardId(25), "Containment", Era::Early, 3, Side::Us)
            .unique()
            .with_event(early::containment),
        CardDefinition::new(CardId(26), "CIA Created", Era::Early, 1, Side::Us)
            .unique()
            .with_event(early::cia_created),
        CardDefinition::new(CardId(27), "US/Japan Mutual Defense Pact", Era::Early, 4, Side::Us)
            .unique()
            .with_event(early::us_japan_pact),
        CardDefinition::new(CardId(28), "Suez Crisis", Era::Early, 3, Side::Ussr)
            .unique()
            .with_event(early::suez_crisis),
        CardDefinition::new(CardId(29), "East European Unrest", Era::Early, 3, Side::Us)
            .with_event(early::east_european_unrest),
        CardDefinition::new(CardId(30), "Decolonization", Era::Early, 2, Side::Ussr)
            .with_event(early::decolonization),
        CardDefinition::new(CardId(31), "Red Scare/Purge", Era::Early, 4, Side::Neutral)
            .with_event(early::red_scare_purge),
        CardDefinition::new(CardId(32), "UN Intervention", Era::Early, 1, Side::Neutral)
            .no_headline()
            .with_event(early::un_intervention)
            .with_playable(early::un_intervention_playable),
        CardDefinition::new(CardId(33), "De-Stalinization", Era::Early, 3, Side::Ussr)
            .unique()
            .with_event(early::de_stalinization),
        CardDefinition::new(CardId(34), "Nuclear Test Ban", Era::Early, 4, Side::Neutral)
            .with_event(early::nuclear_test_ban),
        CardDefinition::new(CardId(35), "Formosan Resolution", Era::Early, 2, Side::Us)
            .unique()
            .with_event(early::formosan_resolution),
        CardDefinition::new(CardId(103), "Defectors", Era::Early, 2, Side::Us)
            .no_action_event()
            .with_event(early::defectors),
        CardDefinition::new(CardId(104), "The Cambridge Five", Era::Early, 2, Side::Ussr)
            .optional()
            .with_event(early::cambridge_five)
            .with_playable(early::cambridge_five_playable),
        CardDefinition::new(CardId(105), "Special Relationship", Era::Early, 2, Side::Us)
            .optional()
            .with_event(early::special_relationship)
            .with_playable(early::special_relationship_playable),
        CardDefinition::new(CardId(106), "NORAD", Era::Early, 3, Side::Us)
            .unique()
            .optional()
            .with_event(early::norad),
    ]
}

// =============================================================================
// Mid War
// =============================================================================

fn mid_war() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(CardId(36), "Brush War", Era::Mid, 3, Side::Neutral).with_event(mid::brush_war),
        CardDefinition::scoring(CardId(37), "Central America Scoring", Era::Mid)
            .with_event(scoring::central_america),
        CardDefinition::scoring(CardId(38), "Southeast Asia Scoring", Era::Mid)
            .unique()
            .with_event(scoring::southeast_asia),
        CardDefinition::new(CardId(39), "Arms Race", Era::Mid, 3, Side::Neutral).with_event(mid::arms_race),
        CardDefinition::new(CardId(40), "Cuban Missile Crisis", Era::Mid, 3, Side::Neutral)
            .unique()
            .with_event(mid::cuban_missile_crisis),
        CardDefinition::new(CardId(41), "Nuclear Subs", Era::Mid, 2, Side::Us)
            .unique()
            .with_event(mid::nuclear_subs),
        CardDefinition::new(CardId(42), "Quagmire", Era::Mid, 3, Side::Ussr).unique().with_event(mid::quagmire),
        CardDefinition::new(CardId(43), "SALT Negotiations", Era::Mid, 3, Side::Neutral)
            .unique()
            .with_event(mid::salt_negotiations),
        CardDefinition::new(CardId(44), "Bear Trap", Era::Mid, 3, Side::Us).unique().with_event(mid::bear_trap),
        CardDefinition::new(CardId(45), "Summit", Era::Mid, 1, Side::Neutral).with_event(mid::summit),
        CardDefinition::new(CardId(46), "How I Learned to Stop Worrying", Era::Mid, 2, Side::Neutral)
            .unique()
            .with_event(mid::how_i_learned),
        CardDefinition::new(CardId(47), "Junta", Era::Mid, 2, Side::Neutral).with_event(mid::junta),
        CardDefinition::new(CardId(48), "Kitchen Debates", Era::Mid, 1, Side::Us)
            .unique()
            .with_event(mid::kitchen_debates)
            .with_playable(mid::kitchen_debates_playable),
        CardDefinition::new(CardId(49), "Missile Envy", Era::Mid, 2, Side::Neutral)
            .with_disposal(Disposal::Exchange)
            .with_event(mid::missile_envy),
        CardDefinition::new(CardId(50), "We Will Bury You", Era::Mid, 4, Side::Ussr)
            .unique()
            .with_event(mid::we_will_bury_you),
        CardDefinition::new(CardId(51), "Brezhnev Doctrine", Era::Mid, 3, Side::Ussr)
            .unique()
            .with_event(mid::brezhnev_doctrine),
        CardDefinition::new(CardId(52), "Portuguese Empire Crumbles", Era::Mid, 2, Side::Ussr)
            .unique()
            .with_event(mid::portuguese_empire),
        CardDefinition::new(CardId(53), "South African Unrest", Era::Mid, 2, Side::Ussr)
            .with_event(mid::south_african_unrest),
        CardDefinition::new(CardId(54), "Allende", Era::Mid, 1, Side::Ussr).unique().with_event(mid::allende),
        CardDefinition::new(CardId(55), "Willy Brandt", Era::Mid, 2, Side::Ussr)
            .unique()
            .with_event(mid::willy_brandt)
            .with_playable(mid::willy_brandt_playable),
        CardDefinition::new(CardId(56), "Muslim Revolution", Era::Mid, 4, Side::Ussr)
            .with_event(mid::muslim_revolution)
            .with_playable(mid::muslim_revolution_playable),
        CardDefinition::new(CardId(57), "ABM Treaty", Era::Mid, 4, Side::Neutral).with_event(mid::abm_treaty),
        CardDefinition::new(CardId(58), "Cultural Revolution", Era::Mid, 3, Side::Ussr)
            .unique()
            .with_event(mid::cultural_revolution),
        CardDefinition::new(CardId(59), "Flower Power", Era::Mid, 4, Side::Ussr)
            .unique()
            .with_event(mid::flower_power)
            .with_playable(mid::flower_power_playable),
        CardDefinition::new(CardId(60), "U2 Incident", Era::Mid, 3, Side::Ussr)
            .unique()
            .with_event(mid::u2_incident),
        CardDefinition::new(CardId(61), "OPEC", Era::Mid, 3, Side::Ussr)
            .with_event(mid::opec)
            .with_playable(mid::opec_playable),
        CardDefinition::new(CardId(62), "Lone Gunman", Era::Mid, 1, Side::Ussr)
            .unique()
            .with_event(mid::lone_gunman),
        CardDefinition::new(CardId(63), "Colonial Rear Guards", Era::Mid, 2, Side::Us)
            .with_event(mid::colonial_rear_guards),
        CardDefinition::new(CardId(64), "Panama Canal Returned", Era::Mid, 1, Side::Us)
            .unique()
            .with_event(mid::panama_canal_returned),
        CardDefinition::new(CardId(65), "Camp David Accords", Era::Mid, 2, Side::Us)
            .unique()
            .with_event(mid::camp_david_accords),
        CardDefinition::new(CardId(66), "Puppet Governments", Era::Mid, 2, Side::Us)
            .unique()
            .with_event(mid::puppet_governments),
        CardDefinition::new(CardId(67), "Grain Sales to Soviets", Era::Mid, 2, Side::Us)
            .with_event(mid::grain_sales),
        CardDefinition::new(CardId(68), "John Paul II Elected Pope", Era::Mid, 2, Side::Us)
            .unique()
            .with_event(mid::john_paul_ii),
        CardDefinition::new(CardId(69), "Latin American Death Squads", Era::Mid, 2, Side::Neutral)
            .with_event(mid::death_squads),
        CardDefinition::new(CardId(70), "OAS Founded", Era::Mid, 1, Side::Us)
            .unique()
            .with_event(mid::oas_founded),
        CardDefinition::new(CardId(71), "Nixon Plays The China Card", Era::Mid, 2, Side::Us)
            .unique()
            .with_event(mid::nixon_plays_the_china_card),
        CardDefinition::new(CardId(72), "Sadat Expels Soviets", Era::Mid, 1, Side::Us)
            .unique()
            .with_event(mid::sadat_expels_soviets),
        CardDefinition::new(CardId(73), "Shuttle Diplomacy", Era::Mid, 3, Side::Us)
            .with_disposal(Disposal::Limbo)
            .with_event(mid::shuttle_diplomacy),
        CardDefinition::new(CardId(74), "The Voice of America", Era::Mid, 2, Side::Us)
            .with_event(mid::voice_of_america),
        CardDefinition::new(CardId(75), "Liberation Theology", Era::Mid, 2, Side::Ussr)
            .with_event(mid::liberation_theology),
        CardDefinition::new(CardId(76), "Ussuri River Skirmish", Era::Mid, 3, Side::Us)
            .unique()
            .with_event(mid::ussuri_river_skirmish),
        CardDefinition::new(CardId(77), "Ask Not What Your Country Can Do For You", Era::Mid, 3, Side::Us)
            .unique()
            .with_event(mid::ask_not),
        CardDefinition::new(CardId(78), "Alliance for Progress", Era::Mid, 3, Side::Us)
            .unique()
            .with_event(mid::alliance_for_progress),
        CardDefinition::scoring(CardId(79), "Africa Scoring", Era::Mid).with_event(scoring::africa),
        CardDefinition::new(CardId(80), "One Small Step", Era::Mid, 2, Side::Neutral)
            .with_event(mid::one_small_step)
            .with_playable(mid::one_small_step_playable),
        CardDefinition::scoring(CardId(81), "South America Scoring", Era::Mid)
            .with_event(scoring::south_america),
        CardDefinition::new(CardId(107), "Che", Era::Mid, 3, Side::Ussr).optional().with_event(mid::che),
        CardDefinition::new(CardId(108), "Our Man in Tehran", Era::Mid, 2, Side::Us)
            .unique()
            .optional()
            .with_event(mid::our_man_in_tehran)
            .with_playable(mid::our_man_in_tehran_playable),
    ]
}

// =============================================================================
// Late War
// =============================================================================

fn late_war() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(CardId(82), "Iranian Hostage Crisis", Era::Late, 3, Side::Ussr)
            .unique()
            .with_event(late::iranian_hostage_crisis),
        CardDefinition::new(CardId(83), "The Iron Lady", Era::Late, 3, Side::Us)
            .unique()
            .with_event(late::iron_lady),
        CardDefinition::new(CardId(84), "Reagan Bombs Libya", Era::Late, 2, Side::Us)
            .unique()
            .with_event(late::reagan_bombs_libya),
        CardDefinition::new(CardId(85), "Star Wars", Era::Late, 2, Side::Us)
            .unique()
            .with_event(late::star_wars)
            .with_playable(late::star_wars_playable),
        CardDefinition::new(CardId(86), "North Sea Oil", Era::Late, 3, Side::Us)
            .unique()
            .with_event(late::north_sea_oil),
        CardDefinition::new(CardId(87), "The Reformer", Era::Late, 3, Side::Ussr)
            .unique()
            .with_event(late::reformer),
        CardDefinition::new(CardId(88), "Marine Barracks Bombing", Era::Late, 2, Side::Ussr)
            .unique()
            .with_event(late::marine_barracks),
        CardDefinition::new(CardId(89), "Soviets Shoot Down KAL 007", Era::Late, 4, Side::Us)
            .unique()
            .with_event(late::kal_007),
        CardDefinition::new(CardId(90), "Glasnost", Era::Late, 4, Side::Ussr)
            .unique()
            .with_event(late::glasnost),
        CardDefinition::new(CardId(91), "Ortega Elected in Nicaragua", Era::Late, 2, Side::Ussr)
            .unique()
            .with_event(late::ortega_elected),
        CardDefinition::new(CardId(92), "Terrorism", Era::Late, 2, Side::Neutral).with_event(late::terrorism),
        CardDefinition::new(CardId(93), "Iran-Contra Scandal", Era::Late, 2, Side::Ussr)
            .unique()
            .with_event(late::iran_contra_scandal),
        CardDefinition::new(CardId(94), "Chernobyl", Era::Late, 3, Side::Us)
            .unique()
            .with_event(late::chernobyl),
        CardDefinition::new(CardId(95), "Latin American Debt Crisis", Era::Late, 2, Side::Ussr)
            .unique()
            .with_event(late::latin_american_debt_crisis),
        CardDefinition::new(CardId(96), "Tear Down This Wall", Era::Late, 3, Side::Us)
            .unique()
            .with_event(late::tear_down_this_wall),
        CardDefinition::new(CardId(97), "An Evil Empire", Era::Late, 3, Side::Us)
            .unique()
            .with_event(late::an_evil_empire),
        CardDefinition::new(CardId(98), "Aldrich Ames Remix", Era::Late, 3, Side::Ussr)
            .unique()
            .with_event(late::aldrich_ames),
        CardDefinition::new(CardId(99), "Pershing II Deployed", Era::Late, 3, Side::Ussr)
            .unique()
            .with_event(late::pershing_ii),
        CardDefinition::new(CardId(100), "Wargames", Era::Late, 4, Side::Neutral)
            .unique()
            .with_event(late::wargames)
            .with_playable(late::wargames_playable),
        CardDefinition::new(CardId(101), "Solidarity", Era::Late, 2, Side::Us)
            .unique()
            .with_event(late::solidarity)
            .with_playable(late::solidarity_playable),
        CardDefinition::new(CardId(102), "Iran-Iraq War", Era::Late, 2, Side::Neutral)
            .unique()
            .with_event(late::iran_iraq_war),
        CardDefinition::new(CardId(109), "Yuri and Samantha", Era::Late, 2, Side::Ussr)
            .unique()
            .optional()
            .with_event(late::yuri_and_samantha),
        CardDefinition::new(CardId(110), "AWACS Sale to Saudis", Era::Late, 3, Side::Us)
            .unique()
            .optional()
            .with_event(late::awacs_sale),
    ]
}

fn blanks() -> Vec<CardDefinition> {
    vec![
        CardDefinition::template(CardId(150), "Blank 1 Op Card", 1),
        CardDefinition::template(CardId(151), "Blank 2 Op Card", 2),
        CardDefinition::template(CardId(152), "Blank 3 Op Card", 3),
        CardDefinition::template(CardId(153), "Blank 4 Op Card", 4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ids::{BLANK_4_OP, CHINA_CARD, MISSILE_ENVY, SHUTTLE_DIPLOMACY, UN_INTERVENTION};
    use crate::cards::CardKind;

    #[test]
    fn test_catalog_size() {
        let catalog = standard_catalog();
        assert_eq!(catalog.len(), 114);
        assert_eq!(catalog.iter().filter(|c| c.kind == CardKind::Scoring).count(), 7);
        assert_eq!(catalog.iter().filter(|c| c.is_template()).count(), 4);
    }

    #[test]
    fn test_deck_sizes() {
        let catalog = standard_catalog();
        // The China Card is dealt, not shuffled, but it still belongs to the early era.
        assert_eq!(catalog.deck(Era::Early, false).len(), 36);
        assert_eq!(catalog.deck(Era::Early, true).len(), 39);
        assert_eq!(catalog.deck(Era::Mid, false).len(), 46);
        assert_eq!(catalog.deck(Era::Mid, true).len(), 48);
        assert_eq!(catalog.deck(Era::Late, false).len(), 21);
        assert_eq!(catalog.deck(Era::Late, true).len(), 23);
    }

    #[test]
    fn test_special_cards() {
        let catalog = standard_catalog();
        let china = catalog.card(CHINA_CARD);
        assert_eq!(china.ops, 4);
        assert_eq!(china.disposal, Disposal::ToOpponent);
        assert!(!china.can_headline);
        assert!(!catalog.card(UN_INTERVENTION).can_headline);
        assert_eq!(catalog.card(SHUTTLE_DIPLOMACY).disposal, Disposal::Limbo);
        assert_eq!(catalog.card(MISSILE_ENVY).disposal, Disposal::Exchange);
        assert_eq!(catalog.card(BLANK_4_OP).ops, 4);
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = shared();
        assert_eq!(catalog.by_name("the china card"), Some(CHINA_CARD));
        assert_eq!(catalog.by_name("Missile Envy"), Some(MISSILE_ENVY));
        assert!(catalog.by_name("Space Race").is_none());
    }

    #[test]
    fn test_neutral_unique_cards() {
        let catalog = standard_catalog();
        let neutral_unique: Vec<_> = catalog
            .iter()
            .filter(|c| c.owner == Side::Neutral && c.unique && c.kind == CardKind::Event)
            .map(|c| c.id.0)
            .collect();
        let mut ids = neutral_unique;
        ids.sort_unstable();
        assert_eq!(ids, vec![18, 40, 43, 46, 100, 102]);
    }
}
