//! Named card identifiers, numbered as printed on the cards.

use super::definition::CardId;

pub const ASIA_SCORING: CardId = CardId(1);
pub const EUROPE_SCORING: CardId = CardId(2);
pub const MIDDLE_EAST_SCORING: CardId = CardId(3);
pub const DUCK_AND_COVER: CardId = CardId(4);
pub const FIVE_YEAR_PLAN: CardId = CardId(5);
pub const CHINA_CARD: CardId = CardId(6);
pub const SOCIALIST_GOVERNMENTS: CardId = CardId(7);
pub const FIDEL: CardId = CardId(8);
pub const VIETNAM_REVOLTS: CardId = CardId(9);
pub const BLOCKADE: CardId = CardId(10);
pub const KOREAN_WAR: CardId = CardId(11);
pub const ROMANIAN_ABDICATION: CardId = CardId(12);
pub const ARAB_ISRAELI_WAR: CardId = CardId(13);
pub const COMECON: CardId = CardId(14);
pub const NASSER: CardId = CardId(15);
pub const WARSAW_PACT: CardId = CardId(16);
pub const DE_GAULLE: CardId = CardId(17);
pub const CAPTURED_NAZI_SCIENTIST: CardId = CardId(18);
pub const TRUMAN_DOCTRINE: CardId = CardId(19);
pub const OLYMPIC_GAMES: CardId = CardId(20);
pub const NATO: CardId = CardId(21);
pub const INDEPENDENT_REDS: CardId = CardId(22);
pub const MARSHALL_PLAN: CardId = CardId(23);
pub const INDO_PAKISTANI_WAR: CardId = CardId(24);
pub const CONTAINMENT: CardId = CardId(25);
pub const CIA_CREATED: CardId = CardId(26);
pub const US_JAPAN_PACT: CardId = CardId(27);
pub const SUEZ_CRISIS: CardId = CardId(28);
pub const EAST_EUROPEAN_UNREST: CardId = CardId(29);
pub const DECOLONIZATION: CardId = CardId(30);
pub const RED_SCARE_PURGE: CardId = CardId(31);
pub const UN_INTERVENTION: CardId = CardId(32);
pub const DE_STALINIZATION: CardId = CardId(33);
pub const NUCLEAR_TEST_BAN: CardId = CardId(34);
pub const FORMOSAN_RESOLUTION: CardId = CardId(35);
pub const BRUSH_WAR: CardId = CardId(36);
pub const CENTRAL_AMERICA_SCORING: CardId = CardId(37);
pub const SOUTHEAST_ASIA_SCORING: CardId = CardId(38);
pub const ARMS_RACE: CardId = CardId(39);
pub const CUBAN_MISSILE_CRISIS: CardId = CardId(40);
pub const NUCLEAR_SUBS: CardId = CardId(41);
pub const QUAGMIRE: CardId = CardId(42);
pub const SALT_NEGOTIATIONS: CardId = CardId(43);
pub const BEAR_TRAP: CardId = CardId(44);
pub const SUMMIT: CardId = CardId(45);
pub const HOW_I_LEARNED: CardId = CardId(46);
pub const JUNTA: CardId = CardId(47);
pub const KITCHEN_DEBATES: CardId = CardId(48);
pub const MISSILE_ENVY: CardId = CardId(49);
pub const WE_WILL_BURY_YOU: CardId = CardId(50);
pub const BREZHNEV_DOCTRINE: CardId = CardId(51);
pub const PORTUGUESE_EMPIRE: CardId = CardId(52);
pub const SOUTH_AFRICAN_UNREST: CardId = CardId(53);
pub const ALLENDE: CardId = CardId(54);
pub const WILLY_BRANDT: CardId = CardId(55);
pub const MUSLIM_REVOLUTION: CardId = CardId(56);
pub const ABM_TREATY: CardId = CardId(57);
pub const CULTURAL_REVOLUTION: CardId = CardId(58);
pub const FLOWER_POWER: CardId = CardId(59);
pub const U2_INCIDENT: CardId = CardId(60);
pub const OPEC: CardId = CardId(61);
pub const LONE_GUNMAN: CardId = CardId(62);
pub const COLONIAL_REAR_GUARDS: CardId = CardId(63);
pub const PANAMA_CANAL_RETURNED: CardId = CardId(64);
pub const CAMP_DAVID_ACCORDS: CardId = CardId(65);
pub const PUPPET_GOVERNMENTS: CardId = CardId(66);
pub const GRAIN_SALES: CardId = CardId(67);
pub const JOHN_PAUL_II: CardId = CardId(68);
pub const DEATH_SQUADS: CardId = CardId(69);
pub const OAS_FOUNDED: CardId = CardId(70);
pub const NIXON_PLAYS_THE_CHINA_CARD: CardId = CardId(71);
pub const SADAT_EXPELS_SOVIETS: CardId = CardId(72);
pub const SHUTTLE_DIPLOMACY: CardId = CardId(73);
pub const VOICE_OF_AMERICA: CardId = CardId(74);
pub const LIBERATION_THEOLOGY: CardId = CardId(75);
pub const USSURI_RIVER_SKIRMISH: CardId = CardId(76);
pub const ASK_NOT: CardId = CardId(77);
pub const ALLIANCE_FOR_PROGRESS: CardId = CardId(78);
pub const AFRICA_SCORING: CardId = CardId(79);
pub const ONE_SMALL_STEP: CardId = CardId(80);
pub const SOUTH_AMERICA_SCORING: CardId = CardId(81);
pub const IRANIAN_HOSTAGE_CRISIS: CardId = CardId(82);
pub const IRON_LADY: CardId = CardId(83);
pub const REAGAN_BOMBS_LIBYA: CardId = CardId(84);
pub const STAR_WARS: CardId = CardId(85);
pub const NORTH_SEA_OIL: CardId = CardId(86);
pub const REFORMER: CardId = CardId(87);
pub const MARINE_BARRACKS: CardId = CardId(88);
pub const KAL_007: CardId = CardId(89);
pub const GLASNOST: CardId = CardId(90);
pub const ORTEGA_ELECTED: CardId = CardId(91);
pub const TERRORISM: CardId = CardId(92);
pub const IRAN_CONTRA_SCANDAL: CardId = CardId(93);
pub const CHERNOBYL: CardId = CardId(94);
pub const LATIN_AMERICAN_DEBT_CRISIS: CardId = CardId(95);
pub const TEAR_DOWN_THIS_WALL: CardId = CardId(96);
pub const AN_EVIL_EMPIRE: CardId = CardId(97);
pub const ALDRICH_AMES: CardId = CardId(98);
pub const PERSHING_II: CardId = CardId(99);
pub const WARGAMES: CardId = CardId(100);
pub const SOLIDARITY: CardId = CardId(101);
pub const IRAN_IRAQ_WAR: CardId = CardId(102);
pub const DEFECTORS: CardId = CardId(103);
pub const CAMBRIDGE_FIVE: CardId = CardId(104);
pub const SPECIAL_RELATIONSHIP: CardId = CardId(105);
pub const NORAD: CardId = CardId(106);
pub const CHE: CardId = CardId(107);
pub const OUR_MAN_IN_TEHRAN: CardId = CardId(108);
pub const YURI_AND_SAMANTHA: CardId = CardId(109);
pub const AWACS_SALE: CardId = CardId(110);
pub const BLANK_1_OP: CardId = CardId(150);
pub const BLANK_2_OP: CardId = CardId(151);
pub const BLANK_3_OP: CardId = CardId(152);
pub const BLANK_4_OP: CardId = CardId(153);
