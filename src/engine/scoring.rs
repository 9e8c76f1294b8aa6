//! Region scoring.
//!
//! `score_region` is a pure function of the state so it can be tested and
//! previewed without a game. `Game::score` applies the result and handles
//! Shuttle Diplomacy's one-shot adjustment.
//!
//! ## Levels
//!
//! | Level | Condition |
//! |---|---|
//! | Presence | at least one country |
//! | Domination | more countries, more battlegrounds, and a non-battleground |
//! | Control | more countries and every battleground |
//!
//! On top of the level, a side scores 1 VP per controlled battleground and
//! 1 VP per controlled country adjacent to the enemy superpower.

use serde::{Deserialize, Serialize};

use super::Game;
use crate::cards::ids::SHUTTLE_DIPLOMACY;
use crate::core::{GameState, Pile, Side, SideMap};
use crate::effects::EffectTag;
use crate::map::data::{TAIWAN, THAILAND, USA, USSR};
use crate::map::{CountryId, Region};

/// How strongly a side holds a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegionStatus {
    None,
    Presence,
    Domination,
    Control,
}

/// Breakdown of one region's scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionScore {
    pub region: Region,
    pub status: SideMap<RegionStatus>,
    pub countries: SideMap<u32>,
    pub battlegrounds: SideMap<u32>,
    pub vp: SideMap<i32>,
}

impl RegionScore {
    /// Net VP change, positive for the USSR.
    #[must_use]
    pub fn swing(&self) -> i32 {
        self.vp[Side::Ussr] - self.vp[Side::Us]
    }
}

/// Presence, domination and control values.
fn level_vp(region: Region) -> (i32, i32, i32) {
    match region {
        Region::Asia => (3, 7, 9),
        Region::Europe => (3, 7, 120),
        Region::MiddleEast => (3, 5, 7),
        Region::CentralAmerica => (1, 3, 5),
        Region::Africa => (1, 4, 6),
        Region::SouthAmerica => (2, 5, 6),
        other => panic!("{other} is not a scoring region"),
    }
}

fn superpower_space(side: Side) -> CountryId {
    match side {
        Side::Ussr => USSR,
        _ => USA,
    }
}

/// Score `region` against `state` without changing anything.
///
/// `shuttle` applies Shuttle Diplomacy: one USSR battleground is ignored.
#[must_use]
pub fn score_region(state: &GameState, region: Region, shuttle: bool) -> RegionScore {
    let map = &state.map;
    let formosan = state.baskets.has(Side::Us, EffectTag::FormosanResolution);
    let is_battleground = |c: CountryId| {
        c.is_battleground() || (c == TAIWAN && formosan && map.controls(TAIWAN, Side::Us))
    };

    let mut countries = SideMap::with_value(0u32);
    let mut battlegrounds = SideMap::with_value(0u32);
    let mut adjacent = SideMap::with_value(0i32);
    let mut total_battlegrounds = 0;
    for country in CountryId::in_region_iter(region) {
        let battleground = is_battleground(country);
        if battleground {
            total_battlegrounds += 1;
        }
        let owner = map.control(country);
        if !owner.is_player() {
            continue;
        }
        countries[owner] += 1;
        if battleground {
            battlegrounds[owner] += 1;
        }
        if country.adjacent().contains(&superpower_space(owner.opp())) {
            adjacent[owner] += 1;
        }
    }
    if shuttle && battlegrounds[Side::Ussr] > 0 {
        battlegrounds[Side::Ussr] -= 1;
        countries[Side::Ussr] -= 1;
    }

    let (presence, domination, control) = level_vp(region);
    let status = SideMap::new(|side| {
        let (own, opp) = (countries[side], countries[side.opp()]);
        let (own_bg, opp_bg) = (battlegrounds[side], battlegrounds[side.opp()]);
        if own > opp && total_battlegrounds > 0 && own_bg == total_battlegrounds {
            RegionStatus::Control
        } else if own > opp && own_bg > opp_bg && own > own_bg {
            RegionStatus::Domination
        } else if own > 0 {
            RegionStatus::Presence
        } else {
            RegionStatus::None
        }
    });
    let vp = SideMap::new(|side| {
        let level = match status[side] {
            RegionStatus::Control => control,
            RegionStatus::Domination => domination,
            RegionStatus::Presence => presence,
            RegionStatus::None => 0,
        };
        level + battlegrounds[side] as i32 + adjacent[side]
    });
    RegionScore { region, status, countries, battlegrounds, vp }
}

/// Southeast Asia: 1 VP per controlled country, 2 for Thailand.
#[must_use]
pub fn southeast_asia_swing(state: &GameState) -> i32 {
    CountryId::in_region_iter(Region::SoutheastAsia)
        .map(|c| {
            let worth = if c == THAILAND { 2 } else { 1 };
            worth * state.map.control(c).vp_mult()
        })
        .sum()
}

impl Game {
    /// Score a region and apply the swing. `allow_shuttle` lets an active
    /// Shuttle Diplomacy take effect and expire.
    pub(crate) fn score(&mut self, region: Region, allow_shuttle: bool) {
        let shuttle = allow_shuttle
            && matches!(region, Region::MiddleEast | Region::Asia)
            && self.state.baskets.has(Side::Us, EffectTag::ShuttleDiplomacy);
        let score = score_region(&self.state, region, shuttle);
        tracing::info!(
            target: "cold_war::scoring",
            region = %region,
            ussr = ?score.status[Side::Ussr],
            us = ?score.status[Side::Us],
            swing = score.swing(),
            "region.scored"
        );
        if shuttle {
            self.state.baskets.remove(Side::Us, EffectTag::ShuttleDiplomacy);
            if self.state.take_from(Pile::Limbo, SHUTTLE_DIPLOMACY) {
                self.state.put(Pile::Discard, SHUTTLE_DIPLOMACY);
            }
        }
        self.change_vp(score.swing());
    }

    pub(crate) fn score_southeast_asia(&mut self) {
        let swing = southeast_asia_swing(&self.state);
        tracing::info!(target: "cold_war::scoring", region = %Region::SoutheastAsia, swing, "region.scored");
        self.change_vp(swing);
    }
}
