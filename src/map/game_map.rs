//! Mutable influence on the map and the arithmetic of coups and realignments.
//!
//! Control is never stored. Every query recomputes it from the two influence
//! counts and the country's stability, so it cannot go stale.
//!
//! The predicates here take the basket-derived restrictions as a
//! `CountrySet` argument. Folding the active effects into that set is the
//! job of `crate::effects`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::country::{CountryId, CountrySet};
use super::data::OPENING_INFLUENCE;
use super::region::Region;
use crate::core::{Side, SideMap};

/// Sentinel influence a superpower holds in its own space.
pub const SUPERPOWER_INFLUENCE: u32 = u32::MAX;

/// Influence counts for every country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    influence: Vector<SideMap<u32>>,
}

/// Influence moved by a successful coup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupOutcome {
    /// Modified roll minus twice the stability.
    pub margin: i32,
    /// Opponent influence removed.
    pub removed: u32,
    /// Own influence added after the opponent was cleared.
    pub added: u32,
}

impl CoupOutcome {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.margin > 0
    }
}

/// Result of one realignment roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealignOutcome {
    /// Modified rolls, USSR then US.
    pub totals: (i32, i32),
    /// Side that lost influence, if any.
    pub loser: Option<Side>,
    pub removed: u32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMap {
    /// Create a map with no influence outside the superpower spaces.
    #[must_use]
    pub fn new() -> Self {
        let influence = CountryId::all()
            .map(|c| match c.info().superpower {
                Some(owner) => SideMap::new(|s| if s == owner { SUPERPOWER_INFLUENCE } else { 0 }),
                None => SideMap::with_value(0),
            })
            .collect();
        Self { influence }
    }

    /// Create a map with the printed opening influence.
    #[must_use]
    pub fn standard() -> Self {
        let mut map = Self::new();
        for &(country, side, amount) in OPENING_INFLUENCE {
            map.add_influence(country, side, amount);
        }
        map
    }

    // === Queries ===

    /// Influence `side` holds in `country`.
    #[must_use]
    pub fn influence(&self, country: CountryId, side: Side) -> u32 {
        self.influence[country.index()][side]
    }

    /// The side controlling `country`, or `Neutral`.
    #[must_use]
    pub fn control(&self, country: CountryId) -> Side {
        if let Some(owner) = country.info().superpower {
            return owner;
        }
        let inf = &self.influence[country.index()];
        let stability = country.stability();
        for side in Side::PLAYERS {
            if inf[side].saturating_sub(inf[side.opp()]) >= stability {
                return side;
            }
        }
        Side::Neutral
    }

    #[must_use]
    pub fn controls(&self, country: CountryId, side: Side) -> bool {
        self.control(country) == side
    }

    /// Whether `side` has influence in `country` or in a non-superpower
    /// neighbour.
    #[must_use]
    pub fn has_presence_near(&self, country: CountryId, side: Side) -> bool {
        self.influence(country, side) > 0
            || country
                .adjacent()
                .iter()
                .any(|&n| !n.is_superpower() && self.influence(n, side) > 0)
    }

    /// Non-superpower countries where `side` holds influence.
    pub fn countries_with_influence(&self, side: Side) -> impl Iterator<Item = CountryId> + '_ {
        CountryId::all().filter(move |&c| !c.is_superpower() && self.influence(c, side) > 0)
    }

    /// Number of neighbours of `country` controlled by `side`.
    #[must_use]
    pub fn adjacent_controlled(&self, country: CountryId, side: Side) -> u32 {
        country
            .adjacent()
            .iter()
            .filter(|&&n| self.controls(n, side))
            .count() as u32
    }

    /// Total non-superpower influence a side has on the board.
    #[must_use]
    pub fn total_influence(&self, side: Side) -> u32 {
        self.countries_with_influence(side)
            .map(|c| self.influence(c, side))
            .sum()
    }

    // === Placement ===

    /// Whether `side` may target `country` with influence from ops.
    #[must_use]
    pub fn can_place_influence(&self, country: CountryId, side: Side, effective_ops: u32) -> bool {
        if country.is_superpower() || !self.has_presence_near(country, side) {
            return false;
        }
        !self.controls(country, side.opp()) || effective_ops >= 2
    }

    /// Spend ops placing influence in one country.
    ///
    /// Each point placed while the opponent controls the country costs two
    /// ops; once control breaks, points cost one. Returns the ops left over
    /// when the spend stops being affordable, which the caller offers to the
    /// player for another target.
    pub fn place_influence(&mut self, country: CountryId, side: Side, effective_ops: u32) -> u32 {
        let mut ops = effective_ops;
        loop {
            let cost = if self.controls(country, side.opp()) { 2 } else { 1 };
            if ops < cost {
                return ops;
            }
            ops -= cost;
            self.add_influence(country, side, 1);
            if ops == 0 {
                return 0;
            }
        }
    }

    /// Ops needed to place one point in `country` right now.
    #[must_use]
    pub fn placement_cost(&self, country: CountryId, side: Side) -> u32 {
        if self.controls(country, side.opp()) {
            2
        } else {
            1
        }
    }

    // === Mutation ===

    pub fn add_influence(&mut self, country: CountryId, side: Side, amount: u32) {
        assert!(!country.is_superpower(), "cannot change influence in {country}");
        self.influence[country.index()][side] += amount;
    }

    /// Remove up to `amount` influence. Returns how much was removed.
    pub fn remove_influence(&mut self, country: CountryId, side: Side, amount: u32) -> u32 {
        assert!(!country.is_superpower(), "cannot change influence in {country}");
        let slot = &mut self.influence[country.index()][side];
        let removed = amount.min(*slot);
        *slot -= removed;
        removed
    }

    pub fn set_influence(&mut self, country: CountryId, side: Side, amount: u32) {
        assert!(!country.is_superpower(), "cannot change influence in {country}");
        self.influence[country.index()][side] = amount;
    }

    // === Coup ===

    /// Whether `side` may coup `country`.
    ///
    /// `shielded` holds the countries protected by active effects.
    #[must_use]
    pub fn can_coup(&self, country: CountryId, side: Side, defcon: u8, shielded: CountrySet) -> bool {
        !country.is_superpower()
            && self.influence(country, side.opp()) > 0
            && !defcon_closed(country, defcon)
            && !shielded.contains(country)
    }

    /// Resolve the influence change of a coup.
    ///
    /// `modifier` is the sum of every roll modifier in play. Panics if the
    /// country is a superpower.
    pub fn coup(&mut self, country: CountryId, side: Side, effective_ops: u32, roll: u8, modifier: i32) -> CoupOutcome {
        assert!(!country.is_superpower(), "coup on superpower {country}");
        let margin = i32::from(roll) + effective_ops as i32 + modifier - 2 * country.stability() as i32;
        if margin <= 0 {
            return CoupOutcome { margin, ..CoupOutcome::default() };
        }
        let removed = self.remove_influence(country, side.opp(), margin as u32);
        let added = margin as u32 - removed;
        self.add_influence(country, side, added);
        CoupOutcome { margin, removed, added }
    }

    // === Realignment ===

    /// Whether `side` may realign `country`.
    #[must_use]
    pub fn can_realign(&self, country: CountryId, side: Side, defcon: u8, shielded: CountrySet) -> bool {
        !country.is_superpower()
            && self.influence(country, side.opp()) > 0
            && !defcon_closed(country, defcon)
            && !shielded.contains(country)
    }

    /// Modifier each side adds to its realignment die in `country`.
    ///
    /// +1 per controlled neighbour (a superpower's own space counts as
    /// controlled) and +1 for the side holding more influence in the target.
    #[must_use]
    pub fn realignment_modifiers(&self, country: CountryId) -> SideMap<i32> {
        SideMap::new(|side| {
            let adjacent = self.adjacent_controlled(country, side) as i32;
            let more = i32::from(self.influence(country, side) > self.influence(country, side.opp()));
            adjacent + more
        })
    }

    /// Resolve one realignment roll.
    ///
    /// `rolls` and `extra` are indexed by side. The loser's influence drops by
    /// the margin, never below zero; realignment never adds influence.
    pub fn realign(&mut self, country: CountryId, rolls: SideMap<u8>, extra: SideMap<i32>) -> RealignOutcome {
        assert!(!country.is_superpower(), "realignment on superpower {country}");
        let mods = self.realignment_modifiers(country);
        let total = |s: Side| i32::from(rolls[s]) + mods[s] + extra[s];
        let (ussr, us) = (total(Side::Ussr), total(Side::Us));
        let (loser, margin) = match ussr.cmp(&us) {
            std::cmp::Ordering::Greater => (Some(Side::Us), ussr - us),
            std::cmp::Ordering::Less => (Some(Side::Ussr), us - ussr),
            std::cmp::Ordering::Equal => (None, 0),
        };
        let removed = loser.map_or(0, |l| self.remove_influence(country, l, margin as u32));
        RealignOutcome {
            totals: (ussr, us),
            loser,
            removed,
        }
    }
}

/// Whether DEFCON forbids coups and realignments in `country`.
#[must_use]
pub fn defcon_closed(country: CountryId, defcon: u8) -> bool {
    country.info().regions.iter().any(|r| r.defcon_restricted(defcon))
}

/// Whether `country` lies in any of `regions`.
#[must_use]
pub fn in_any(country: CountryId, regions: &[Region]) -> bool {
    regions.iter().any(|&r| country.in_region(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::data::*;

    #[test]
    fn test_control_threshold() {
        let mut map = GameMap::new();
        map.add_influence(ITALY, Side::Us, 2);
        assert_eq!(map.control(ITALY), Side::Us);
        map.add_influence(ITALY, Side::Ussr, 1);
        assert_eq!(map.control(ITALY), Side::Neutral);
        assert_eq!(map.control(USSR), Side::Ussr);
    }

    #[test]
    fn test_can_place_needs_presence() {
        let mut map = GameMap::new();
        assert!(!map.can_place_influence(FRANCE, Side::Us, 3));
        map.add_influence(UK, Side::Us, 1);
        assert!(map.can_place_influence(FRANCE, Side::Us, 3));
        // Superpower neighbours do not count.
        assert!(!map.can_place_influence(MEXICO, Side::Us, 3));
    }

    #[test]
    fn test_opponent_control_costs_double() {
        let mut map = GameMap::new();
        map.add_influence(LEBANON, Side::Ussr, 1);
        map.add_influence(SYRIA, Side::Us, 1);
        assert!(!map.can_place_influence(LEBANON, Side::Us, 1));
        assert!(map.can_place_influence(LEBANON, Side::Us, 2));

        let left = map.place_influence(LEBANON, Side::Us, 4);
        // 2 ops break control, then 2 more points at 1 op each.
        assert_eq!(left, 0);
        assert_eq!(map.influence(LEBANON, Side::Us), 3);
    }

    #[test]
    fn test_place_returns_unaffordable_remainder() {
        let mut map = GameMap::new();
        map.add_influence(ISRAEL, Side::Ussr, 6);
        map.add_influence(LEBANON, Side::Us, 1);
        let left = map.place_influence(ISRAEL, Side::Us, 3);
        assert_eq!(left, 1);
        assert_eq!(map.influence(ISRAEL, Side::Us), 1);
    }

    #[test]
    fn test_coup_accounting() {
        let mut map = GameMap::new();
        map.add_influence(ANGOLA, Side::Us, 3);
        // stability 1: 5 + 3 - 2 = 6
        let outcome = map.coup(ANGOLA, Side::Ussr, 3, 5, 0);
        assert_eq!(outcome, CoupOutcome { margin: 6, removed: 3, added: 3 });
        assert_eq!(map.influence(ANGOLA, Side::Us), 0);
        assert_eq!(map.influence(ANGOLA, Side::Ussr), 3);
    }

    #[test]
    fn test_failed_coup_changes_nothing() {
        let mut map = GameMap::new();
        map.add_influence(JAPAN, Side::Us, 4);
        let outcome = map.coup(JAPAN, Side::Ussr, 1, 1, 0);
        assert!(!outcome.succeeded());
        assert_eq!(map.influence(JAPAN, Side::Us), 4);
    }

    #[test]
    fn test_can_coup_defcon() {
        let mut map = GameMap::new();
        map.add_influence(ITALY, Side::Us, 1);
        map.add_influence(IRAN, Side::Us, 1);
        assert!(map.can_coup(ITALY, Side::Ussr, 5, CountrySet::new()));
        assert!(!map.can_coup(ITALY, Side::Ussr, 4, CountrySet::new()));
        assert!(map.can_coup(IRAN, Side::Ussr, 3, CountrySet::new()));
        assert!(!map.can_coup(IRAN, Side::Ussr, 2, CountrySet::new()));
        assert!(!map.can_coup(ITALY, Side::Us, 5, CountrySet::new()));
        let shield: CountrySet = [ITALY].into_iter().collect();
        assert!(!map.can_coup(ITALY, Side::Ussr, 5, shield));
    }

    #[test]
    fn test_realignment_superpower_neighbour() {
        let mut map = GameMap::new();
        map.add_influence(MEXICO, Side::Ussr, 2);
        let mods = map.realignment_modifiers(MEXICO);
        assert_eq!(mods[Side::Us], 1);
        assert_eq!(mods[Side::Ussr], 1);

        let outcome = map.realign(
            MEXICO,
            SideMap::new(|s| if s == Side::Us { 4 } else { 2 }),
            SideMap::with_value(0),
        );
        assert_eq!(outcome.loser, Some(Side::Ussr));
        assert_eq!(outcome.removed, 2);
        assert_eq!(map.influence(MEXICO, Side::Ussr), 0);
        assert_eq!(map.influence(MEXICO, Side::Us), 0);
    }

    #[test]
    fn test_standard_opening() {
        let map = GameMap::standard();
        assert_eq!(map.influence(UK, Side::Us), 5);
        assert_eq!(map.control(UK), Side::Us);
        assert_eq!(map.total_influence(Side::Ussr), 9);
        assert_eq!(map.total_influence(Side::Us), 18);
    }
}
