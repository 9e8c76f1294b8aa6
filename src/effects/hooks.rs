//! Hook points consulted by the core operations.
//!
//! Each function folds every relevant tag in both baskets into one value:
//! modifiers are summed, restricted countries are unioned, and post-coup
//! side effects accumulate into a single `CoupEffects` bundle. The
//! operations themselves never name a card.
//!
//! | Hook | Fold |
//! |---|---|
//! | `global_ops` | sum of ops deltas |
//! | `influence_bonus_regions` / `influence_forbidden_regions` | region lists |
//! | `coup_shield` / `realign_shield` | union of shielded countries |
//! | `coup_ops`, `coup_roll`, `realign_roll` | sum of modifiers |
//! | `realign_bonus_regions` | region list |
//! | `coup_after` | merged `CoupEffects` |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::basket::Baskets;
use super::tag::EffectTag;
use crate::core::Side;
use crate::map::data::{FRANCE, JAPAN, WEST_GERMANY};
use crate::map::{CountryId, CountrySet, GameMap, Region};

/// Regions whose ops bonus is still in reach, at most one entry per source.
pub type RegionBonuses = SmallVec<[Region; 2]>;

/// Side effects applied together with a coup's DEFCON and military-ops
/// changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupEffects {
    /// A battleground coup does not degrade DEFCON.
    pub no_defcon_bg: bool,
    /// The coup does not count toward military operations.
    pub no_milops: bool,
    /// DEFCON drops straight to 1 and the couping side loses.
    pub defcon_one: bool,
    /// VP applied afterwards, positive for the USSR.
    pub vp: i32,
}

impl CoupEffects {
    /// Merge another bundle into this one.
    #[must_use]
    pub fn merge(self, other: CoupEffects) -> CoupEffects {
        CoupEffects {
            no_defcon_bg: self.no_defcon_bg || other.no_defcon_bg,
            no_milops: self.no_milops || other.no_milops,
            defcon_one: self.defcon_one || other.defcon_one,
            vp: self.vp + other.vp,
        }
    }
}

// =============================================================================
// Operations value
// =============================================================================

/// Ops delta for any card `acting` uses for operations.
#[must_use]
pub fn global_ops(baskets: &Baskets, acting: Side) -> i32 {
    let mut delta = 0;
    if acting == Side::Us && baskets.has(Side::Us, EffectTag::Containment) {
        delta += 1;
    }
    if acting == Side::Ussr && baskets.has(Side::Ussr, EffectTag::BrezhnevDoctrine) {
        delta += 1;
    }
    if baskets.has(acting.opp(), EffectTag::RedScarePurge) {
        delta -= 1;
    }
    delta
}

/// Clamp a card's ops after modifiers to the legal 1..=4 range.
#[must_use]
pub fn effective_ops(base: u8, delta: i32) -> u32 {
    (i32::from(base) + delta).clamp(1, 4) as u32
}

// =============================================================================
// Influence placement
// =============================================================================

/// Regions granting +1 influence op if every point lands inside them.
#[must_use]
pub fn influence_bonus_regions(baskets: &Baskets, acting: Side) -> RegionBonuses {
    let mut regions = RegionBonuses::new();
    if baskets.has(acting, EffectTag::ChinaCard) {
        regions.push(Region::Asia);
    }
    if acting == Side::Ussr && baskets.has(Side::Ussr, EffectTag::VietnamRevolts) {
        regions.push(Region::SoutheastAsia);
    }
    regions
}

/// Regions where `acting` may not place influence with operations.
#[must_use]
pub fn influence_forbidden_regions(baskets: &Baskets, acting: Side) -> SmallVec<[Region; 1]> {
    let mut regions = SmallVec::new();
    if acting == Side::Ussr {
        if let Some(region) = baskets.chernobyl_region() {
            regions.push(region);
        }
    }
    regions
}

// =============================================================================
// Coups and realignments
// =============================================================================

/// European countries NATO protects from USSR coups and realignments.
#[must_use]
pub fn nato_shield(baskets: &Baskets, map: &GameMap) -> CountrySet {
    if !baskets.has(Side::Us, EffectTag::Nato) {
        return CountrySet::new();
    }
    CountryId::in_region_iter(Region::Europe)
        .filter(|&c| map.controls(c, Side::Us))
        .filter(|&c| !(c == FRANCE && baskets.has(Side::Ussr, EffectTag::DeGaulle)))
        .filter(|&c| !(c == WEST_GERMANY && baskets.has(Side::Ussr, EffectTag::WillyBrandt)))
        .collect()
}

fn common_shield(baskets: &Baskets, acting: Side, map: &GameMap) -> CountrySet {
    if acting != Side::Ussr {
        return CountrySet::new();
    }
    let mut shield = nato_shield(baskets, map);
    if baskets.has(Side::Us, EffectTag::UsJapanPact) {
        shield.insert(JAPAN);
    }
    shield
}

/// Countries `acting` may not coup.
#[must_use]
pub fn coup_shield(baskets: &Baskets, acting: Side, map: &GameMap) -> CountrySet {
    let mut shield = common_shield(baskets, acting, map);
    if acting == Side::Ussr && baskets.has(Side::Ussr, EffectTag::Reformer) {
        shield = shield.union(CountryId::in_region_iter(Region::Europe).collect());
    }
    shield
}

/// Countries `acting` may not realign.
#[must_use]
pub fn realign_shield(baskets: &Baskets, acting: Side, map: &GameMap) -> CountrySet {
    common_shield(baskets, acting, map)
}

/// Extra ops for a coup by `acting` in `country`.
#[must_use]
pub fn coup_ops(baskets: &Baskets, acting: Side, country: CountryId) -> i32 {
    let mut delta = 0;
    if baskets.has(acting, EffectTag::ChinaCard) && country.in_region(Region::Asia) {
        delta += 1;
    }
    if acting == Side::Ussr
        && baskets.has(Side::Ussr, EffectTag::VietnamRevolts)
        && country.in_region(Region::SoutheastAsia)
    {
        delta += 1;
    }
    delta
}

/// Modifier to the coup die.
#[must_use]
pub fn coup_roll(baskets: &Baskets, acting: Side, country: CountryId) -> i32 {
    let mut delta = 0;
    if baskets.has_any(EffectTag::SaltNegotiations) {
        delta -= 1;
    }
    if country.in_region(Region::CentralAmerica) || country.in_region(Region::SouthAmerica) {
        if baskets.has(acting, EffectTag::DeathSquads) {
            delta += 1;
        }
        if baskets.has(acting.opp(), EffectTag::DeathSquads) {
            delta -= 1;
        }
    }
    delta
}

/// Modifier to `acting`'s own realignment die.
#[must_use]
pub fn realign_roll(baskets: &Baskets, acting: Side) -> i32 {
    if acting == Side::Us && baskets.has(Side::Ussr, EffectTag::IranContra) {
        -1
    } else {
        0
    }
}

/// Regions granting one extra realignment if every roll lands inside them.
#[must_use]
pub fn realign_bonus_regions(baskets: &Baskets, acting: Side) -> RegionBonuses {
    influence_bonus_regions(baskets, acting)
}

/// Side effects of a coup by `acting` in `country`.
#[must_use]
pub fn coup_after(baskets: &Baskets, acting: Side, country: CountryId) -> CoupEffects {
    let mut effects = CoupEffects::default();
    if acting == Side::Us && baskets.has(Side::Us, EffectTag::NuclearSubs) && country.is_battleground() {
        effects.no_defcon_bg = true;
    }
    if baskets.has(acting.opp(), EffectTag::CubanMissileCrisis) {
        effects.defcon_one = true;
    }
    if acting == Side::Us && baskets.has(Side::Ussr, EffectTag::YuriAndSamantha) {
        effects.vp += Side::Ussr.vp_mult();
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::data::*;

    #[test]
    fn test_global_ops_stack() {
        let mut baskets = Baskets::default();
        baskets.add(Side::Us, EffectTag::Containment);
        baskets.add(Side::Ussr, EffectTag::RedScarePurge);
        assert_eq!(global_ops(&baskets, Side::Us), 0);
        assert_eq!(global_ops(&baskets, Side::Ussr), 0);

        baskets.add(Side::Ussr, EffectTag::BrezhnevDoctrine);
        assert_eq!(global_ops(&baskets, Side::Ussr), 1);
    }

    #[test]
    fn test_effective_ops_clamped() {
        assert_eq!(effective_ops(1, -1), 1);
        assert_eq!(effective_ops(4, 1), 4);
        assert_eq!(effective_ops(2, 1), 3);
    }

    #[test]
    fn test_nato_shield_exceptions() {
        let mut map = GameMap::new();
        map.add_influence(FRANCE, Side::Us, 3);
        map.add_influence(WEST_GERMANY, Side::Us, 4);
        map.add_influence(ITALY, Side::Us, 1);
        let mut baskets = Baskets::default();
        baskets.add(Side::Us, EffectTag::Nato);
        baskets.add(Side::Ussr, EffectTag::DeGaulle);

        let shield = coup_shield(&baskets, Side::Ussr, &map);
        assert!(!shield.contains(FRANCE));
        assert!(shield.contains(WEST_GERMANY));
        assert!(!shield.contains(ITALY));
        assert!(coup_shield(&baskets, Side::Us, &map).is_empty());
    }

    #[test]
    fn test_reformer_blocks_coups_not_realignments() {
        let map = GameMap::new();
        let mut baskets = Baskets::default();
        baskets.add(Side::Ussr, EffectTag::Reformer);
        assert!(coup_shield(&baskets, Side::Ussr, &map).contains(POLAND));
        assert!(!realign_shield(&baskets, Side::Ussr, &map).contains(POLAND));
    }

    #[test]
    fn test_death_squads_modifiers() {
        let mut baskets = Baskets::default();
        baskets.add(Side::Ussr, EffectTag::DeathSquads);
        assert_eq!(coup_roll(&baskets, Side::Ussr, PANAMA), 1);
        assert_eq!(coup_roll(&baskets, Side::Us, CHILE), -1);
        assert_eq!(coup_roll(&baskets, Side::Us, IRAN), 0);
    }

    #[test]
    fn test_coup_after_merges() {
        let mut baskets = Baskets::default();
        baskets.add(Side::Us, EffectTag::NuclearSubs);
        baskets.add(Side::Ussr, EffectTag::YuriAndSamantha);
        let effects = coup_after(&baskets, Side::Us, IRAN).merge(CoupEffects {
            no_milops: true,
            ..CoupEffects::default()
        });
        assert!(effects.no_defcon_bg);
        assert!(effects.no_milops);
        assert_eq!(effects.vp, 1);
        assert!(!effects.defcon_one);
    }

    #[test]
    fn test_china_card_asia_bonus() {
        let mut baskets = Baskets::default();
        baskets.add(Side::Us, EffectTag::ChinaCard);
        baskets.add(Side::Ussr, EffectTag::VietnamRevolts);
        assert_eq!(influence_bonus_regions(&baskets, Side::Us).as_slice(), &[Region::Asia]);
        assert!(influence_bonus_regions(&baskets, Side::Ussr).contains(&Region::SoutheastAsia));
        assert_eq!(coup_ops(&baskets, Side::Us, JAPAN), 1);
        assert_eq!(coup_ops(&baskets, Side::Ussr, VIETNAM), 1);
        assert_eq!(coup_ops(&baskets, Side::Ussr, JAPAN), 0);
    }
}
