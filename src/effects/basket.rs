//! Per-side baskets of active effect tags.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tag::EffectTag;
use crate::core::{Side, SideMap};

/// The two effect baskets.
///
/// ```
/// use cold_war_engine::core::Side;
/// use cold_war_engine::effects::{Baskets, EffectTag};
///
/// let mut baskets = Baskets::default();
/// baskets.add(Side::Us, EffectTag::Containment);
/// assert!(baskets.has(Side::Us, EffectTag::Containment));
/// assert!(!baskets.has(Side::Ussr, EffectTag::Containment));
///
/// baskets.end_turn();
/// assert!(!baskets.has_any(EffectTag::Containment));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baskets {
    tags: SideMap<Vector<EffectTag>>,
}

impl Baskets {
    #[must_use]
    pub fn has(&self, side: Side, tag: EffectTag) -> bool {
        self.tags[side].contains(&tag)
    }

    /// Whether either side holds the tag.
    #[must_use]
    pub fn has_any(&self, tag: EffectTag) -> bool {
        Side::PLAYERS.iter().any(|&s| self.has(s, tag))
    }

    /// Add a tag. A tag already present is not duplicated.
    pub fn add(&mut self, side: Side, tag: EffectTag) {
        if !self.has(side, tag) {
            self.tags[side].push_back(tag);
            tracing::debug!(target: "cold_war::effects", side = %side, tag = %tag, "effect.added");
        }
    }

    /// Remove a tag. Returns whether it was present.
    pub fn remove(&mut self, side: Side, tag: EffectTag) -> bool {
        let basket = &mut self.tags[side];
        match basket.index_of(&tag) {
            Some(i) => {
                basket.remove(i);
                tracing::debug!(target: "cold_war::effects", side = %side, tag = %tag, "effect.removed");
                true
            }
            None => false,
        }
    }

    /// Remove a tag from both baskets.
    pub fn remove_any(&mut self, tag: EffectTag) {
        for side in Side::PLAYERS {
            self.remove(side, tag);
        }
    }

    /// Tags in one side's basket, oldest first.
    pub fn tags(&self, side: Side) -> impl Iterator<Item = EffectTag> + '_ {
        self.tags[side].iter().copied()
    }

    /// Region designated by an active Chernobyl tag.
    #[must_use]
    pub fn chernobyl_region(&self) -> Option<crate::map::Region> {
        self.tags(Side::Us).find_map(|t| match t {
            EffectTag::Chernobyl(region) => Some(region),
            _ => None,
        })
    }

    /// Drop every tag that lasts only until the end of the turn.
    pub fn end_turn(&mut self) {
        for (_, basket) in self.tags.iter_mut() {
            basket.retain(|t| !t.expires_at_end_of_turn());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Region;

    #[test]
    fn test_add_is_idempotent() {
        let mut baskets = Baskets::default();
        baskets.add(Side::Ussr, EffectTag::FlowerPower);
        baskets.add(Side::Ussr, EffectTag::FlowerPower);
        assert_eq!(baskets.tags(Side::Ussr).count(), 1);
    }

    #[test]
    fn test_end_turn_keeps_permanent_tags() {
        let mut baskets = Baskets::default();
        baskets.add(Side::Us, EffectTag::Nato);
        baskets.add(Side::Us, EffectTag::Chernobyl(Region::Africa));
        baskets.add(Side::Ussr, EffectTag::BrezhnevDoctrine);
        assert_eq!(baskets.chernobyl_region(), Some(Region::Africa));

        baskets.end_turn();
        assert!(baskets.has(Side::Us, EffectTag::Nato));
        assert_eq!(baskets.chernobyl_region(), None);
        assert!(!baskets.has_any(EffectTag::BrezhnevDoctrine));
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut baskets = Baskets::default();
        assert!(!baskets.remove(Side::Us, EffectTag::Norad));
        baskets.add(Side::Us, EffectTag::Norad);
        assert!(baskets.remove(Side::Us, EffectTag::Norad));
    }
}
