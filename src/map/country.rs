//! Country identity and static country data.

use serde::{Deserialize, Serialize};

use super::data::{adjacency, COUNTRIES};
use super::region::Region;

/// Country identifier.
///
/// Index into the static country table. Named constants for every country
/// live in `super::data`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CountryId(pub u8);

impl CountryId {
    /// Create a new country ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Static data for this country.
    ///
    /// Panics if the id is not in the table.
    #[must_use]
    pub fn info(self) -> &'static CountryInfo {
        COUNTRIES
            .get(self.index())
            .unwrap_or_else(|| panic!("country index {} is not on the map", self.0))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    #[must_use]
    pub fn stability(self) -> u32 {
        self.info().stability
    }

    #[must_use]
    pub fn is_battleground(self) -> bool {
        self.info().battleground
    }

    #[must_use]
    pub fn is_superpower(self) -> bool {
        self.info().superpower.is_some()
    }

    #[must_use]
    pub fn in_region(self, region: Region) -> bool {
        self.info().regions.contains(&region)
    }

    /// Countries sharing a border with this one, superpowers included.
    #[must_use]
    pub fn adjacent(self) -> &'static [CountryId] {
        &adjacency()[self.index()]
    }

    /// Iterate over every country on the map, superpowers included.
    pub fn all() -> impl Iterator<Item = CountryId> {
        (0..COUNTRIES.len() as u8).map(CountryId)
    }

    /// Iterate over the non-superpower countries in a region.
    pub fn in_region_iter(region: Region) -> impl Iterator<Item = CountryId> {
        Self::all().filter(move |c| c.in_region(region))
    }

    /// Look up a country by its display name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<CountryId> {
        Self::all().find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable per-country data.
#[derive(Debug)]
pub struct CountryInfo {
    pub name: &'static str,
    pub stability: u32,
    pub battleground: bool,
    /// The side owning this superpower space, if it is one.
    pub superpower: Option<crate::core::Side>,
    pub regions: &'static [Region],
}

/// A set of countries stored as a bitmask over the country table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountrySet(u128);

impl CountrySet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, country: CountryId) {
        self.0 |= 1u128 << country.0;
    }

    pub fn remove(&mut self, country: CountryId) {
        self.0 &= !(1u128 << country.0);
    }

    #[must_use]
    pub const fn contains(self, country: CountryId) -> bool {
        self.0 & (1u128 << country.0) != 0
    }

    #[must_use]
    pub const fn union(self, other: CountrySet) -> CountrySet {
        CountrySet(self.0 | other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = CountryId> {
        CountryId::all().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CountryId> for CountrySet {
    fn from_iter<I: IntoIterator<Item = CountryId>>(iter: I) -> Self {
        let mut set = CountrySet::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::data::*;

    #[test]
    fn test_adjacency_is_symmetric() {
        for c in CountryId::all() {
            for &n in c.adjacent() {
                assert!(n.adjacent().contains(&c), "{c} -> {n} is one-way");
            }
        }
    }

    #[test]
    fn test_subregions_inside_regions() {
        for c in CountryId::in_region_iter(Region::SoutheastAsia) {
            assert!(c.in_region(Region::Asia), "{c}");
        }
        for c in CountryId::in_region_iter(Region::WesternEurope) {
            assert!(c.in_region(Region::Europe), "{c}");
        }
        assert!(FINLAND.in_region(Region::EasternEurope));
        assert!(AUSTRIA.in_region(Region::WesternEurope));
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(CountryId::from_name("west germany"), Some(WEST_GERMANY));
        assert_eq!(CountryId::from_name("Atlantis"), None);
    }

    #[test]
    fn test_country_set() {
        let mut set: CountrySet = [CUBA, JAPAN].into_iter().collect();
        assert!(set.contains(CUBA));
        assert_eq!(set.len(), 2);
        set.remove(CUBA);
        assert!(!set.contains(CUBA));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![JAPAN]);
    }

    #[test]
    fn test_battleground_counts() {
        let count = |r| CountryId::in_region_iter(r).filter(|c| c.is_battleground()).count();
        assert_eq!(count(Region::Europe), 5);
        assert_eq!(count(Region::Asia), 6);
        assert_eq!(count(Region::MiddleEast), 6);
        assert_eq!(count(Region::Africa), 5);
        assert_eq!(count(Region::CentralAmerica), 3);
        assert_eq!(count(Region::SouthAmerica), 4);
    }
}
