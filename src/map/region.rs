//! Map regions and subregions.

use serde::{Deserialize, Serialize};

/// A region or subregion of the map.
///
/// A country belongs to one scoring region and possibly a subregion
/// (Western/Eastern Europe, Southeast Asia). Finland and Austria belong to
/// both European subregions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Europe,
    WesternEurope,
    EasternEurope,
    MiddleEast,
    Asia,
    SoutheastAsia,
    Africa,
    CentralAmerica,
    SouthAmerica,
}

impl Region {
    /// The six regions with presence/domination/control scoring.
    pub const SCORED: [Region; 6] = [
        Region::Europe,
        Region::Asia,
        Region::MiddleEast,
        Region::Africa,
        Region::CentralAmerica,
        Region::SouthAmerica,
    ];

    /// Whether coups and realignments here are forbidden at `defcon`.
    ///
    /// DEFCON 4 closes Europe, 3 adds Asia, 2 adds the Middle East.
    #[must_use]
    pub fn defcon_restricted(self, defcon: u8) -> bool {
        match self {
            Region::Europe | Region::WesternEurope | Region::EasternEurope => defcon <= 4,
            Region::Asia | Region::SoutheastAsia => defcon <= 3,
            Region::MiddleEast => defcon <= 2,
            _ => false,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::WesternEurope => "Western Europe",
            Region::EasternEurope => "Eastern Europe",
            Region::MiddleEast => "Middle East",
            Region::Asia => "Asia",
            Region::SoutheastAsia => "Southeast Asia",
            Region::Africa => "Africa",
            Region::CentralAmerica => "Central America",
            Region::SouthAmerica => "South America",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
