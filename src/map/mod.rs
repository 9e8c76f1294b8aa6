//! Map model: countries, regions, adjacency, influence, and control.
//!
//! ## Layout
//!
//! - `region`: scoring regions and subregions, DEFCON closures
//! - `country`: `CountryId`, static `CountryInfo`, `CountrySet`
//! - `data`: the country table, borders, and printed opening influence
//! - `game_map`: mutable influence plus coup and realignment arithmetic

pub mod region;
pub mod country;
pub mod data;
pub mod game_map;

pub use region::Region;
pub use country::{CountryId, CountryInfo, CountrySet};
pub use game_map::{GameMap, CoupOutcome, RealignOutcome, SUPERPOWER_INFLUENCE, defcon_closed, in_any};
