//! Sides and per-side data storage.
//!
//! ## Side
//!
//! The two superpowers plus `Neutral`, which answers randomized requests
//! and owns cards that belong to neither player.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`. Indexing with `Neutral` is a
//! programming error and panics.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A participant in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Ussr,
    Us,
    Neutral,
}

impl Side {
    /// Both playing sides, USSR first.
    pub const PLAYERS: [Side; 2] = [Side::Ussr, Side::Us];

    /// The opposing side. `Neutral` is its own opposite.
    #[must_use]
    pub const fn opp(self) -> Self {
        match self {
            Side::Ussr => Side::Us,
            Side::Us => Side::Ussr,
            Side::Neutral => Side::Neutral,
        }
    }

    /// Sign applied to VP gains: the VP track is positive for the USSR.
    #[must_use]
    pub const fn vp_mult(self) -> i32 {
        match self {
            Side::Ussr => 1,
            Side::Us => -1,
            Side::Neutral => 0,
        }
    }

    /// Slot index for a playing side.
    ///
    /// Panics for `Neutral`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Side::Ussr => 0,
            Side::Us => 1,
            Side::Neutral => panic!("Neutral has no per-side slot"),
        }
    }

    /// True for the two superpowers.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Side::Neutral)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Ussr => write!(f, "USSR"),
            Side::Us => write!(f, "US"),
            Side::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use cold_war_engine::core::{Side, SideMap};
///
/// let mut milops: SideMap<u8> = SideMap::with_value(0);
/// milops[Side::Us] = 3;
/// assert_eq!(milops[Side::Ussr], 0);
/// assert_eq!(milops[Side::Us], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Ussr), factory(Side::Us)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, USSR first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::PLAYERS.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, USSR first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::PLAYERS.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
