//! Per-side projections of a match.
//!
//! A `PlayerView` is what one side is allowed to see: every public track,
//! the board, the public piles and standing effects, its own hand, and the
//! part of the opponent's hand that has been revealed to it.

pub mod player_view;

pub use player_view::{CountryView, PlayerView};
