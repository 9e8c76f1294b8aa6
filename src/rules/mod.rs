//! Terminal conditions.
//!
//! The end of a match is a value stored on the game, never an error:
//! `Game::result` returns it and `Game::submit` refuses further input.

pub mod result;

pub use result::{GameResult, VictoryReason};
