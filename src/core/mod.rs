//! Core types: sides, state, RNG, configuration.
//!
//! Everything here is independent of how the engine sequences a turn.

pub mod side;
pub mod rng;
pub mod config;
pub mod state;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, GameConfig};
pub use state::{GameState, Pile};
