//! # cold-war-engine
//!
//! Rules engine for a two-player, card-driven Cold War strategy game.
//!
//! ## Design Principles
//!
//! 1. **Input-Driven**: The engine never blocks. It runs until it needs a
//!    decision, leaves exactly one `InputRequest` pending, and resumes when
//!    `Game::submit` answers it.
//!
//! 2. **Continuations, not Callbacks on the Call Stack**: The rest of the
//!    game is a LIFO list of `Stage` values, so a game can be cloned,
//!    serialized and restored between any two answers.
//!
//! 3. **Cards as Data**: Every card is a `CardDefinition` with plain function
//!    pointers for its event and its prerequisite.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` for previewing
//!   an answer before committing to it.
//!
//! - **Neutral Autopilot**: Dice and random draws are requests addressed to
//!   the neutral side, answered by a seeded ChaCha RNG unless disabled.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, piles and tracks
//! - `map`: Countries, regions, influence and control
//! - `cards`: Card definitions, the catalog and every event
//! - `effects`: Standing effects and the rules they modify
//! - `input`: Requests and answers
//! - `stack`: The stage stack and its plans
//! - `engine`: The `Game` itself
//! - `rules`: Game results
//! - `view`: Per-side projections

pub mod core;
pub mod map;
pub mod cards;
pub mod effects;
pub mod input;
pub mod stack;
pub mod engine;
pub mod rules;
pub mod view;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, GameState, Pile, Side, SideMap};

pub use crate::map::{CountryId, CountrySet, GameMap, Region};

pub use crate::cards::{CardDefinition, CardId, CardKind, CardRegistry, Disposal, Era};

pub use crate::effects::{Baskets, EffectTag};

pub use crate::input::{InputKind, InputOption, InputRequest};

pub use crate::stack::{Stage, StageStack};

pub use crate::engine::{Game, Snapshot};

pub use crate::rules::{GameResult, VictoryReason};

pub use crate::view::PlayerView;

pub use crate::error::{InputError, SnapshotError};
