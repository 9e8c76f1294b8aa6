//! Errors reported to callers of the engine.
//!
//! Illegal input is a recoverable rejection and leaves the game untouched.
//! Broken engine invariants are panics, and the end of the game is a
//! `GameResult`, not an error.

use thiserror::Error;

/// Rejection of a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no input request is pending")]
    NoPendingRequest,
    #[error("the game is over")]
    GameOver,
    #[error("{option} is not a legal answer to \"{prompt}\"")]
    IllegalOption { option: String, prompt: String },
    #[error("this request cannot be stopped early")]
    StopNotAllowed,
    #[error("answer rejected: {0}")]
    Rejected(String),
}

/// Failure to snapshot or restore a game.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode game snapshot: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode game snapshot: {0}")]
    Decode(#[source] bincode::Error),
}
