//! Input/selection protocol.
//!
//! The engine never blocks. When a stage needs a decision it leaves one
//! `InputRequest` pending and returns; the caller answers with an
//! `InputOption` through `Game::submit`.

pub mod request;

pub use request::{InputKind, InputOption, InputRequest};
