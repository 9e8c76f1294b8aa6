//! Standing effects: tags, baskets, and the hook folds operations consult.
//!
//! A card that installs a lasting effect adds an `EffectTag` to a basket.
//! Operations call the hook functions in `hooks`, which read both baskets
//! and fold the results. End-of-turn expiry is `Baskets::end_turn`.

pub mod tag;
pub mod basket;
pub mod hooks;

pub use tag::EffectTag;
pub use basket::Baskets;
pub use hooks::{CoupEffects, RegionBonuses};
