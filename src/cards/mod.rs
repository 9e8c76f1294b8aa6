//! Card system: definitions, the registry and the standard catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier matching the printed card number
//! - `CardDefinition`: Static card data plus its event procedure
//! - `CardRegistry`: Lookup by ID or name, and per-era decks
//!
//! Event procedures live in [`events`]; well-known IDs in [`ids`].

pub mod catalog;
pub mod definition;
pub mod events;
pub mod ids;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardKind, Disposal, Era, EventFn, PlayableFn};
pub use registry::CardRegistry;
