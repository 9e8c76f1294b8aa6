//! Card definitions - static card data plus event behavior.
//!
//! A `CardDefinition` is immutable once the catalog is built. Its behavior
//! is a pair of plain function pointers: the event procedure and an
//! optional prerequisite that gates whether the event can occur at all.
//! Where the card ends up after play is described by `Disposal`.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::engine::Game;

/// Card identifier, numbered as printed on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Deck a card is shuffled in with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    Early,
    Mid,
    Late,
    /// Stand-in cards used when an event grants operations.
    Template,
}

/// Broad card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Event,
    Scoring,
    Template,
}

/// Where a card goes once it has been played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposal {
    /// Removed if event-unique and the event occurred, else discarded.
    Standard,
    /// Passed face-down to the opponent (The China Card).
    ToOpponent,
    /// Held in limbo until a later scoring releases it.
    Limbo,
    /// Handed to the opponent if an exchange happened (Missile Envy).
    Exchange,
    /// Not a physical card.
    None,
}

/// Event procedure. Mutates the game directly, sets an input request, or
/// pushes follow-up stages.
pub type EventFn = fn(&mut Game, Side);

/// Prerequisite for the event to occur.
pub type PlayableFn = fn(&Game, Side) -> bool;

fn no_event(_: &mut Game, _: Side) {}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use cold_war_engine::cards::{CardDefinition, CardId, Era};
/// use cold_war_engine::core::Side;
///
/// let card = CardDefinition::new(CardId::new(8), "Fidel", Era::Early, 2, Side::Ussr)
///     .unique();
/// assert!(card.unique);
/// assert!(card.can_headline);
/// ```
#[derive(Clone, Debug)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: &'static str,
    pub era: Era,
    pub kind: CardKind,
    /// Printed operations value; 0 for scoring cards.
    pub ops: u8,
    /// Side whose event this is, or `Neutral`.
    pub owner: Side,
    /// Removed from the game after its event occurs.
    pub unique: bool,
    /// False for scoring cards, which may not be held at turn end.
    pub may_be_held: bool,
    pub optional: bool,
    pub can_headline: bool,
    /// Whether the event may be chosen as an action during an action round.
    pub action_event: bool,
    pub disposal: Disposal,
    pub event: EventFn,
    pub playable: Option<PlayableFn>,
}

impl CardDefinition {
    /// Create an event card with a no-op event.
    #[must_use]
    pub fn new(id: CardId, name: &'static str, era: Era, ops: u8, owner: Side) -> Self {
        Self {
            id,
            name,
            era,
            kind: CardKind::Event,
            ops,
            owner,
            unique: false,
            may_be_held: true,
            optional: false,
            can_headline: true,
            action_event: true,
            disposal: Disposal::Standard,
            event: no_event,
            playable: None,
        }
    }

    /// Create a scoring card.
    #[must_use]
    pub fn scoring(id: CardId, name: &'static str, era: Era) -> Self {
        Self {
            kind: CardKind::Scoring,
            may_be_held: false,
            ..Self::new(id, name, era, 0, Side::Neutral)
        }
    }

    /// Create an ops-only stand-in card.
    #[must_use]
    pub fn template(id: CardId, name: &'static str, ops: u8) -> Self {
        Self {
            kind: CardKind::Template,
            can_headline: false,
            action_event: false,
            disposal: Disposal::None,
            ..Self::new(id, name, Era::Template, ops, Side::Neutral)
        }
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn no_headline(mut self) -> Self {
        self.can_headline = false;
        self
    }

    /// The event can only fire through headlines or opponent play.
    #[must_use]
    pub fn no_action_event(mut self) -> Self {
        self.action_event = false;
        self
    }

    #[must_use]
    pub fn with_disposal(mut self, disposal: Disposal) -> Self {
        self.disposal = disposal;
        self
    }

    #[must_use]
    pub fn with_event(mut self, event: EventFn) -> Self {
        self.event = event;
        self
    }

    #[must_use]
    pub fn with_playable(mut self, playable: PlayableFn) -> Self {
        self.playable = Some(playable);
        self
    }

    #[must_use]
    pub fn is_scoring(&self) -> bool {
        self.kind == CardKind::Scoring
    }

    #[must_use]
    pub fn is_template(&self) -> bool {
        self.kind == CardKind::Template
    }

    /// Whether the event prerequisite holds for `side`.
    #[must_use]
    pub fn event_possible(&self, game: &Game, side: Side) -> bool {
        self.playable.map_or(true, |f| f(game, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_scoring_defaults() {
        let card = CardDefinition::scoring(CardId::new(2), "Europe Scoring", Era::Early);
        assert!(card.is_scoring());
        assert!(!card.may_be_held);
        assert_eq!(card.ops, 0);
        assert_eq!(card.owner, Side::Neutral);
    }

    #[test]
    fn test_template_defaults() {
        let card = CardDefinition::template(CardId::new(153), "Blank 4 Op Card", 4);
        assert!(card.is_template());
        assert!(!card.can_headline);
        assert_eq!(card.disposal, Disposal::None);
    }

    #[test]
    fn test_builder_flags() {
        let card = CardDefinition::new(CardId::new(32), "UN Intervention", Era::Early, 1, Side::Neutral)
            .no_headline()
            .optional();
        assert!(!card.can_headline);
        assert!(card.optional);
        assert!(!card.unique);
    }
}
