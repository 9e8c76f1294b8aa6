//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition for a game and is
//! immutable once the catalog has been built. Lookup works by `CardId` and
//! by name.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, Era};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use cold_war_engine::cards::{CardRegistry, CardDefinition, CardId, Era};
/// use cold_war_engine::core::Side;
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(8), "Fidel", Era::Early, 2, Side::Ussr));
///
/// assert_eq!(registry.get(CardId::new(8)).unwrap().name, "Fidel");
/// assert_eq!(registry.by_name("fidel"), Some(CardId::new(8)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    names: FxHashMap<String, CardId>,
}

fn name_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID or name already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        let key = name_key(card.name);
        if self.names.contains_key(&key) {
            panic!("Card named {:?} already registered", card.name);
        }
        self.names.insert(key, card.id);
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Every `CardId` in play comes from this registry, so a miss is a bug.
    #[must_use]
    pub fn card(&self, id: CardId) -> &CardDefinition {
        self.cards
            .get(&id)
            .unwrap_or_else(|| panic!("card {id} not in registry"))
    }

    /// Look up a card by name (case-insensitive).
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<CardId> {
        self.names.get(&name_key(name)).copied()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Cards shuffled in with an era, sorted by ID.
    ///
    /// Optional cards are included only when `optional` is set.
    #[must_use]
    pub fn deck(&self, era: Era, optional: bool) -> Vec<CardId> {
        let mut ids: Vec<_> = self
            .cards
            .values()
            .filter(|c| c.era == era && (optional || !c.optional))
            .map(|c| c.id)
            .collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "Test Card", Era::Early, 2, Side::Us));

        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Test Card");
        assert!(registry.get(CardId::new(99)).is_none());
        assert_eq!(registry.by_name("TEST CARD"), Some(CardId::new(1)));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "Card A", Era::Early, 1, Side::Us));
        registry.register(CardDefinition::new(CardId::new(1), "Card B", Era::Early, 1, Side::Us));
    }

    #[test]
    fn test_deck_filters_optional() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(3), "A", Era::Mid, 1, Side::Us));
        registry.register(CardDefinition::new(CardId::new(2), "B", Era::Mid, 1, Side::Us).optional());
        registry.register(CardDefinition::new(CardId::new(1), "C", Era::Late, 1, Side::Us));

        assert_eq!(registry.deck(Era::Mid, false), vec![CardId::new(3)]);
        assert_eq!(registry.deck(Era::Mid, true), vec![CardId::new(2), CardId::new(3)]);
    }
}
