//! Game state: tracks, map, card piles, and standing effects.
//!
//! ## GameState
//!
//! Everything the rules read or write, and nothing else:
//! - Tracks (VP, DEFCON, military ops, space race, turn and round counters)
//! - The map and both effect baskets
//! - Hands and the shared piles
//! - Reveal bookkeeping for the player view
//!
//! The continuation stack, the pending request and the autopilot RNG live
//! on `Game`, beside this struct.
//!
//! Uses `im` persistent collections so a speculative clone of the whole
//! game costs O(1) until one of the copies diverges.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::side::{Side, SideMap};
use crate::cards::CardId;
use crate::effects::Baskets;
use crate::map::GameMap;
use crate::stack::PlayedCard;

/// Where a card currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Hand(Side),
    /// Cards drawn face-up for an event (Our Man in Tehran).
    NeutralHand,
    DrawPile,
    Discard,
    Removed,
    Limbo,
    /// Being played right now.
    InPlay,
    /// Face-down headline slot.
    Headline(Side),
    /// Draw pile mid-shuffle.
    ShuffleBuffer,
}

/// Complete rules state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Tracks ===
    /// Positive favours the USSR.
    pub vp: i32,
    pub defcon: u8,
    pub milops: SideMap<u8>,
    pub space: SideMap<u8>,
    pub space_attempts: SideMap<u8>,
    pub turn: u8,
    /// Action round within the turn; 0 during the headline phase.
    pub ar: u8,
    pub phasing: Side,
    pub ar_budget: SideMap<u8>,
    pub ars_taken: SideMap<u8>,
    /// DEFCON dropped to 2 during the current action round.
    pub defcon_two_this_round: bool,

    // === Board ===
    pub map: GameMap,
    pub baskets: Baskets,

    // === Cards ===
    pub hands: SideMap<Vector<CardId>>,
    pub neutral_hand: Vector<CardId>,
    /// The top of the pile is the back.
    pub draw_pile: Vector<CardId>,
    pub discard: Vector<CardId>,
    pub removed: Vector<CardId>,
    pub limbo: Vector<CardId>,
    pub shuffle_buffer: Vector<CardId>,
    pub in_play: Vector<CardId>,
    pub headlines: SideMap<Option<CardId>>,
    pub china_card_playable: bool,

    // === Bookkeeping ===
    /// Cards in each side's hand that its opponent has seen. Never shrinks.
    pub revealed: SideMap<ImHashSet<CardId>>,
    /// Events that occurred during the play in progress.
    pub event_fired: ImHashSet<CardId>,
    /// Who receives Missile Envy once it has been played.
    pub envy_recipient: Option<Side>,
    /// Cards played in action rounds, oldest first.
    pub history: Vector<PlayedCard>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the state before setup: empty board, DEFCON 5, turn 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vp: 0,
            defcon: 5,
            milops: SideMap::with_value(0),
            space: SideMap::with_value(0),
            space_attempts: SideMap::with_value(0),
            turn: 1,
            ar: 0,
            phasing: Side::Ussr,
            ar_budget: SideMap::with_value(6),
            ars_taken: SideMap::with_value(0),
            defcon_two_this_round: false,
            map: GameMap::new(),
            baskets: Baskets::default(),
            hands: SideMap::new(|_| Vector::new()),
            neutral_hand: Vector::new(),
            draw_pile: Vector::new(),
            discard: Vector::new(),
            removed: Vector::new(),
            limbo: Vector::new(),
            shuffle_buffer: Vector::new(),
            in_play: Vector::new(),
            headlines: SideMap::with_value(None),
            china_card_playable: true,
            revealed: SideMap::new(|_| ImHashSet::new()),
            event_fired: ImHashSet::new(),
            envy_recipient: None,
            history: Vector::new(),
        }
    }

    // === Piles ===

    /// A side's hand; `Neutral` is the face-up event hand.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Vector<CardId> {
        match side {
            Side::Neutral => &self.neutral_hand,
            _ => &self.hands[side],
        }
    }

    pub fn hand_mut(&mut self, side: Side) -> &mut Vector<CardId> {
        match side {
            Side::Neutral => &mut self.neutral_hand,
            _ => &mut self.hands[side],
        }
    }

    fn pile(&self, pile: Pile) -> Option<&Vector<CardId>> {
        match pile {
            Pile::Hand(side) => Some(self.hand(side)),
            Pile::NeutralHand => Some(&self.neutral_hand),
            Pile::DrawPile => Some(&self.draw_pile),
            Pile::Discard => Some(&self.discard),
            Pile::Removed => Some(&self.removed),
            Pile::Limbo => Some(&self.limbo),
            Pile::InPlay => Some(&self.in_play),
            Pile::ShuffleBuffer => Some(&self.shuffle_buffer),
            Pile::Headline(_) => None,
        }
    }

    fn pile_mut(&mut self, pile: Pile) -> Option<&mut Vector<CardId>> {
        match pile {
            Pile::Hand(side) => Some(self.hand_mut(side)),
            Pile::NeutralHand => Some(&mut self.neutral_hand),
            Pile::DrawPile => Some(&mut self.draw_pile),
            Pile::Discard => Some(&mut self.discard),
            Pile::Removed => Some(&mut self.removed),
            Pile::Limbo => Some(&mut self.limbo),
            Pile::InPlay => Some(&mut self.in_play),
            Pile::ShuffleBuffer => Some(&mut self.shuffle_buffer),
            Pile::Headline(_) => None,
        }
    }

    const SEARCH_ORDER: [Pile; 10] = [
        Pile::InPlay,
        Pile::Hand(Side::Ussr),
        Pile::Hand(Side::Us),
        Pile::Headline(Side::Ussr),
        Pile::Headline(Side::Us),
        Pile::NeutralHand,
        Pile::DrawPile,
        Pile::Discard,
        Pile::Removed,
        Pile::Limbo,
    ];

    /// Every pile holding `card`. A consistent state yields at most one.
    #[must_use]
    pub fn locations(&self, card: CardId) -> Vec<Pile> {
        let mut found: Vec<Pile> = Self::SEARCH_ORDER
            .into_iter()
            .filter(|&pile| match pile {
                Pile::Headline(side) => self.headlines[side] == Some(card),
                other => self.pile(other).is_some_and(|v| v.contains(&card)),
            })
            .collect();
        if self.shuffle_buffer.contains(&card) {
            found.push(Pile::ShuffleBuffer);
        }
        found
    }

    /// The pile holding `card`, if any.
    #[must_use]
    pub fn card_location(&self, card: CardId) -> Option<Pile> {
        self.locations(card).into_iter().next()
    }

    /// Take `card` out of `pile`. Returns whether it was there.
    pub fn take_from(&mut self, pile: Pile, card: CardId) -> bool {
        if let Pile::Headline(side) = pile {
            if self.headlines[side] == Some(card) {
                self.headlines[side] = None;
                return true;
            }
            return false;
        }
        let Some(cards) = self.pile_mut(pile) else {
            return false;
        };
        match cards.index_of(&card) {
            Some(i) => {
                cards.remove(i);
                true
            }
            None => false,
        }
    }

    /// Take `card` from wherever it is. Returns the pile it left.
    pub fn take_anywhere(&mut self, card: CardId) -> Option<Pile> {
        let pile = self.card_location(card)?;
        self.take_from(pile, card);
        Some(pile)
    }

    /// Put `card` on top of `pile`.
    pub fn put(&mut self, pile: Pile, card: CardId) {
        if let Pile::Headline(side) = pile {
            assert!(self.headlines[side].is_none(), "{side} already has a headline");
            self.headlines[side] = Some(card);
            return;
        }
        if let Some(cards) = self.pile_mut(pile) {
            cards.push_back(card);
        }
    }

    /// Move `card` from wherever it is to `to`.
    pub fn move_card(&mut self, card: CardId, to: Pile) {
        self.take_anywhere(card);
        self.put(to, card);
    }

    // === Queries ===

    /// Whether `side` holds `card`.
    #[must_use]
    pub fn holds(&self, side: Side, card: CardId) -> bool {
        self.hand(side).contains(&card)
    }

    /// Mark a card in `side`'s hand as seen by the opponent.
    pub fn reveal(&mut self, side: Side, card: CardId) {
        self.revealed[side].insert(card);
    }

    /// Action rounds `side` still has this turn.
    #[must_use]
    pub fn rounds_left(&self, side: Side) -> u8 {
        self.ar_budget[side].saturating_sub(self.ars_taken[side])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_tracks() {
        let state = GameState::new();
        assert_eq!(state.defcon, 5);
        assert_eq!(state.turn, 1);
        assert_eq!(state.vp, 0);
        assert!(state.china_card_playable);
    }

    #[test]
    fn test_move_card_between_piles() {
        let mut state = GameState::new();
        let card = CardId::new(8);
        state.put(Pile::Hand(Side::Ussr), card);
        assert_eq!(state.card_location(card), Some(Pile::Hand(Side::Ussr)));

        state.move_card(card, Pile::Discard);
        assert_eq!(state.locations(card), vec![Pile::Discard]);
        assert!(!state.holds(Side::Ussr, card));
    }

    #[test]
    fn test_headline_slot() {
        let mut state = GameState::new();
        let card = CardId::new(4);
        state.put(Pile::Headline(Side::Us), card);
        assert_eq!(state.card_location(card), Some(Pile::Headline(Side::Us)));
        assert_eq!(state.take_anywhere(card), Some(Pile::Headline(Side::Us)));
        assert_eq!(state.headlines[Side::Us], None);
    }

    #[test]
    fn test_neutral_hand() {
        let mut state = GameState::new();
        state.hand_mut(Side::Neutral).push_back(CardId::new(20));
        assert_eq!(state.card_location(CardId::new(20)), Some(Pile::NeutralHand));
    }

    #[test]
    fn test_clone_diverges() {
        let mut state = GameState::new();
        state.put(Pile::DrawPile, CardId::new(1));
        let mut preview = state.clone();
        preview.draw_pile.pop_back();
        preview.vp = 5;
        assert_eq!(state.draw_pile.len(), 1);
        assert_eq!(state.vp, 0);
    }
}
