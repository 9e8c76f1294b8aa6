//! Player view projection.

use serde::{Deserialize, Serialize};

use crate::cards::ids::CHINA_CARD;
use crate::cards::CardId;
use crate::core::{Pile, Side, SideMap};
use crate::effects::EffectTag;
use crate::engine::Game;
use crate::input::InputRequest;
use crate::map::CountryId;
use crate::rules::GameResult;

/// One country row of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryView {
    pub country: CountryId,
    pub name: String,
    pub us: u32,
    pub ussr: u32,
    /// `Neutral` when neither side controls it.
    pub control: Side,
}

/// Read-only snapshot of a match as seen by one side.
///
/// Serializes with `serde`, so a frontend can ship it as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub side: Side,

    // === Tracks ===
    pub vp: i32,
    pub defcon: u8,
    pub milops: SideMap<u8>,
    pub space: SideMap<u8>,
    pub turn: u8,
    pub ar: u8,
    pub phasing: Side,

    // === Board ===
    pub countries: Vec<CountryView>,

    // === Cards ===
    pub hand: Vec<CardId>,
    pub opponent_hand_size: usize,
    /// Cards in the opponent's hand this side has been shown.
    pub opponent_revealed: Vec<CardId>,
    pub draw_pile_size: usize,
    pub discard: Vec<CardId>,
    pub removed: Vec<CardId>,
    pub limbo: Vec<CardId>,
    pub china_card_holder: Option<Side>,
    pub china_card_playable: bool,

    // === Standing effects ===
    pub effects: SideMap<Vec<EffectTag>>,

    /// The pending request, if this side has to answer it.
    pub request: Option<InputRequest>,
    pub result: Option<GameResult>,
}

impl PlayerView {
    /// Project `game` for `side`.
    ///
    /// # Panics
    ///
    /// Panics if `side` is `Neutral`.
    #[must_use]
    pub fn new(game: &Game, side: Side) -> Self {
        assert!(side != Side::Neutral, "the neutral side has no view");
        let state = game.state();
        let opponent = side.opp();

        let countries = CountryId::all()
            .filter(|c| !c.is_superpower())
            .map(|country| CountryView {
                country,
                name: country.name().to_string(),
                us: state.map.influence(country, Side::Us),
                ussr: state.map.influence(country, Side::Ussr),
                control: state.map.control(country),
            })
            .collect();

        let opponent_hand = state.hand(opponent);
        let mut opponent_revealed: Vec<CardId> = opponent_hand
            .iter()
            .copied()
            .filter(|card| state.revealed[opponent].contains(card))
            .collect();
        opponent_revealed.sort();

        let china_card_holder = match state.card_location(CHINA_CARD) {
            Some(Pile::Hand(holder)) => Some(holder),
            _ => None,
        };

        let request = game.pending_request().filter(|r| r.side == side).cloned();

        Self {
            side,
            vp: state.vp,
            defcon: state.defcon,
            milops: state.milops.clone(),
            space: state.space.clone(),
            turn: state.turn,
            ar: state.ar,
            phasing: state.phasing,
            countries,
            hand: state.hand(side).iter().copied().collect(),
            opponent_hand_size: opponent_hand.len(),
            opponent_revealed,
            draw_pile_size: state.draw_pile.len(),
            discard: state.discard.iter().copied().collect(),
            removed: state.removed.iter().copied().collect(),
            limbo: state.limbo.iter().copied().collect(),
            china_card_holder,
            china_card_playable: state.china_card_playable,
            effects: SideMap::new(|s| state.baskets.tags(s).collect()),
            request,
            result: game.result(),
        }
    }

    /// Board row for `country`.
    #[must_use]
    pub fn country(&self, country: CountryId) -> Option<&CountryView> {
        self.countries.iter().find(|c| c.country == country)
    }
}
