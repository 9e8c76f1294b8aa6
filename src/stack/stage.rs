//! Units of deferred engine work.
//!
//! A `Stage` is plain data. The engine pops one, runs it, and the handler
//! either mutates state, pushes further stages, or leaves an input request
//! pending. Because stages are values the whole continuation clones and
//! serializes with the rest of the game.

use serde::{Deserialize, Serialize};

use super::plans::{CardAction, CoupPlan, InfluenceEdit, InfluencePick, PlayFlags, RealignPlan, WarPlan};
use crate::cards::CardId;
use crate::core::Side;
use crate::effects::EffectTag;
use crate::map::CountryId;
use crate::rules::VictoryReason;

/// One step of the remaining game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    // === Setup and turn structure ===
    /// Shuffle the next era's cards into the draw pile.
    ExpandDeck,
    /// Move the draw pile into the shuffle buffer and draw a random order.
    ShuffleDrawPile,
    /// Deal up to hand size, alternating from `Side`.
    Deal(Side),
    DrawCards(Side, u32),
    StartingInfluence(Side),
    HandicapInfluence,
    Headline,
    ChooseHeadline(Side),
    ResolveHeadlines,
    ResolveHeadline(Side),
    BeginActionRounds,
    ActionRound,
    EndActionRound,
    /// Space box 6: optionally discard a held card before the turn ends.
    SpaceDiscard(Side),
    EndTurn,
    FinalScoring,

    // === Card play ===
    SelectAction {
        side: Side,
        card: CardId,
        flags: PlayFlags,
    },
    ResolveAction {
        side: Side,
        card: CardId,
        action: CardAction,
        flags: PlayFlags,
    },
    TriggerEvent {
        side: Side,
        card: CardId,
    },
    Dispose {
        side: Side,
        card: CardId,
    },
    /// Drop the operations-scoped tags once an operation has finished.
    ClearOpsTags(Side),
    ReturnCard {
        card: CardId,
        to: Side,
    },

    // === Operations ===
    OpsInfluence {
        side: Side,
        ops: u32,
    },
    Coup(CoupPlan),
    CoupRoll(CoupPlan, CountryId),
    /// Offer the couping side a way out of the Cuban Missile Crisis.
    CrisisDefuse(Side),
    Realign(RealignPlan),
    RealignRoll(RealignPlan, CountryId),
    Space(Side),

    // === Event steps ===
    Influence(InfluencePick),
    /// Apply one influence edit without asking anyone.
    EditInfluence(CountryId, Side, InfluenceEdit),
    AddEffect(Side, EffectTag),
    RemoveEffect(Side, EffectTag),
    /// Ask `side` to pick one labelled branch; the branch's stages run next.
    Choose {
        side: Side,
        prompt: String,
        options: Vec<(String, Vec<Stage>)>,
    },
    War(WarPlan),
    Olympics(Side),
    Summit,
    TrapRoll(Side),
    Norad,
    /// Signed VP change, positive for the USSR.
    ChangeVp(i32),
    ChangeDefcon(i32),
    SetDefcon(u8),
    /// End the game now, won by whoever leads on VP.
    DecideByVp(VictoryReason),
    /// Re-issue the most recently suspended input request.
    Resume,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::SelectAction { side, card, .. } => write!(f, "SelectAction({side}, {card})"),
            Stage::ResolveAction { side, card, action, .. } => {
                write!(f, "ResolveAction({side}, {card}, {action:?})")
            }
            Stage::TriggerEvent { side, card } => write!(f, "TriggerEvent({side}, {card})"),
            Stage::Dispose { side, card } => write!(f, "Dispose({side}, {card})"),
            Stage::Influence(pick) => write!(f, "Influence({})", pick.prompt),
            Stage::Choose { side, prompt, .. } => write!(f, "Choose({side}, {prompt})"),
            other => write!(f, "{other:?}"),
        }
    }
}
