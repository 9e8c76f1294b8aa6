//! What happens when an input request receives an answer.
//!
//! Every pending request carries one `Callback`. It is data, not a
//! closure, so a request can be cloned into a speculative game or written
//! into a snapshot. The engine interprets it in two places: once per
//! accepted answer, and once more when the request completes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::plans::{CoupPlan, DiceUse, InfluenceEdit, PickUse, PlayFlags, RealignPlan, WarPlan};
use super::stage::Stage;
use crate::cards::CardId;
use crate::core::Side;
use crate::effects::RegionBonuses;

/// Continuation attached to an input request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Callback {
    /// Answers are recorded and nothing else happens.
    Noop,

    // === Turn structure ===
    Headline(Side),
    /// Pick the card for an action round.
    PlayCard(Side),
    /// Pick what to do with an already chosen card.
    CardAction {
        side: Side,
        card: CardId,
        flags: PlayFlags,
    },

    // === Operations ===
    /// Spend operations on influence; `bonus` lists the regions whose
    /// extra point is still in reach.
    OpsInfluence {
        side: Side,
        bonus: RegionBonuses,
    },
    /// Event influence edits on `target`'s influence.
    Influence {
        target: Side,
        edit: InfluenceEdit,
    },
    CoupTarget(CoupPlan),
    RealignTarget(RealignPlan),
    WarTarget(WarPlan),

    // === Randomness ===
    /// One die per repetition, collected until the request completes.
    Dice {
        purpose: DiceUse,
        rolls: SmallVec<[u8; 2]>,
    },
    /// Random card from `from`'s hand (or the shuffle buffer for `Neutral`).
    RandomCard {
        purpose: PickUse,
        from: Side,
    },

    // === Event decisions ===
    /// Labelled options in order; each label runs its stages.
    Choice(Vec<Vec<Stage>>),
    /// Discard a card or, on stop, run `on_decline`.
    OptionalDiscard {
        side: Side,
        on_decline: Vec<Stage>,
    },
    TrapDiscard(Side),
    /// The opponent picks which of its highest-ops cards to hand over.
    MissileEnvyGive {
        receiver: Side,
    },
    /// Take a card from the discard pile, and play its event if `trigger`.
    TakeFromDiscard {
        side: Side,
        trigger: bool,
    },
    /// Discard any number of cards and draw that many.
    AskNot {
        count: u32,
    },
    OurManInTehran,
    AldrichAmes,
    UnIntervention(Side),
    /// Remove up to four influence, then place the same amount.
    DeStalinizationRemove {
        removed: u32,
    },
}
