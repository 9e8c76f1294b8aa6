//! Plain-data descriptions of operations in progress.
//!
//! Stages and callbacks carry these by value, so an operation that spans
//! several decisions (pick a country, roll, pick again) keeps its state on
//! the continuation stack and never in a side table.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Side;
use crate::effects::RegionBonuses;
use crate::map::{CountryId, CountrySet};

/// What a player does with the card they picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardAction {
    PlayEvent,
    /// Trigger the opponent's event now, then choose an operation.
    ResolveEventFirst,
    Influence,
    Realignment,
    Coup,
    Space,
}

impl CardAction {
    /// Whether this action spends the card's operations points.
    #[must_use]
    pub fn is_ops(self) -> bool {
        matches!(self, CardAction::Influence | CardAction::Realignment | CardAction::Coup)
    }
}

/// Restrictions on how a card may be played this time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayFlags {
    /// The opponent's event on this card has already fired.
    pub event_resolved: bool,
    /// The card's event must not fire at all.
    pub no_event: bool,
    /// Operations only: neither the event nor the space race.
    pub ops_only: bool,
    pub no_coup: bool,
}

impl PlayFlags {
    /// Flags for an ops-only stand-in card.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            no_event: true,
            ops_only: true,
            ..Self::default()
        }
    }
}

/// A coup waiting for a target or a die.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoupPlan {
    pub side: Side,
    pub ops: u32,
    /// Event coup: ignores DEFCON regions and adds no military ops.
    pub free: bool,
    /// Limit targets to this set.
    pub targets: Option<CountrySet>,
    /// The player may decline.
    pub optional: bool,
    /// The Cuban Missile Crisis defusal offer has been made.
    pub crisis_checked: bool,
    /// Che: a coup that removes US influence earns a second one elsewhere.
    pub second_coup: bool,
}

impl CoupPlan {
    #[must_use]
    pub fn new(side: Side, ops: u32) -> Self {
        Self {
            side,
            ops,
            free: false,
            targets: None,
            optional: false,
            crisis_checked: false,
            second_coup: false,
        }
    }

    #[must_use]
    pub fn free(mut self) -> Self {
        self.free = true;
        self
    }

    #[must_use]
    pub fn within(mut self, targets: CountrySet) -> Self {
        self.targets = Some(targets);
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A run of realignment rolls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealignPlan {
    pub side: Side,
    /// Rolls left.
    pub reps: u32,
    pub free: bool,
    pub targets: Option<CountrySet>,
    /// Regions whose bonus roll is still in reach.
    pub bonus: RegionBonuses,
    pub bonus_granted: bool,
}

impl RealignPlan {
    #[must_use]
    pub fn new(side: Side, reps: u32) -> Self {
        Self {
            side,
            reps,
            free: false,
            targets: None,
            bonus: RegionBonuses::new(),
            bonus_granted: false,
        }
    }
}

/// A war card's attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarPlan {
    pub side: Side,
    pub target: CountryId,
    /// Modified roll needed to win.
    pub threshold: i32,
    pub vp: i32,
    pub milops: u8,
    /// Opponent control of the target itself also counts against the roll.
    pub count_target: bool,
}

impl WarPlan {
    /// Standard war: 4+ to win, 2 VP, 2 military ops.
    #[must_use]
    pub fn new(side: Side, target: CountryId) -> Self {
        Self {
            side,
            target,
            threshold: 4,
            vp: 2,
            milops: 2,
            count_target: false,
        }
    }
}

/// How an event changes influence in each selected country.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfluenceEdit {
    Add(u32),
    Remove(u32),
    RemoveAll,
    /// Raise to the opponent's level.
    MatchOpponent,
    /// Double the existing influence.
    Double,
}

/// An event's "choose countries and change influence" step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencePick {
    pub chooser: Side,
    /// Whose influence is changed.
    pub target: Side,
    pub edit: InfluenceEdit,
    pub countries: CountrySet,
    pub reps: u32,
    pub max_per_country: Option<u32>,
    pub prompt: String,
    pub stop: Option<String>,
}

impl InfluencePick {
    /// `chooser` edits its own influence.
    pub fn own(chooser: Side, edit: InfluenceEdit, countries: CountrySet, reps: u32, prompt: impl Into<String>) -> Self {
        Self {
            chooser,
            target: chooser,
            edit,
            countries,
            reps,
            max_per_country: None,
            prompt: prompt.into(),
            stop: None,
        }
    }

    /// `chooser` edits the opponent's influence.
    pub fn opponent(chooser: Side, edit: InfluenceEdit, countries: CountrySet, reps: u32, prompt: impl Into<String>) -> Self {
        Self {
            target: chooser.opp(),
            ..Self::own(chooser, edit, countries, reps, prompt)
        }
    }

    #[must_use]
    pub fn max_per_country(mut self, max: u32) -> Self {
        self.max_per_country = Some(max);
        self
    }

    #[must_use]
    pub fn with_stop(mut self, label: impl Into<String>) -> Self {
        self.stop = Some(label.into());
        self
    }
}

/// What a Neutral dice request is rolling for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiceUse {
    Coup(CoupPlan, CountryId),
    /// Two dice: USSR first, then US.
    Realign(RealignPlan, CountryId),
    Space(Side),
    War(WarPlan),
    /// Two dice: sponsor first, then the opponent.
    Olympics(Side),
    /// Two dice: USSR first, then US.
    Summit,
    /// Escape roll for Quagmire or Bear Trap.
    Trap(Side),
}

impl DiceUse {
    /// Number of dice this roll needs.
    #[must_use]
    pub fn dice(&self) -> u32 {
        match self {
            DiceUse::Realign(..) | DiceUse::Olympics(_) | DiceUse::Summit => 2,
            _ => 1,
        }
    }
}

/// What a Neutral random card pick is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickUse {
    /// Build the new draw-pile order one card at a time.
    Shuffle,
    FiveYearPlan,
    Terrorism,
    GrainSales,
}

/// Card played in an action round, for hooks that look back at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub side: Side,
    pub card: CardId,
    pub action: CardAction,
}
