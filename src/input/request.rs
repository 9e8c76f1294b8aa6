//! The pending-decision object handed to players.
//!
//! An `InputRequest` names who must answer, what kind of choice it is, the
//! legal options, how many selections remain, and an optional "stop early"
//! pseudo-option. The callback it carries is resolved by the engine when an
//! answer is accepted.
//!
//! ## Completion
//!
//! A request is complete when its repetitions reach zero or when no option
//! is selectable any more (every option is capped or discarded).

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Side;
use crate::error::InputError;
use crate::map::CountryId;
use crate::stack::{CardAction, Callback};

/// What sort of choice a request asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    CardAction,
    SelectCard,
    SelectCountry,
    SelectMultiple,
    RollDice,
}

/// One answer to a request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputOption {
    Card(CardId),
    Country(CountryId),
    Action(CardAction),
    Label(String),
    Roll(u8),
    /// The request's stop-early pseudo-option.
    Stop,
}

impl std::fmt::Display for InputOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputOption::Card(card) => write!(f, "{card}"),
            InputOption::Country(country) => write!(f, "{country}"),
            InputOption::Action(action) => write!(f, "{action:?}"),
            InputOption::Label(label) => f.write_str(label),
            InputOption::Roll(n) => write!(f, "roll {n}"),
            InputOption::Stop => f.write_str("stop"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct OptionSlot {
    option: InputOption,
    selected: u32,
    discarded: bool,
}

/// A pending decision.
///
/// ## Example
///
/// ```
/// use cold_war_engine::core::Side;
/// use cold_war_engine::input::{InputKind, InputOption, InputRequest};
/// use cold_war_engine::map::data::{CUBA, PANAMA};
/// use cold_war_engine::stack::Callback;
///
/// let request = InputRequest::new(
///     Side::Us,
///     InputKind::SelectCountry,
///     "Place influence",
///     [CUBA, PANAMA].map(InputOption::Country),
///     Callback::Noop,
/// )
/// .with_reps(3)
/// .with_max_per_option(2);
///
/// assert_eq!(request.reps(), 3);
/// assert!(!request.is_complete());
/// assert_eq!(request.available_options().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRequest {
    pub side: Side,
    pub kind: InputKind,
    pub prompt: String,
    /// Unit shown next to the repetition count, e.g. "influence".
    pub reps_unit: String,
    pub(crate) callback: Callback,
    slots: Vec<OptionSlot>,
    reps: u32,
    max_per_option: Option<u32>,
    stop_label: Option<String>,
}

impl InputRequest {
    /// Create a single-selection request.
    pub fn new(
        side: Side,
        kind: InputKind,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = InputOption>,
        callback: Callback,
    ) -> Self {
        let mut slots: Vec<OptionSlot> = Vec::new();
        for option in options {
            assert!(option != InputOption::Stop, "stop is not a regular option");
            if !slots.iter().any(|s| s.option == option) {
                slots.push(OptionSlot { option, selected: 0, discarded: false });
            }
        }
        Self {
            side,
            kind,
            prompt: prompt.into(),
            reps_unit: String::new(),
            callback,
            slots,
            reps: 1,
            max_per_option: None,
            stop_label: None,
        }
    }

    /// Set the number of selections required.
    #[must_use]
    pub fn with_reps(mut self, reps: u32) -> Self {
        self.reps = reps;
        self
    }

    /// Cap how often one option may be selected. Without a cap, the
    /// repetition count is the only limit.
    #[must_use]
    pub fn with_max_per_option(mut self, max: u32) -> Self {
        self.max_per_option = Some(max);
        self
    }

    /// Allow the player to end the request early.
    #[must_use]
    pub fn with_stop(mut self, label: impl Into<String>) -> Self {
        self.stop_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.reps_unit = unit.into();
        self
    }

    // === Queries ===

    /// Remaining selections.
    #[must_use]
    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Per-option cap; `u32::MAX` when uncapped.
    #[must_use]
    pub fn max_per_option(&self) -> u32 {
        self.max_per_option.unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn stop_label(&self) -> Option<&str> {
        self.stop_label.as_deref()
    }

    /// Options that may be selected right now.
    #[must_use]
    pub fn available_options(&self) -> Vec<InputOption> {
        self.slots
            .iter()
            .filter(|s| self.slot_available(s))
            .map(|s| s.option.clone())
            .collect()
    }

    /// How often each option has been chosen so far.
    pub fn selections(&self) -> impl Iterator<Item = (&InputOption, u32)> {
        self.slots.iter().map(|s| (&s.option, s.selected))
    }

    /// Times `option` has been chosen.
    #[must_use]
    pub fn selected(&self, option: &InputOption) -> u32 {
        self.slots
            .iter()
            .find(|s| &s.option == option)
            .map_or(0, |s| s.selected)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.reps == 0 || !self.slots.iter().any(|s| self.slot_available(s))
    }

    fn slot_available(&self, slot: &OptionSlot) -> bool {
        !slot.discarded && slot.selected < self.max_per_option()
    }

    /// Check an answer against the legal set without changing anything.
    pub fn validate(&self, option: &InputOption) -> Result<(), InputError> {
        if *option == InputOption::Stop {
            return if self.stop_label.is_some() {
                Ok(())
            } else {
                Err(InputError::StopNotAllowed)
            };
        }
        let legal = self
            .slots
            .iter()
            .any(|s| &s.option == option && self.slot_available(s));
        if legal {
            Ok(())
        } else {
            Err(InputError::IllegalOption {
                option: option.to_string(),
                prompt: self.prompt.clone(),
            })
        }
    }

    // === Bookkeeping used by the engine ===

    /// Record an accepted selection: one repetition is consumed.
    pub(crate) fn record(&mut self, option: &InputOption) {
        if let Some(slot) = self.slots.iter_mut().find(|s| &s.option == option) {
            slot.selected += 1;
        }
        self.reps = self.reps.saturating_sub(1);
    }

    /// Consume extra repetitions beyond the one `record` takes.
    pub(crate) fn consume(&mut self, n: u32) {
        self.reps = self.reps.saturating_sub(n);
    }

    /// Make an option unselectable.
    pub(crate) fn discard(&mut self, option: &InputOption) {
        if let Some(slot) = self.slots.iter_mut().find(|s| &s.option == option) {
            slot.discarded = true;
        }
    }

    /// End the request immediately.
    pub(crate) fn stop(&mut self) {
        self.reps = 0;
    }
}
