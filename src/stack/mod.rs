//! The continuation stack.
//!
//! ## Overview
//!
//! The remaining game is a LIFO list of `Stage` values. The engine pops
//! the top stage, runs it, and repeats until a stage leaves an input
//! request pending or the game ends. A handler that needs several steps
//! pushes them with `StageStack::push_all`, which takes the stages in the
//! order they should *run* and takes care of the reversal.
//!
//! ```
//! use cold_war_engine::stack::{Stage, StageStack};
//!
//! let mut stack = StageStack::new();
//! stack.push(Stage::EndTurn);
//! stack.push_all([Stage::ActionRound, Stage::EndActionRound]);
//!
//! assert_eq!(stack.pop(), Some(Stage::ActionRound));
//! assert_eq!(stack.pop(), Some(Stage::EndActionRound));
//! assert_eq!(stack.pop(), Some(Stage::EndTurn));
//! assert!(stack.is_empty());
//! ```

pub mod callback;
pub mod plans;
pub mod stage;

pub use callback::Callback;
pub use plans::{
    CardAction, CoupPlan, DiceUse, InfluenceEdit, InfluencePick, PickUse, PlayFlags, PlayedCard,
    RealignPlan, WarPlan,
};
pub use stage::Stage;

use im::Vector;
use serde::{Deserialize, Serialize};

/// LIFO list of pending stages. Index 0 is the bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStack {
    stages: Vector<Stage>,
}

impl StageStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one stage to run next.
    pub fn push(&mut self, stage: Stage) {
        self.stages.push_back(stage);
    }

    /// Push stages given in execution order: the first item runs first.
    pub fn push_all(&mut self, stages: impl IntoIterator<Item = Stage>) {
        let stages: Vec<Stage> = stages.into_iter().collect();
        for stage in stages.into_iter().rev() {
            self.stages.push_back(stage);
        }
    }

    /// Remove and return the stage that runs next.
    pub fn pop(&mut self) -> Option<Stage> {
        self.stages.pop_back()
    }

    /// The stage that runs next.
    #[must_use]
    pub fn peek(&self) -> Option<&Stage> {
        self.stages.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Drop every pending stage.
    pub fn clear(&mut self) {
        self.stages.clear();
    }

    /// Iterate from the stage that runs next down to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter().rev()
    }
}
