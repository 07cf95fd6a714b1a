//! Bucket state types shared by the transition generator and the solver.
//!
//! These types serialize to the JSON shape consumed by callers of the
//! solver: one `{ x, y, explanation }` object per step.

use serde::Serialize;

/// Suffix appended to the explanation of the final step of a solution
pub const SOLVED_MARKER: &str = " SOLVED";

/// Fixed capacities of the two buckets for one computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacities {
    pub x: u32,
    pub y: u32,
}

impl Capacities {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Combined volume of both buckets when full
    pub fn total(&self) -> i64 {
        i64::from(self.x) + i64::from(self.y)
    }

    /// Upper bound on the number of distinct states
    pub fn state_count(&self) -> u64 {
        (u64::from(self.x) + 1) * (u64::from(self.y) + 1)
    }

    /// Whether `state` lies within these capacities
    pub fn contains(&self, state: BucketState) -> bool {
        state.x <= self.x && state.y <= self.y
    }
}

/// Fill levels of both buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BucketState {
    pub x: u32,
    pub y: u32,
}

impl BucketState {
    /// Both buckets empty
    pub const EMPTY: BucketState = BucketState { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether either bucket holds exactly `target`
    pub fn holds(&self, target: i64) -> bool {
        i64::from(self.x) == target || i64::from(self.y) == target
    }
}

/// One of the six moves available from any state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FillX,
    FillY,
    EmptyX,
    EmptyY,
    PourXToY,
    PourYToX,
}

impl Action {
    /// Expansion order. Changing it changes which of several equally
    /// short solutions is returned.
    pub const ALL: [Action; 6] = [
        Action::FillX,
        Action::FillY,
        Action::EmptyX,
        Action::EmptyY,
        Action::PourXToY,
        Action::PourYToX,
    ];

    pub fn explanation(self) -> &'static str {
        match self {
            Action::FillX => "Fill bucket X.",
            Action::FillY => "Fill bucket Y.",
            Action::EmptyX => "Empty bucket X.",
            Action::EmptyY => "Empty bucket Y.",
            Action::PourXToY => "Transfer from bucket X to bucket Y.",
            Action::PourYToX => "Transfer from bucket Y to bucket X.",
        }
    }
}

/// A state together with the explanation of the move that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub x: u32,
    pub y: u32,
    pub explanation: String,
}

impl PathStep {
    /// The starting step: both buckets empty, no explanation
    pub fn initial() -> Self {
        Self::from_state(BucketState::EMPTY, String::new())
    }

    pub fn reached_by(state: BucketState, action: Action) -> Self {
        Self::from_state(state, action.explanation().to_string())
    }

    fn from_state(state: BucketState, explanation: String) -> Self {
        Self {
            x: state.x,
            y: state.y,
            explanation,
        }
    }

    pub fn state(&self) -> BucketState {
        BucketState::new(self.x, self.y)
    }

    /// Append the terminal marker to this step's explanation
    pub fn mark_solved(&mut self) {
        self.explanation.push_str(SOLVED_MARKER);
    }

    pub fn is_solved(&self) -> bool {
        self.explanation.ends_with(SOLVED_MARKER)
    }
}

/// Ordered steps from the empty state to a goal state; empty when no
/// solution exists
pub type Path = Vec<PathStep>;
