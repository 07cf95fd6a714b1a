//! State transitions for the six bucket moves.
//!
//! Every move is total and pure: it takes the current state by value and
//! returns a new one. Duplicate detection is left to the solver.

use crate::bucket::{Action, BucketState, Capacities};
use smallvec::SmallVec;

/// Candidate states produced from one frontier state, in `Action::ALL` order
pub type Successors = SmallVec<[(Action, BucketState); 6]>;

/// Apply a single move to `state`
pub fn apply(action: Action, caps: Capacities, state: BucketState) -> BucketState {
    let BucketState { x, y } = state;

    match action {
        Action::FillX => BucketState::new(caps.x, y),
        Action::FillY => BucketState::new(x, caps.y),
        Action::EmptyX => BucketState::new(0, y),
        Action::EmptyY => BucketState::new(x, 0),
        Action::PourXToY => {
            let space = caps.y - y;
            if x <= space {
                BucketState::new(0, y + x)
            } else {
                BucketState::new(x - space, caps.y)
            }
        }
        Action::PourYToX => {
            let space = caps.x - x;
            if y <= space {
                BucketState::new(x + y, 0)
            } else {
                BucketState::new(caps.x, y - space)
            }
        }
    }
}

/// All six candidate states reachable from `state` in one move
pub fn successors(caps: Capacities, state: BucketState) -> Successors {
    Action::ALL
        .iter()
        .map(|&action| (action, apply(action, caps, state)))
        .collect()
}

/// Find a move leading from `from` to `to`, if any
pub fn connecting_action(
    caps: Capacities,
    from: BucketState,
    to: BucketState,
) -> Option<Action> {
    Action::ALL
        .into_iter()
        .find(|&action| apply(action, caps, from) == to)
}
