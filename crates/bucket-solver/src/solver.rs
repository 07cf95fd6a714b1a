//! Breadth-first solver for the two-bucket puzzle.
//!
//! States are explored level by level, so the first goal state dequeued is
//! reached by the fewest moves. Each discovered state records its
//! predecessor and the move taken, and the path is rebuilt once at the end.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace};

use crate::bucket::{Action, BucketState, Capacities, Path, PathStep};
use crate::reachability::is_reachable;
use crate::transition::successors;

/// Optional bounds on a single search
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Stop after expanding this many states
    pub max_states: Option<usize>,
    /// Stop once this much time has passed
    pub timeout: Option<Duration>,
}

impl SolverConfig {
    /// No bounds: the search always runs to completion
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A goal state was found
    Solved,
    /// Rejected by the feasibility check before searching
    Infeasible,
    /// Every reachable state was explored without finding the target
    Exhausted,
    /// A configured state or time bound was hit first
    LimitReached,
}

/// Result of a search, with diagnostics
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub outcome: SearchOutcome,
    /// Empty unless `outcome` is `Solved`
    pub path: Path,
    /// Number of states dequeued and tested
    pub states_explored: usize,
    pub time_elapsed_ms: u64,
}

impl SolverResult {
    fn unsolved(outcome: SearchOutcome, states_explored: usize, start_time: Instant) -> Self {
        Self {
            outcome,
            path: Path::new(),
            states_explored,
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.outcome == SearchOutcome::Solved
    }
}

/// Predecessor and move for every discovered state; `None` marks the start
type Parents = HashMap<BucketState, Option<(BucketState, Action)>>;

/// Find the shortest sequence of moves leaving `target` in either bucket.
///
/// Returns an empty path when there is no solution. Both capacities must
/// be positive.
pub fn find_solution(caps: Capacities, target: i64) -> Path {
    search(caps, target, &SolverConfig::unbounded()).path
}

/// Run the search under `config`, reporting how it ended.
pub fn search(caps: Capacities, target: i64, config: &SolverConfig) -> SolverResult {
    let start_time = Instant::now();
    let deadline = config.timeout.map(|timeout| start_time + timeout);

    debug!(
        capacity_x = caps.x,
        capacity_y = caps.y,
        target,
        "starting bucket search"
    );

    if !is_reachable(caps, target) {
        debug!(target, "target rejected by feasibility check");
        return SolverResult::unsolved(SearchOutcome::Infeasible, 0, start_time);
    }

    let mut parents: Parents = HashMap::new();
    parents.insert(BucketState::EMPTY, None);

    let mut queue: VecDeque<BucketState> = VecDeque::new();
    queue.push_back(BucketState::EMPTY);

    let mut states_explored: usize = 0;

    while let Some(current) = queue.pop_front() {
        if config.max_states.is_some_and(|max| states_explored >= max)
            || deadline.is_some_and(|deadline| Instant::now() >= deadline)
        {
            debug!(states_explored, "search bound reached");
            return SolverResult::unsolved(
                SearchOutcome::LimitReached,
                states_explored,
                start_time,
            );
        }

        states_explored += 1;
        trace!(x = current.x, y = current.y, "expanding state");

        if current.holds(target) {
            let path = reconstruct(&parents, current);
            debug!(
                states_explored,
                moves = path.len() - 1,
                "bucket search solved"
            );
            return SolverResult {
                outcome: SearchOutcome::Solved,
                path,
                states_explored,
                time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            };
        }

        for (action, next) in successors(caps, current) {
            if let Entry::Vacant(slot) = parents.entry(next) {
                slot.insert(Some((current, action)));
                queue.push_back(next);
            }
        }
    }

    debug!(states_explored, "search space exhausted");
    SolverResult::unsolved(SearchOutcome::Exhausted, states_explored, start_time)
}

/// Walk predecessor links back from `goal` and mark the final step solved
fn reconstruct(parents: &Parents, goal: BucketState) -> Path {
    let mut path = Path::new();
    let mut cursor = goal;

    while let Some(&Some((previous, action))) = parents.get(&cursor) {
        path.push(PathStep::reached_by(cursor, action));
        cursor = previous;
    }
    path.push(PathStep::initial());
    path.reverse();

    if let Some(last) = path.last_mut() {
        last.mark_solved();
    }
    path
}
