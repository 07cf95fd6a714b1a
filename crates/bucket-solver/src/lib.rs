//! Two-bucket water measuring solver.
//!
//! This crate finds the shortest sequence of fill, empty and pour moves
//! that leaves a target volume in one of two buckets. A cheap divisibility
//! check rejects impossible targets before the breadth-first search runs.

pub mod bucket;
pub mod error;
pub mod reachability;
pub mod request;
pub mod solver;
pub mod transition;

// Re-export main types
pub use bucket::{Action, BucketState, Capacities, Path, PathStep, SOLVED_MARKER};
pub use error::RequestError;
pub use reachability::{gcd, is_reachable};
pub use request::{handle, SolveRequest};
pub use solver::{find_solution, search, SearchOutcome, SolverConfig, SolverResult};
pub use transition::{apply, successors};
