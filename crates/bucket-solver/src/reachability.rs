//! Up-front feasibility filter for the solver.
//!
//! The check runs once against the empty starting state, before any
//! search. Passing it does not promise the search will succeed: a target
//! equal to the combined capacity passes here but is never held by a
//! single bucket.

use crate::bucket::{BucketState, Capacities};

/// Greatest common divisor by the iterative Euclidean algorithm
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Decide whether `target` is worth searching for.
///
/// Capacities must both be positive.
pub fn is_reachable(caps: Capacities, target: i64) -> bool {
    let start = BucketState::EMPTY;
    let (x, y) = (i64::from(start.x), i64::from(start.y));

    if start.holds(target) || x + y == target {
        return true;
    }

    let divisor = gcd(i64::from(caps.x), i64::from(caps.y));
    target % divisor == 0 && target <= caps.total()
}
