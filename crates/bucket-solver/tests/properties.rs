//! Property-based tests for the bucket solver.
//!
//! Small capacities keep the state space tiny, so every property can be
//! checked against an exhaustive reference.

use std::collections::HashSet;

use bucket_solver::transition::connecting_action;
use bucket_solver::{
    apply, find_solution, gcd, search, Action, BucketState, Capacities, SearchOutcome,
    SolverConfig, SOLVED_MARKER,
};
use proptest::prelude::*;

/// Fewest moves to hold `target`, found by expanding the set of states
/// reachable within k moves until it stops growing
fn brute_force_min_moves(caps: Capacities, target: i64) -> Option<usize> {
    let mut reached: HashSet<BucketState> = HashSet::from([BucketState::EMPTY]);
    let mut moves = 0;

    loop {
        if reached.iter().any(|state| state.holds(target)) {
            return Some(moves);
        }

        let next: HashSet<BucketState> = reached
            .iter()
            .flat_map(|&state| Action::ALL.map(|action| apply(action, caps, state)))
            .chain(reached.iter().copied())
            .collect();

        if next.len() == reached.len() {
            return None;
        }
        reached = next;
        moves += 1;
    }
}

prop_compose! {
    fn small_capacities()(x in 1u32..=8, y in 1u32..=8) -> Capacities {
        Capacities::new(x, y)
    }
}

prop_compose! {
    fn capacities_and_target()(caps in small_capacities())
        (target in 0i64..=caps.total() + 1, caps in Just(caps)) -> (Capacities, i64) {
        (caps, target)
    }
}

proptest! {
    #[test]
    fn path_starts_empty_and_ends_solved((caps, target) in capacities_and_target()) {
        let path = find_solution(caps, target);
        if let (Some(first), Some(last)) = (path.first(), path.last()) {
            prop_assert_eq!(first.state(), BucketState::EMPTY);
            prop_assert!(last.state().holds(target));
            prop_assert!(last.is_solved());
            if path.len() > 1 {
                prop_assert_eq!(first.explanation.as_str(), "");
            }
        }
    }

    #[test]
    fn consecutive_steps_are_single_moves((caps, target) in capacities_and_target()) {
        let path = find_solution(caps, target);
        for pair in path.windows(2) {
            let action = connecting_action(caps, pair[0].state(), pair[1].state());
            prop_assert!(action.is_some());
            let explanation = pair[1]
                .explanation
                .strip_suffix(SOLVED_MARKER)
                .unwrap_or(&pair[1].explanation);
            prop_assert_eq!(explanation, action.unwrap().explanation());
        }
        for step in path.iter().rev().skip(1) {
            prop_assert!(!step.is_solved());
        }
    }

    #[test]
    fn no_state_repeats((caps, target) in capacities_and_target()) {
        let path = find_solution(caps, target);
        let distinct: HashSet<BucketState> = path.iter().map(|step| step.state()).collect();
        prop_assert_eq!(distinct.len(), path.len());
    }

    #[test]
    fn repeated_calls_are_identical((caps, target) in capacities_and_target()) {
        prop_assert_eq!(find_solution(caps, target), find_solution(caps, target));
    }

    #[test]
    fn path_is_shortest((caps, target) in capacities_and_target()) {
        let path = find_solution(caps, target);
        let expected = brute_force_min_moves(caps, target);
        prop_assert_eq!(path.len().checked_sub(1), expected);
    }

    #[test]
    fn single_bucket_targets_follow_gcd(caps in small_capacities(), raw in 0u32..=8) {
        let target = i64::from(raw.min(caps.x.max(caps.y)));
        let divisor = gcd(i64::from(caps.x), i64::from(caps.y));
        let path = find_solution(caps, target);
        prop_assert_eq!(!path.is_empty(), target % divisor == 0);
    }

    #[test]
    fn targets_above_larger_bucket_are_never_held(caps in small_capacities(), extra in 1u32..=8) {
        let larger = caps.x.max(caps.y);
        let target = i64::from(larger + extra);
        let result = search(caps, target, &SolverConfig::default());
        prop_assert!(result.path.is_empty());
        prop_assert_ne!(result.outcome, SearchOutcome::Solved);
    }

    #[test]
    fn explored_states_are_bounded((caps, target) in capacities_and_target()) {
        let result = search(caps, target, &SolverConfig::default());
        prop_assert!(result.states_explored as u64 <= caps.state_count());
    }
}
