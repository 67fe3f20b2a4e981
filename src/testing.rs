use crate::core::goal::{Goal, Search};
use crate::core::term::Term;
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every solution of `goal`, reified on the first variable it introduces.
pub fn solutions(goal: Goal) -> Vec<Term> {
    init_logging();
    goal.run_all().iter().map(|s| s.reify_first()).collect()
}

/// Assert that a goal fails
pub fn fails(goal: Goal) {
    init_logging();
    assert!(goal.run(1).is_empty());
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: Goal) {
    init_logging();
    assert!(!goal.run(1).is_empty());
}

pub fn has_unique_solution(goal: Goal, expected: Term) {
    init_logging();
    let mut solutions = goal.iter().map(|s| s.reify_first());
    assert_eq!(solutions.next(), Some(expected));
    assert_eq!(solutions.next(), None);
}
