#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::engine::test_helper::TestCsp;
use crate::propagators::PropagationStrategy;

#[test]
fn the_root_call_is_trivially_successful() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[1, 2]);
    let y = test.new_variable("y", &[1, 2]);
    let _ = test.post_not_equal(x, y);

    let checkpoint = test.checkpoint();
    let status = test.propagate(PropagationStrategy::BacktrackChecking, None);

    assert!(status.is_ok());
    assert!(test.pruned_since(checkpoint).is_empty());
}

#[test]
fn a_partially_assigned_constraint_is_not_checked() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[1, 2]);
    let y = test.new_variable("y", &[1, 2]);
    let _ = test.post_not_equal(x, y);

    test.assign(x, 1);
    let status = test.propagate(PropagationStrategy::BacktrackChecking, Some(x));

    assert!(status.is_ok());
    // Backtrack checking never prunes, even from a violating pair.
    test.assert_domain(y, &[1, 2]);
}

#[test]
fn a_violated_fully_assigned_constraint_is_detected() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[1, 2]);
    let y = test.new_variable("y", &[1, 2]);
    let constraint = test.post_not_equal(x, y);

    test.assign(x, 1);
    test.assign(y, 1);

    let checkpoint = test.checkpoint();
    let status = test.propagate(PropagationStrategy::BacktrackChecking, Some(y));

    assert_eq!(status, Err(Inconsistency::Conflict(constraint)));
    assert!(test.pruned_since(checkpoint).is_empty());
}

#[test]
fn a_satisfied_fully_assigned_constraint_passes() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[1, 2]);
    let y = test.new_variable("y", &[1, 2]);
    let _ = test.post_not_equal(x, y);

    test.assign(x, 1);
    test.assign(y, 2);

    let status = test.propagate(PropagationStrategy::BacktrackChecking, Some(y));
    assert!(status.is_ok());
}
