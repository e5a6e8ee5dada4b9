#![cfg(test)]

use crate::basic_types::Inconsistency;
use crate::constraints;
use crate::engine::test_helper::TestCsp;
use crate::engine::trail::TrailEntry;
use crate::propagators::PropagationStrategy;

#[test]
fn an_assignment_prunes_the_last_open_variable_of_a_binary_constraint() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[1, 2]);
    let y = test.new_variable("y", &[1, 2]);
    let _ = test.post_not_equal(x, y);

    test.assign(x, 1);

    let checkpoint = test.checkpoint();
    let status = test.propagate(PropagationStrategy::ForwardChecking, Some(x));

    assert!(status.is_ok());
    test.assert_domain(y, &[2]);
    assert_eq!(
        test.pruned_since(checkpoint),
        &[TrailEntry {
            variable: y,
            value: 1
        }]
    );
}

#[test]
fn wiping_out_the_open_variable_fails_and_keeps_the_prunes() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[1, 2]);
    let y = test.new_variable("y", &[1]);
    let _ = test.post_not_equal(x, y);

    test.assign(x, 1);

    let checkpoint = test.checkpoint();
    let status = test.propagate(PropagationStrategy::ForwardChecking, Some(x));

    assert_eq!(status, Err(Inconsistency::EmptyDomain(y)));
    assert_eq!(
        test.pruned_since(checkpoint),
        &[TrailEntry {
            variable: y,
            value: 1
        }]
    );
}

#[test]
fn the_root_call_forward_checks_unary_constraints() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[1, 2, 3, 4]);
    let even = constraints::table(&test.csp, "even", [x], |tuple| tuple[0] % 2 == 0);
    let _ = test.post(even);

    let status = test.propagate(PropagationStrategy::ForwardChecking, None);

    assert!(status.is_ok());
    test.assert_domain(x, &[2, 4]);
}

#[test]
fn the_root_call_skips_a_unary_constraint_whose_variable_is_assigned() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[1, 2]);
    let keep_one = constraints::table(&test.csp, "keep_one", [x], |tuple| tuple[0] == 1);
    let _ = test.post(keep_one);

    test.assign(x, 1);

    let checkpoint = test.checkpoint();
    let status = test.propagate(PropagationStrategy::ForwardChecking, None);

    assert!(status.is_ok());
    assert!(test.pruned_since(checkpoint).is_empty());
}

#[test]
fn constraints_with_more_than_one_open_variable_are_left_alone() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[0, 1, 2]);
    let y = test.new_variable("y", &[0, 1, 2]);
    let z = test.new_variable("z", &[0, 1, 2]);
    let sum = constraints::sum_equals(&test.csp, "sum", [x, y, z], 6);
    let _ = test.post(sum);

    test.assign(x, 2);

    let checkpoint = test.checkpoint();
    let status = test.propagate(PropagationStrategy::ForwardChecking, Some(x));

    assert!(status.is_ok());
    // Two variables are still open, so forward checking does not touch them.
    assert!(test.pruned_since(checkpoint).is_empty());
    test.assert_domain(y, &[0, 1, 2]);
    test.assert_domain(z, &[0, 1, 2]);
}

#[test]
fn the_second_to_last_assignment_triggers_the_prune() {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[0, 1, 2]);
    let y = test.new_variable("y", &[0, 1, 2]);
    let z = test.new_variable("z", &[0, 1, 2]);
    let sum = constraints::sum_equals(&test.csp, "sum", [x, y, z], 6);
    let _ = test.post(sum);

    test.assign(x, 2);
    let status = test.propagate(PropagationStrategy::ForwardChecking, Some(x));
    assert!(status.is_ok());

    test.assign(y, 2);
    let status = test.propagate(PropagationStrategy::ForwardChecking, Some(y));
    assert!(status.is_ok());

    // Only 2 + 2 + 2 reaches the target.
    test.assert_domain(z, &[2]);

    // The remaining value is consistent: committing it passes the full check.
    test.assign(z, 2);
    let status = test.propagate(PropagationStrategy::BacktrackChecking, Some(z));
    assert!(status.is_ok());
}
