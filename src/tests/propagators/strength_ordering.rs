#![cfg(test)]

use std::collections::HashSet;

use crate::constraints;
use crate::engine::test_helper::TestCsp;
use crate::engine::variable::VariableId;
use crate::propagators::PropagationStrategy;

/// Builds the shared problem and performs the shared assignment: three
/// variables over 1..=3 with `x != y`, `y != z` and `x + y + z = 6`, then
/// `x := 1`.
fn assigned_problem() -> (TestCsp, VariableId) {
    let mut test = TestCsp::default();

    let x = test.new_variable("x", &[1, 2, 3]);
    let y = test.new_variable("y", &[1, 2, 3]);
    let z = test.new_variable("z", &[1, 2, 3]);
    let _ = test.post_not_equal(x, y);
    let _ = test.post_not_equal(y, z);
    let sum = constraints::sum_equals(&test.csp, "sum", [x, y, z], 6);
    let _ = test.post(sum);

    test.assign(x, 1);
    (test, x)
}

fn pruned_pairs(strategy: PropagationStrategy) -> HashSet<(VariableId, i32)> {
    let (mut test, x) = assigned_problem();

    let checkpoint = test.checkpoint();
    let status = test.propagate(strategy, Some(x));
    assert!(status.is_ok());

    test.pruned_since(checkpoint)
        .iter()
        .map(|entry| (entry.variable, entry.value))
        .collect()
}

#[test]
fn stronger_strategies_prune_supersets_of_weaker_ones() {
    let backtrack = pruned_pairs(PropagationStrategy::BacktrackChecking);
    let forward = pruned_pairs(PropagationStrategy::ForwardChecking);
    let gac = pruned_pairs(PropagationStrategy::GeneralisedArcConsistency);

    assert!(backtrack.is_subset(&forward));
    assert!(forward.is_subset(&gac));
}

#[test]
fn each_strategy_prunes_its_expected_set() {
    let (test, _) = assigned_problem();
    let y = test.csp.variable_by_name("y").expect("y is registered");
    let z = test.csp.variable_by_name("z").expect("z is registered");

    assert!(pruned_pairs(PropagationStrategy::BacktrackChecking).is_empty());

    // Only `x != y` has a single open variable after the assignment.
    assert_eq!(
        pruned_pairs(PropagationStrategy::ForwardChecking),
        HashSet::from([(y, 1)])
    );

    // The sum constraint additionally rules out z = 1 once x is fixed.
    assert_eq!(
        pruned_pairs(PropagationStrategy::GeneralisedArcConsistency),
        HashSet::from([(y, 1), (z, 1)])
    );
}
