#![cfg(any(test, doc))]
//! This module exposes helpers that aid testing of propagation strategies.
//! The [`TestCsp`] bundles a small problem with its trail and allows driving
//! the strategies through the same calls an external search would make.

use crate::basic_types::PropagationStatus;
use crate::constraints;
use crate::engine::constraint::Constraint;
use crate::engine::constraint::ConstraintId;
use crate::engine::csp::Csp;
use crate::engine::trail::Trail;
use crate::engine::trail::TrailEntry;
use crate::engine::trail::TrailPosition;
use crate::engine::variable::VariableId;
use crate::propagators;
use crate::propagators::PropagationStrategy;

/// A container for a problem plus its trail, which can be used to test
/// propagation strategies under specific scenarios.
#[derive(Debug)]
pub(crate) struct TestCsp {
    pub(crate) csp: Csp,
    pub(crate) trail: Trail,
}

impl Default for TestCsp {
    fn default() -> TestCsp {
        TestCsp {
            csp: Csp::new("test"),
            trail: Trail::default(),
        }
    }
}

#[allow(unused, reason = "not every helper is used by every test suite")]
impl TestCsp {
    pub(crate) fn new_variable(&mut self, name: &str, values: &[i32]) -> VariableId {
        self.csp.new_variable(name, values)
    }

    pub(crate) fn post(&mut self, constraint: Constraint) -> ConstraintId {
        self.csp
            .add_constraint(constraint)
            .expect("Expected a well-formed constraint")
    }

    pub(crate) fn post_not_equal(&mut self, x: VariableId, y: VariableId) -> ConstraintId {
        let name = format!("ne_{}_{}", x.index(), y.index());
        let constraint = constraints::not_equal(&self.csp, name, x, y);
        self.post(constraint)
    }

    pub(crate) fn assign(&mut self, variable: VariableId, value: i32) {
        self.csp.assign(variable, value);
    }

    pub(crate) fn unassign(&mut self, variable: VariableId) {
        self.csp.unassign(variable);
    }

    pub(crate) fn propagate(
        &mut self,
        strategy: PropagationStrategy,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus {
        propagators::propagate(&mut self.csp, &mut self.trail, strategy, new_variable)
    }

    pub(crate) fn checkpoint(&self) -> TrailPosition {
        self.trail.position()
    }

    pub(crate) fn restore(&mut self, position: TrailPosition) {
        self.trail.restore_to(&mut self.csp, position);
    }

    pub(crate) fn pruned_since(&self, position: TrailPosition) -> &[TrailEntry] {
        self.trail.entries_since(position)
    }

    pub(crate) fn contains(&self, variable: VariableId, value: i32) -> bool {
        self.csp.variable(variable).contains(value)
    }

    pub(crate) fn assert_domain(&self, variable: VariableId, expected: &[i32]) {
        let actual = self.csp.variable(variable).current_domain();
        assert_eq!(
            actual,
            expected,
            "The domain of {} did not match the expected domain",
            self.csp.variable(variable).name()
        );
    }

    /// Checks that every remaining value of every variable has support in
    /// every incident constraint.
    pub(crate) fn assert_arc_consistent(&self) {
        for variable in self.csp.variables() {
            for value in self.csp.variable(variable).current_domain() {
                for &constraint_id in self.csp.constraints_of(variable) {
                    let constraint = self.csp.constraint(constraint_id);
                    assert!(
                        constraint.has_support(&self.csp, variable, value),
                        "{} = {value} has no support in {}",
                        self.csp.variable(variable).name(),
                        constraint.name()
                    );
                }
            }
        }
    }

    /// The current domain of every variable, in registration order.
    pub(crate) fn snapshot(&self) -> Vec<Vec<i32>> {
        self.csp
            .variables()
            .map(|variable| self.csp.variable(variable).current_domain())
            .collect()
    }
}
