use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::variable::VariableId;

/// The weakest strategy: it never prunes, and only detects a dead end once a
/// constraint has its whole scope assigned.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackChecking;

impl Propagator for BacktrackChecking {
    fn name(&self) -> &str {
        "BacktrackChecking"
    }

    fn propagate(
        &self,
        context: PropagationContextMut<'_>,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus {
        // Before the first assignment there is nothing to check.
        let Some(variable) = new_variable else {
            return Ok(());
        };

        let csp = context.csp();
        for &constraint_id in csp.constraints_of(variable) {
            let constraint = csp.constraint(constraint_id);
            let Some(values) = constraint.assigned_values(csp) else {
                continue;
            };
            if !constraint.is_satisfied_by(&values) {
                return Err(Inconsistency::Conflict(constraint_id));
            }
        }
        Ok(())
    }
}
