use crate::basic_types::PropagationStatus;
use crate::engine::constraint::ConstraintId;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::variable::VariableId;

/// Prunes from constraints that have exactly one unassigned variable left:
/// every value of that variable which would violate the constraint outright
/// is removed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn name(&self) -> &str {
        "ForwardChecking"
    }

    fn propagate(
        &self,
        mut context: PropagationContextMut<'_>,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus {
        let candidates: Vec<ConstraintId> = match new_variable {
            // Before any assignment only the unary constraints can have a
            // single open variable; anything of higher arity has at least two.
            None => context
                .csp()
                .constraints()
                .filter(|&constraint| context.csp().constraint(constraint).arity() == 1)
                .collect(),
            Some(variable) => context.csp().constraints_of(variable).to_vec(),
        };

        for constraint_id in candidates {
            let unassigned = {
                let csp = context.csp();
                let mut unassigned = csp.constraint(constraint_id).unassigned_variables(csp);
                match (unassigned.next(), unassigned.next()) {
                    (Some(variable), None) => Some(variable),
                    _ => None,
                }
            };

            if let Some(variable) = unassigned {
                forward_check(&mut context, constraint_id, variable)?;
            }
        }
        Ok(())
    }
}

/// Tests every remaining value of `variable`, the sole unassigned variable in
/// the scope of `constraint_id`, and prunes the values that cannot satisfy
/// the constraint.
fn forward_check(
    context: &mut PropagationContextMut<'_>,
    constraint_id: ConstraintId,
    variable: VariableId,
) -> PropagationStatus {
    let (slot, mut values) = {
        let csp = context.csp();
        let scope = csp.constraint(constraint_id).scope();
        let slot = scope
            .iter()
            .position(|&var| var == variable)
            .expect("the unassigned variable must occur in the scope");
        // Every slot except `slot` holds a committed value; the placeholder
        // in `slot` is overwritten before each test.
        let values: Vec<i32> = scope
            .iter()
            .map(|&var| csp.variable(var).assigned_value().unwrap_or_default())
            .collect();
        (slot, values)
    };

    for value in context.current_domain(variable) {
        values[slot] = value;
        if !context
            .csp()
            .constraint(constraint_id)
            .is_satisfied_by(&values)
        {
            context.remove(variable, value)?;
        }
    }
    Ok(())
}
