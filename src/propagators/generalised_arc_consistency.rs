use std::collections::VecDeque;

use crate::basic_types::PropagationStatus;
use crate::engine::constraint::ConstraintId;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::variable::VariableId;
use crate::finch_assert_extreme;

/// The strongest strategy: it revises constraints from a worklist until every
/// remaining value of every variable has a supporting tuple in every incident
/// constraint, or some domain is wiped out.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneralisedArcConsistency;

impl Propagator for GeneralisedArcConsistency {
    fn name(&self) -> &str {
        "Gac"
    }

    fn propagate(
        &self,
        mut context: PropagationContextMut<'_>,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus {
        let mut queue = ConstraintQueue::new(context.csp().num_constraints());
        match new_variable {
            // Initial propagation has to consider every constraint.
            None => context.csp().constraints().for_each(|c| queue.push(c)),
            // Constraints that do not touch the newly assigned variable
            // cannot have lost support.
            Some(variable) => context
                .csp()
                .constraints_of(variable)
                .iter()
                .for_each(|&c| queue.push(c)),
        }

        // A wipeout aborts the revision loop immediately; the rest of the
        // queue is discarded and every prune stays on the trail.
        while let Some(constraint_id) = queue.pop() {
            revise(&mut context, &mut queue, constraint_id)?;
        }
        Ok(())
    }
}

/// Prunes every value of every scope variable of `constraint_id` that no
/// longer has a supporting tuple, re-enqueueing the constraints incident to
/// any variable that shrank.
fn revise(
    context: &mut PropagationContextMut<'_>,
    queue: &mut ConstraintQueue,
    constraint_id: ConstraintId,
) -> PropagationStatus {
    let scope = context.csp().constraint(constraint_id).scope().to_vec();

    for variable in scope {
        for value in context.current_domain(variable) {
            let supported = context
                .csp()
                .constraint(constraint_id)
                .has_support(context.csp(), variable, value);
            if supported {
                continue;
            }

            context.remove(variable, value)?;
            for &incident in context.csp().constraints_of(variable) {
                queue.push(incident);
            }
        }
    }
    Ok(())
}

/// FIFO worklist of constraints still to be revised, with a presence flag per
/// constraint so a pending constraint is never enqueued twice and the
/// membership test is constant-time.
#[derive(Debug)]
struct ConstraintQueue {
    queue: VecDeque<ConstraintId>,
    pending: Box<[bool]>,
}

impl ConstraintQueue {
    fn new(num_constraints: usize) -> ConstraintQueue {
        ConstraintQueue {
            queue: VecDeque::new(),
            pending: vec![false; num_constraints].into_boxed_slice(),
        }
    }

    fn push(&mut self, constraint: ConstraintId) {
        if self.pending[constraint.index()] {
            return;
        }
        self.pending[constraint.index()] = true;
        self.queue.push_back(constraint);
    }

    fn pop(&mut self) -> Option<ConstraintId> {
        let constraint = self.queue.pop_front()?;
        finch_assert_extreme!(
            self.pending[constraint.index()],
            "a queued constraint must be flagged as pending"
        );
        self.pending[constraint.index()] = false;
        Some(constraint)
    }
}
