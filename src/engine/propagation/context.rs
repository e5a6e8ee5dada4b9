use log::trace;

use crate::basic_types::Inconsistency;
use crate::engine::csp::Csp;
use crate::engine::trail::Trail;
use crate::engine::variable::EmptyDomain;
use crate::engine::variable::VariableId;

/// The mutable view a propagation strategy works through: read access to the
/// problem, plus pruning with every prune recorded on the trail for the
/// search to undo.
#[derive(Debug)]
pub struct PropagationContextMut<'a> {
    csp: &'a mut Csp,
    trail: &'a mut Trail,
}

impl<'a> PropagationContextMut<'a> {
    pub fn new(csp: &'a mut Csp, trail: &'a mut Trail) -> PropagationContextMut<'a> {
        PropagationContextMut { csp, trail }
    }

    /// Read access to the problem.
    pub fn csp(&self) -> &Csp {
        self.csp
    }

    /// A snapshot of the current domain of `variable`.
    pub fn current_domain(&self, variable: VariableId) -> Vec<i32> {
        self.csp.variable(variable).current_domain()
    }

    /// Prunes `value` from the current domain of `variable`, recording the
    /// prune on the trail.
    ///
    /// Returns [`Inconsistency::EmptyDomain`] when the prune leaves `variable`
    /// without candidate values; the wipeout-causing prune is recorded like
    /// any other, so restoring the trail undoes it too.
    pub fn remove(&mut self, variable: VariableId, value: i32) -> Result<(), Inconsistency> {
        trace!(
            "pruned {value} from {}",
            self.csp.variable(variable).name()
        );
        self.trail.record(variable, value);
        self.csp
            .remove(variable, value)
            .map_err(|EmptyDomain| Inconsistency::EmptyDomain(variable))
    }
}
