use crate::basic_types::PropagationStatus;
#[cfg(doc)]
use crate::Inconsistency;
#[cfg(doc)]
use crate::Trail;
use crate::engine::propagation::context::PropagationContextMut;
use crate::engine::variable::VariableId;

/// A propagation strategy, invoked by the external search between decisions.
///
/// The search calls [`Propagator::propagate`] once before the first
/// assignment (`new_variable` is `None`) and once after every assignment it
/// makes (`new_variable` is the variable just assigned). With a new variable
/// given, a strategy restricts its work to the constraints incident to it,
/// since constraints that do not touch the newly restricted variable cannot
/// have changed status.
pub trait Propagator {
    /// The name of the strategy, used for logging.
    fn name(&self) -> &str;

    /// Decides whether the current partial assignment can still be extended
    /// to a solution.
    ///
    /// Values identified as inconsistent are pruned through the context the
    /// moment they are found, never batched, and every prune is recorded on
    /// the [`Trail`]. On [`Inconsistency`] the trail still holds every prune
    /// performed, including the one that emptied a domain, so the caller can
    /// restore a consistent state.
    fn propagate(
        &self,
        context: PropagationContextMut<'_>,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus;
}
