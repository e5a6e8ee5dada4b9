use crate::engine::constraint::ConstraintId;
use crate::engine::variable::VariableId;

/// The result of invoking a propagation strategy. Propagation either succeeds
/// or identifies a dead end in the current partial assignment; in the latter
/// case every prune performed up to and including the failing one remains
/// recorded on the trail so the caller can undo cleanly.
pub type PropagationStatus = Result<(), Inconsistency>;

/// The ways in which a propagation strategy can conclude that the current
/// partial assignment cannot be extended to a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inconsistency {
    /// Pruning left the given variable without any candidate values.
    EmptyDomain(VariableId),
    /// A fully assigned constraint is violated by the committed values.
    Conflict(ConstraintId),
}
