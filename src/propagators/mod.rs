//! The propagation strategies: three strengths over the same contract.
//!
//! See the [`crate::Propagator`] documentation for the contract all
//! strategies implement.

mod backtrack_checking;
mod forward_checking;
mod generalised_arc_consistency;

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use log::debug;

pub use backtrack_checking::BacktrackChecking;
pub use forward_checking::ForwardChecking;
pub use generalised_arc_consistency::GeneralisedArcConsistency;

use crate::basic_types::PropagationStatus;
use crate::engine::csp::Csp;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::trail::Trail;
use crate::engine::variable::VariableId;

/// The propagation strategy the search uses for the whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PropagationStrategy {
    /// Only check fully assigned constraints; never prune.
    BacktrackChecking,
    /// Prune from constraints with exactly one unassigned variable left.
    ForwardChecking,
    /// Prune every value without a supporting tuple, to a fixpoint.
    #[default]
    GeneralisedArcConsistency,
}

impl PropagationStrategy {
    /// The propagator implementing this strategy.
    pub fn propagator(self) -> &'static dyn Propagator {
        match self {
            PropagationStrategy::BacktrackChecking => &BacktrackChecking,
            PropagationStrategy::ForwardChecking => &ForwardChecking,
            PropagationStrategy::GeneralisedArcConsistency => &GeneralisedArcConsistency,
        }
    }
}

impl Display for PropagationStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PropagationStrategy::BacktrackChecking => "backtrack-checking",
            PropagationStrategy::ForwardChecking => "forward-checking",
            PropagationStrategy::GeneralisedArcConsistency => "generalised-arc-consistency",
        };
        write!(f, "{name}")
    }
}

/// Runs one propagation step with the given strategy.
///
/// With `new_variable` absent this is root propagation, run before any
/// assignment; otherwise `new_variable` is the variable the search has just
/// assigned. The prunes performed by the call are the trail entries recorded
/// after the position the trail held when the call was made; the search must
/// rewind to that position before exploring an alternative branch.
pub fn propagate(
    csp: &mut Csp,
    trail: &mut Trail,
    strategy: PropagationStrategy,
    new_variable: Option<VariableId>,
) -> PropagationStatus {
    let checkpoint = trail.position();
    let propagator = strategy.propagator();

    let status = propagator.propagate(PropagationContextMut::new(csp, trail), new_variable);
    if status.is_err() {
        debug!(
            "{} found a dead end after pruning {} value(s)",
            propagator.name(),
            trail.entries_since(checkpoint).len()
        );
    }
    status
}
