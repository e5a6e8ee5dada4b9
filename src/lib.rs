//! A propagation engine for finite-domain constraint satisfaction problems.
//!
//! A problem is modelled as a [`Csp`]: a registry of variables, each with a
//! finite domain of integer values, and extension constraints, each defined by
//! an ordered scope and an explicit set of satisfying tuples. An external
//! backtracking search assigns variables one at a time and, between decisions,
//! invokes one of three propagation strategies of increasing strength:
//!
//! - [`propagators::BacktrackChecking`] only detects violations of fully
//!   assigned constraints;
//! - [`propagators::ForwardChecking`] prunes from constraints with exactly one
//!   unassigned variable left;
//! - [`propagators::GeneralisedArcConsistency`] prunes every value without a
//!   supporting tuple, propagating to a fixpoint through a constraint
//!   worklist.
//!
//! Every prune is recorded on a [`Trail`] owned by the search, which rewinds
//! the trail to a checkpoint when it backtracks past a node.
//!
//! ```
//! use finch::constraints;
//! use finch::PropagationStrategy;
//! use finch::Csp;
//! use finch::Trail;
//!
//! let mut csp = Csp::new("demo");
//! let x = csp.new_variable("x", &[1, 2]);
//! let y = csp.new_variable("y", &[1, 2]);
//! let not_equal = constraints::not_equal(&csp, "x_ne_y", x, y);
//! let _ = csp.add_constraint(not_equal).unwrap();
//!
//! let mut trail = Trail::default();
//! csp.assign(x, 1);
//!
//! let checkpoint = trail.position();
//! let status = finch::propagate(
//!     &mut csp,
//!     &mut trail,
//!     PropagationStrategy::ForwardChecking,
//!     Some(x),
//! );
//!
//! assert!(status.is_ok());
//! assert_eq!(csp.variable(y).current_domain(), vec![2]);
//!
//! // Backtracking undoes the prune.
//! trail.restore_to(&mut csp, checkpoint);
//! assert_eq!(csp.variable(y).current_domain(), vec![1, 2]);
//! ```

pub mod asserts;
pub(crate) mod basic_types;
pub mod constraints;
mod engine;
pub mod propagators;


pub use basic_types::ConstraintOperationError;
pub use basic_types::Inconsistency;
pub use basic_types::PropagationStatus;
pub use engine::constraint::Constraint;
pub use engine::constraint::ConstraintId;
pub use engine::csp::Csp;
pub use engine::propagation::PropagationContextMut;
pub use engine::propagation::Propagator;
pub use engine::trail::Trail;
pub use engine::trail::TrailEntry;
pub use engine::trail::TrailPosition;
pub use engine::variable::Variable;
pub use engine::variable::VariableId;
pub use propagators::propagate;
pub use propagators::PropagationStrategy;
