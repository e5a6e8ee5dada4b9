use thiserror::Error;

/// Errors that can occur when registering a constraint with a
/// [`Csp`](crate::Csp).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConstraintOperationError {
    #[error("the scope of a constraint cannot be empty")]
    EmptyScope,
    #[error("the scope of a constraint refers to a variable that is not part of the problem")]
    UnknownVariable,
}
