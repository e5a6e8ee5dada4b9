mod constraint_operation_error;
mod propagation_status;

pub use constraint_operation_error::ConstraintOperationError;
pub use propagation_status::Inconsistency;
pub use propagation_status::PropagationStatus;

pub(crate) type HashMap<K, V> = fnv::FnvHashMap<K, V>;
pub(crate) type HashSet<V> = fnv::FnvHashSet<V>;
