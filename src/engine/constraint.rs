use std::fmt::Display;

use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::engine::csp::Csp;
use crate::engine::variable::VariableId;
use crate::finch_assert_eq_simple;

/// A handle to a constraint registered with a [`Csp`](crate::Csp).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConstraintId {
    pub(crate) id: u32,
}

impl ConstraintId {
    pub(crate) fn new(index: usize) -> ConstraintId {
        ConstraintId { id: index as u32 }
    }

    /// The position of this constraint in the registration order of its
    /// problem.
    pub fn index(self) -> usize {
        self.id as usize
    }
}

/// An extension constraint: an ordered scope together with the explicit set
/// of scope-order tuples that satisfy it.
///
/// The satisfying set is attached once at construction and never changes;
/// only the result of [`Constraint::has_support`] changes as the domains of
/// the scope variables shrink. A support index from (scope position, value)
/// pairs to the satisfying tuples containing them keeps the support test from
/// scanning the whole table.
#[derive(Clone, Debug)]
pub struct Constraint {
    name: String,
    scope: Box<[VariableId]>,
    tuples: Vec<Box<[i32]>>,
    tuple_set: HashSet<Box<[i32]>>,
    supports: HashMap<(usize, i32), Vec<usize>>,
}

impl Constraint {
    /// Creates a constraint over `scope` satisfied by exactly the given
    /// tuples, each in scope order. Duplicate tuples are ignored.
    pub fn new(
        name: impl Display,
        scope: impl Into<Box<[VariableId]>>,
        satisfying_tuples: impl IntoIterator<Item = Vec<i32>>,
    ) -> Constraint {
        let scope = scope.into();

        let mut tuples: Vec<Box<[i32]>> = Vec::new();
        let mut tuple_set = HashSet::default();
        let mut supports: HashMap<(usize, i32), Vec<usize>> = HashMap::default();

        for tuple in satisfying_tuples {
            finch_assert_eq_simple!(
                tuple.len(),
                scope.len(),
                "a satisfying tuple must cover the whole scope"
            );

            let tuple = tuple.into_boxed_slice();
            if !tuple_set.insert(tuple.clone()) {
                continue;
            }
            for (position, &value) in tuple.iter().enumerate() {
                supports
                    .entry((position, value))
                    .or_default()
                    .push(tuples.len());
            }
            tuples.push(tuple);
        }

        Constraint {
            name: name.to_string(),
            scope,
            tuples,
            tuple_set,
            supports,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered list of variables this constraint ranges over.
    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    /// Whether the full-arity `tuple`, in scope order, satisfies this
    /// constraint.
    pub fn is_satisfied_by(&self, tuple: &[i32]) -> bool {
        self.tuple_set.contains(tuple)
    }

    /// The committed values of the scope in order, or `None` while any scope
    /// variable is unassigned.
    pub fn assigned_values(&self, csp: &Csp) -> Option<Vec<i32>> {
        self.scope
            .iter()
            .map(|&variable| csp.variable(variable).assigned_value())
            .collect()
    }

    /// The scope variables the search has not yet committed to a value.
    pub fn unassigned_variables<'a>(&'a self, csp: &'a Csp) -> impl Iterator<Item = VariableId> + 'a {
        self.scope
            .iter()
            .copied()
            .filter(|&variable| !csp.variable(variable).is_assigned())
    }

    pub fn num_unassigned(&self, csp: &Csp) -> usize {
        self.unassigned_variables(csp).count()
    }

    /// Whether `value` for `variable` appears in some satisfying tuple whose
    /// other components are all drawn from the current domains of the
    /// corresponding scope variables.
    pub fn has_support(&self, csp: &Csp, variable: VariableId, value: i32) -> bool {
        let position = self
            .scope
            .iter()
            .position(|&var| var == variable)
            .expect("the variable must occur in the scope of the constraint");

        let Some(candidates) = self.supports.get(&(position, value)) else {
            return false;
        };

        candidates.iter().any(|&tuple_index| {
            self.tuples[tuple_index]
                .iter()
                .enumerate()
                .all(|(index, &component)| {
                    index == position || csp.variable(self.scope[index]).contains(component)
                })
        })
    }
}
