use std::fmt::Display;

use crate::basic_types::HashMap;
use crate::finch_assert_moderate;
use crate::finch_assert_simple;

/// A handle to a variable registered with a [`Csp`](crate::Csp).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VariableId {
    pub(crate) id: u32,
}

impl VariableId {
    pub(crate) fn new(index: usize) -> VariableId {
        VariableId { id: index as u32 }
    }

    /// The position of this variable in the registration order of its problem.
    pub fn index(self) -> usize {
        self.id as usize
    }
}

/// Marker returned when a removal leaves a variable without candidate values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EmptyDomain;

/// The domain state of a single variable.
///
/// The original domain is fixed at construction; the current domain is the
/// subset of it that is still considered possible. The current domain shrinks
/// only through [`Variable::remove`] and grows back only through
/// [`Variable::reinsert`], which are exact inverses of one another.
///
/// While a variable is assigned, every current-domain query answers as if the
/// domain were the singleton holding the assigned value; the underlying
/// presence flags are untouched, so unassigning reveals the remaining
/// candidates again.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    values: Box<[i32]>,
    value_indices: HashMap<i32, usize>,
    present: Box<[bool]>,
    present_count: usize,
    assigned: Option<i32>,
}

impl Variable {
    pub(crate) fn new(name: impl Display, domain: &[i32]) -> Variable {
        finch_assert_simple!(
            !domain.is_empty(),
            "a variable must be created with at least one candidate value"
        );

        let mut values = Vec::with_capacity(domain.len());
        let mut value_indices = HashMap::default();
        for &value in domain {
            if value_indices.contains_key(&value) {
                continue;
            }
            let _ = value_indices.insert(value, values.len());
            values.push(value);
        }

        Variable {
            name: name.to_string(),
            present: vec![true; values.len()].into_boxed_slice(),
            present_count: values.len(),
            values: values.into_boxed_slice(),
            value_indices,
            assigned: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The immutable set of values the variable could take when the problem
    /// was constructed, in first-occurrence order.
    pub fn original_domain(&self) -> &[i32] {
        &self.values
    }

    /// A snapshot of the values that are still candidates.
    pub fn current_domain(&self) -> Vec<i32> {
        match self.assigned {
            Some(value) => vec![value],
            None => self
                .values
                .iter()
                .zip(self.present.iter())
                .filter_map(|(&value, &present)| present.then_some(value))
                .collect(),
        }
    }

    /// The number of values still in the current domain.
    pub fn domain_size(&self) -> usize {
        match self.assigned {
            Some(_) => 1,
            None => self.present_count,
        }
    }

    /// Whether `value` is still in the current domain.
    pub fn contains(&self, value: i32) -> bool {
        match self.assigned {
            Some(assigned) => assigned == value,
            None => self
                .value_indices
                .get(&value)
                .is_some_and(|&index| self.present[index]),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned.is_some()
    }

    pub fn assigned_value(&self) -> Option<i32> {
        self.assigned
    }

    pub(crate) fn assign(&mut self, value: i32) {
        finch_assert_simple!(
            self.contains(value),
            "only a value in the current domain can be assigned"
        );
        self.assigned = Some(value);
    }

    pub(crate) fn unassign(&mut self) {
        finch_assert_moderate!(
            self.assigned.is_some(),
            "only an assigned variable can be unassigned"
        );
        self.assigned = None;
    }

    /// Removes `value` from the current domain.
    ///
    /// Returns [`EmptyDomain`] when the removal leaves the variable without
    /// candidate values. Removing the committed value of an assigned variable
    /// empties its visible domain, so it reports [`EmptyDomain`] as well.
    pub(crate) fn remove(&mut self, value: i32) -> Result<(), EmptyDomain> {
        finch_assert_moderate!(
            self.contains(value),
            "only a value in the current domain can be removed"
        );

        let index = self.value_indices[&value];
        self.present[index] = false;
        self.present_count -= 1;

        if self.present_count == 0 || self.assigned == Some(value) {
            return Err(EmptyDomain);
        }
        Ok(())
    }

    /// Reverses an earlier [`Variable::remove`] of `value`.
    pub(crate) fn reinsert(&mut self, value: i32) {
        let index = self.value_indices[&value];
        finch_assert_moderate!(
            !self.present[index],
            "a value can only be restored after it has been removed"
        );
        self.present[index] = true;
        self.present_count += 1;
    }
}
