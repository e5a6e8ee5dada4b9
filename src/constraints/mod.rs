//! Factory functions for common extension constraints.
//!
//! Each factory builds the satisfying-tuple set over the Cartesian product of
//! the original domains of its scope, filtered by the predicate the
//! constraint encodes. The resulting [`Constraint`] still has to be
//! registered with [`Csp::add_constraint`].

use std::fmt::Display;

use crate::engine::constraint::Constraint;
use crate::engine::csp::Csp;
use crate::engine::variable::VariableId;

/// Builds an extension constraint over `scope` containing every tuple from
/// the Cartesian product of the original domains for which `predicate`
/// holds.
pub fn table(
    csp: &Csp,
    name: impl Display,
    scope: impl Into<Box<[VariableId]>>,
    predicate: impl Fn(&[i32]) -> bool,
) -> Constraint {
    let scope = scope.into();
    let domains: Vec<&[i32]> = scope
        .iter()
        .map(|&variable| csp.variable(variable).original_domain())
        .collect();

    let mut tuples = Vec::new();
    let mut cursors = vec![0_usize; domains.len()];
    let mut tuple = vec![0_i32; domains.len()];

    'product: loop {
        for (position, &cursor) in cursors.iter().enumerate() {
            tuple[position] = domains[position][cursor];
        }
        if predicate(&tuple) {
            tuples.push(tuple.clone());
        }

        // Advance the rightmost cursor that has not wrapped around yet.
        let mut position = domains.len();
        loop {
            if position == 0 {
                break 'product;
            }
            position -= 1;
            cursors[position] += 1;
            if cursors[position] < domains[position].len() {
                continue 'product;
            }
            cursors[position] = 0;
        }
    }

    Constraint::new(name, scope, tuples)
}

/// The binary constraint `x != y`.
pub fn not_equal(csp: &Csp, name: impl Display, x: VariableId, y: VariableId) -> Constraint {
    table(csp, name, [x, y], |tuple| tuple[0] != tuple[1])
}

/// Requires every variable in `scope` to take a distinct value.
pub fn all_different(
    csp: &Csp,
    name: impl Display,
    scope: impl Into<Box<[VariableId]>>,
) -> Constraint {
    table(csp, name, scope, |tuple| {
        tuple
            .iter()
            .enumerate()
            .all(|(index, value)| !tuple[..index].contains(value))
    })
}

/// Requires the values of `scope` to sum to `target`.
pub fn sum_equals(
    csp: &Csp,
    name: impl Display,
    scope: impl Into<Box<[VariableId]>>,
    target: i32,
) -> Constraint {
    table(csp, name, scope, |tuple| {
        tuple.iter().sum::<i32>() == target
    })
}
