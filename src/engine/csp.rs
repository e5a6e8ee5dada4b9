use std::fmt::Display;

use crate::basic_types::ConstraintOperationError;
use crate::basic_types::HashMap;
use crate::engine::constraint::Constraint;
use crate::engine::constraint::ConstraintId;
use crate::engine::variable::EmptyDomain;
use crate::engine::variable::Variable;
use crate::engine::variable::VariableId;

/// The registry for a single problem: every variable, every constraint, and
/// an index from each variable to the constraints whose scope contains it.
///
/// The registry is shared across the whole search tree rather than copied per
/// node; the search keeps it consistent by rewinding the
/// [`Trail`](crate::Trail) when it backtracks. Constraints are not added or
/// removed during solving, so the incidence index stays complete for the
/// lifetime of the registry.
#[derive(Debug)]
pub struct Csp {
    name: String,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    constraints_by_variable: Vec<Vec<ConstraintId>>,
    variables_by_name: HashMap<String, VariableId>,
}

impl Csp {
    pub fn new(name: impl Display) -> Csp {
        Csp {
            name: name.to_string(),
            variables: Vec::new(),
            constraints: Vec::new(),
            constraints_by_variable: Vec::new(),
            variables_by_name: HashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a new variable with the given initial domain. The domain
    /// must be non-empty. Registering a second variable under the same name
    /// overrides the name lookup, not the variable itself.
    pub fn new_variable(&mut self, name: impl Display, domain: &[i32]) -> VariableId {
        let id = VariableId::new(self.variables.len());
        let variable = Variable::new(name, domain);

        let _ = self
            .variables_by_name
            .insert(variable.name().to_owned(), id);
        self.variables.push(variable);
        self.constraints_by_variable.push(Vec::new());

        id
    }

    /// Registers `constraint` and indexes it against every variable in its
    /// scope.
    pub fn add_constraint(
        &mut self,
        constraint: Constraint,
    ) -> Result<ConstraintId, ConstraintOperationError> {
        if constraint.scope().is_empty() {
            return Err(ConstraintOperationError::EmptyScope);
        }
        if constraint
            .scope()
            .iter()
            .any(|&variable| variable.index() >= self.variables.len())
        {
            return Err(ConstraintOperationError::UnknownVariable);
        }

        let id = ConstraintId::new(self.constraints.len());
        for &variable in constraint.scope() {
            let incident = &mut self.constraints_by_variable[variable.index()];
            if !incident.contains(&id) {
                incident.push(id);
            }
        }
        self.constraints.push(constraint);

        Ok(id)
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The variables of the problem, in registration order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        (0..self.variables.len()).map(VariableId::new)
    }

    /// The constraints of the problem, in registration order.
    pub fn constraints(&self) -> impl Iterator<Item = ConstraintId> {
        (0..self.constraints.len()).map(ConstraintId::new)
    }

    pub fn variable(&self, variable: VariableId) -> &Variable {
        &self.variables[variable.index()]
    }

    pub(crate) fn variable_mut(&mut self, variable: VariableId) -> &mut Variable {
        &mut self.variables[variable.index()]
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.constraints[constraint.index()]
    }

    /// Looks a variable up by the name it was registered under.
    pub fn variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variables_by_name.get(name).copied()
    }

    /// The constraints whose scope contains `variable`.
    pub fn constraints_of(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_by_variable[variable.index()]
    }

    /// Commits `variable` to `value`, which must be in its current domain.
    pub fn assign(&mut self, variable: VariableId, value: i32) {
        self.variable_mut(variable).assign(value);
    }

    /// Reverts the commitment of `variable`, revealing the candidates that
    /// were present before the assignment again.
    pub fn unassign(&mut self, variable: VariableId) {
        self.variable_mut(variable).unassign();
    }

    pub(crate) fn remove(&mut self, variable: VariableId, value: i32) -> Result<(), EmptyDomain> {
        self.variable_mut(variable).remove(value)
    }

    pub(crate) fn reinsert(&mut self, variable: VariableId, value: i32) {
        self.variable_mut(variable).reinsert(value);
    }
}
