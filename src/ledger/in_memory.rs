//! In-process ledger keyed by matricule.

use std::collections::BTreeMap;

use crate::error::EngineResult;
use crate::models::{Employee, format_suffix};

use super::Ledger;

/// A [`Ledger`] holding employees in memory.
///
/// Used by the HTTP server and by tests; nothing survives a restart.
///
/// # Example
///
/// ```
/// use staffing_engine::ledger::{InMemoryLedger, Ledger};
///
/// let ledger = InMemoryLedger::new();
/// assert_eq!(ledger.find_highest_matricule_suffix().unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    employees: BTreeMap<String, Employee>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger pre-populated with the given employees.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            employees: employees
                .into_iter()
                .map(|employee| (employee.matricule.to_string(), employee))
                .collect(),
        }
    }

    /// Returns the number of stored employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employee is stored.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl Ledger for InMemoryLedger {
    fn find_highest_matricule_suffix(&self) -> EngineResult<Option<String>> {
        Ok(self
            .employees
            .values()
            .map(|employee| employee.matricule.suffix())
            .max()
            .map(format_suffix))
    }

    fn find_by_matricule(&self, matricule: &str) -> EngineResult<Option<Employee>> {
        Ok(self.employees.get(matricule).cloned())
    }

    fn save(&mut self, employee: Employee) -> EngineResult<Employee> {
        self.employees
            .insert(employee.matricule.to_string(), employee.clone());
        Ok(employee)
    }

    fn average_performance_for_role_prefix(&self, prefix: &str) -> EngineResult<Option<f64>> {
        let (count, total) = self
            .employees
            .iter()
            .filter(|(matricule, _)| matricule.starts_with(prefix))
            .fold((0u32, 0f64), |(count, total), (_, employee)| {
                (count + 1, total + f64::from(employee.performance))
            });

        Ok((count > 0).then(|| total / f64::from(count)))
    }
}
