//! Data-access abstraction over employee records.
//!
//! The hiring and scoring workflows only ever talk to a [`Ledger`]. Storage,
//! transactions and uniqueness constraints belong to the implementation;
//! callers running workflows concurrently must serialize the
//! read-highest-suffix, check, save sequence of a hire (see
//! [`crate::api::AppState`], which holds the ledger behind a mutex).

mod in_memory;

pub use in_memory::InMemoryLedger;

use crate::error::EngineResult;
use crate::models::Employee;

/// Lookup, save and aggregate operations over persisted employees.
#[cfg_attr(test, mockall::automock)]
pub trait Ledger {
    /// Returns the highest five-digit matricule suffix in use across all
    /// roles, or `None` when no employee exists.
    fn find_highest_matricule_suffix(&self) -> EngineResult<Option<String>>;

    /// Looks up an employee by matricule.
    fn find_by_matricule(&self, matricule: &str) -> EngineResult<Option<Employee>>;

    /// Inserts or updates an employee, returning the persisted form.
    fn save(&mut self, employee: Employee) -> EngineResult<Employee>;

    /// Returns the mean performance of employees whose matricule starts
    /// with `prefix`, or `None` when there are none.
    fn average_performance_for_role_prefix(&self, prefix: &str) -> EngineResult<Option<f64>>;
}
