//! Calculation logic for the Staffing Engine.
//!
//! This module contains the business rules: matricule allocation against
//! the ledger, the starting salary formula, and the commercial performance
//! tiers.

mod matricule_allocation;
mod performance_tier;
mod starting_salary;

pub use matricule_allocation::allocate_matricule;
pub use performance_tier::{PerformanceScore, RevenueTier, classify_revenue, score_performance};
pub use starting_salary::{SALARY_DECIMAL_PLACES, StartingSalary, calculate_starting_salary};
