//! Hiring workflow.
//!
//! Validates the part-time ratio, allocates a matricule, computes the
//! starting salary and persists the new employee. Nothing is built or saved
//! when validation or allocation fails.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculation::{allocate_matricule, calculate_starting_salary};
use crate::config::CompanyConfig;
use crate::error::EngineResult;
use crate::ledger::Ledger;
use crate::models::{AuditStep, EducationLevel, Employee, PartTimeRatio, Role};

/// The data needed to hire an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireRequest {
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// The position to hire into.
    pub role: Role,
    /// Highest diploma held.
    pub education_level: EducationLevel,
    /// Part-time ratio, checked to lie within (0, 1]; leave empty when not
    /// recorded.
    #[serde(default)]
    pub part_time_ratio: Option<Decimal>,
}

/// The persisted employee together with how its salary was derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireOutcome {
    /// The employee as returned by the ledger.
    pub employee: Employee,
    /// The salary calculation audit step.
    pub salary_audit: AuditStep,
}

/// Hires an employee on `hire_date`.
///
/// The record starts at the baseline performance and keeps the part-time
/// ratio exactly as supplied, even when absent.
///
/// # Errors
///
/// - [`crate::error::EngineError::InvalidInput`] when the part-time ratio is
///   outside (0, 1], before the ledger is queried.
/// - Allocation errors ([`crate::error::EngineError::AllocationExhausted`],
///   [`crate::error::EngineError::DuplicateIdentifier`]) and ledger failures
///   are returned unchanged.
///
/// # Examples
///
/// ```no_run
/// use staffing_engine::config::ConfigLoader;
/// use staffing_engine::ledger::InMemoryLedger;
/// use staffing_engine::models::{EducationLevel, Role};
/// use staffing_engine::workflow::{HireRequest, hire_employee};
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let mut ledger = InMemoryLedger::new();
/// let outcome = hire_employee(
///     &mut ledger,
///     loader.config(),
///     HireRequest {
///         last_name: "Doe".to_string(),
///         first_name: "John".to_string(),
///         role: Role::Technician,
///         education_level: EducationLevel::Vocational,
///         part_time_ratio: None,
///     },
///     NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
/// )?;
/// assert_eq!(outcome.employee.matricule.to_string(), "T00001");
/// # Ok::<(), staffing_engine::error::EngineError>(())
/// ```
pub fn hire_employee<L: Ledger + ?Sized>(
    ledger: &mut L,
    config: &CompanyConfig,
    request: HireRequest,
    hire_date: NaiveDate,
) -> EngineResult<HireOutcome> {
    let part_time_ratio = request
        .part_time_ratio
        .map(PartTimeRatio::new)
        .transpose()?;

    let matricule = allocate_matricule(ledger, request.role)?;

    let salary = calculate_starting_salary(
        request.role,
        request.education_level,
        part_time_ratio,
        config,
    );

    let employee = Employee {
        matricule,
        last_name: request.last_name,
        first_name: request.first_name,
        education_level: request.education_level,
        hire_date,
        part_time_ratio,
        salary: salary.salary,
        performance: config.baseline_performance(),
    };

    let employee = ledger.save(employee)?;
    info!(
        matricule = %employee.matricule,
        role = ?employee.role(),
        salary = %employee.salary,
        "Employee hired"
    );

    Ok(HireOutcome {
        employee,
        salary_audit: salary.audit_step,
    })
}
