//! Commercial performance scoring workflow.
//!
//! Validates the sales figures and matricule, loads the employee, scores it
//! against the commercial team average and persists the new rating.
//! Validation runs to completion before the ledger is queried.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculation::score_performance;
use crate::config::CompanyConfig;
use crate::error::{EngineError, EngineResult, InvalidInputReason};
use crate::ledger::Ledger;
use crate::models::{AuditStep, Employee, Role};

/// Sales results to score a commercial employee with.
///
/// Every field is optional so that absent values reach validation and are
/// reported with their dedicated reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRequest {
    /// The commercial employee's matricule.
    #[serde(default)]
    pub matricule: Option<String>,
    /// Revenue actually processed.
    #[serde(default)]
    pub revenue_processed: Option<Decimal>,
    /// Revenue target for the period.
    #[serde(default)]
    pub revenue_target: Option<Decimal>,
}

/// The updated employee together with how its rating was derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceOutcome {
    /// The employee as returned by the ledger after the update.
    pub employee: Employee,
    /// The scoring audit step.
    pub audit: AuditStep,
}

/// Recomputes and persists a commercial employee's performance rating.
///
/// Checks run in this order: processed revenue, revenue target, matricule
/// shape, then existence in the ledger.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] for absent or negative revenue figures,
///   or a matricule that is absent or not commercial.
/// - [`EngineError::NotFound`] when no employee holds the matricule.
/// - [`EngineError::Ledger`] when the ledger fails.
pub fn score_commercial_performance<L: Ledger + ?Sized>(
    ledger: &mut L,
    config: &CompanyConfig,
    request: &PerformanceRequest,
) -> EngineResult<PerformanceOutcome> {
    let revenue_processed = request
        .revenue_processed
        .filter(|revenue| *revenue >= Decimal::ZERO)
        .ok_or(InvalidInputReason::RevenueProcessed)?;

    let revenue_target = request
        .revenue_target
        .filter(|revenue| *revenue >= Decimal::ZERO)
        .ok_or(InvalidInputReason::RevenueTarget)?;

    let commercial_prefix = Role::Commercial.prefix();
    let matricule = request
        .matricule
        .as_deref()
        .filter(|matricule| matricule.starts_with(commercial_prefix))
        .ok_or(InvalidInputReason::CommercialMatricule)?;

    let mut employee = ledger
        .find_by_matricule(matricule)?
        .ok_or_else(|| EngineError::NotFound {
            matricule: matricule.to_string(),
        })?;

    let team_average =
        ledger.average_performance_for_role_prefix(&commercial_prefix.to_string())?;
    debug!(matricule, team_average = ?team_average, "Scoring commercial performance");

    let score = score_performance(revenue_processed, revenue_target, team_average, config);
    let previous = employee.performance;
    employee.performance = score.performance;

    let employee = ledger.save(employee)?;
    info!(
        matricule,
        tier = ?score.tier,
        previous_performance = previous,
        performance = employee.performance,
        "Commercial performance updated"
    );

    Ok(PerformanceOutcome {
        employee,
        audit: score.audit_step,
    })
}
