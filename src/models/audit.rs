//! Audit trail records for rule evaluations.

use serde::{Deserialize, Serialize};

/// A single rule evaluation, recorded with its inputs and outcome.
///
/// # Example
///
/// ```
/// use staffing_engine::models::AuditStep;
///
/// let step = AuditStep {
///     rule_id: "starting_salary".to_string(),
///     rule_name: "Starting Salary".to_string(),
///     input: serde_json::json!({"role": "technician"}),
///     output: serde_json::json!({"salary": "1825.46"}),
///     reasoning: "1521.22 x 1.2 x 1 x 1 = 1825.46".to_string(),
/// };
/// assert_eq!(step.rule_id, "starting_salary");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
