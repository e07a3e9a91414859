//! Starting salary calculation.
//!
//! This module computes the salary offered at hiring from the company base
//! salary, the education and role coefficients, and the part-time ratio.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CompanyConfig;
use crate::models::{AuditStep, EducationLevel, PartTimeRatio, Role};

/// Number of decimal places a salary is rounded to.
pub const SALARY_DECIMAL_PLACES: u32 = 2;

/// The result of a starting salary calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct StartingSalary {
    /// The salary, rounded half-up to the cent.
    pub salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the starting salary for a new hire.
///
/// `salary = round2(base * education * role * ratio)`, where an absent
/// `part_time_ratio` counts as full time. Rounding is half-up and happens
/// once, on the full product.
///
/// # Examples
///
/// ```no_run
/// use staffing_engine::calculation::calculate_starting_salary;
/// use staffing_engine::config::ConfigLoader;
/// use staffing_engine::models::{EducationLevel, Role};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let result = calculate_starting_salary(
///     Role::Technician,
///     EducationLevel::Vocational,
///     None,
///     loader.config(),
/// );
/// assert_eq!(result.salary, Decimal::new(182546, 2));
/// ```
pub fn calculate_starting_salary(
    role: Role,
    education_level: EducationLevel,
    part_time_ratio: Option<PartTimeRatio>,
    config: &CompanyConfig,
) -> StartingSalary {
    let base_salary = config.base_salary();
    let education_coefficient = config
        .salary()
        .education_coefficients
        .for_level(education_level);
    let role_coefficient = config.salary().role_coefficients.for_role(role);
    let ratio = part_time_ratio.unwrap_or(PartTimeRatio::FULL_TIME).value();

    let unrounded = base_salary * education_coefficient * role_coefficient * ratio;
    let salary = unrounded
        .round_dp_with_strategy(SALARY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    let ratio_note = if part_time_ratio.is_some() {
        ""
    } else {
        " (no part-time ratio recorded, full time assumed)"
    };

    let audit_step = AuditStep {
        rule_id: "starting_salary".to_string(),
        rule_name: "Starting Salary".to_string(),
        input: serde_json::json!({
            "role": role,
            "education_level": education_level,
            "part_time_ratio": part_time_ratio.map(|r| r.value().normalize().to_string()),
        }),
        output: serde_json::json!({
            "salary": salary.to_string(),
            "base_salary": base_salary.normalize().to_string(),
            "education_coefficient": education_coefficient.normalize().to_string(),
            "role_coefficient": role_coefficient.normalize().to_string(),
            "effective_part_time_ratio": ratio.normalize().to_string(),
        }),
        reasoning: format!(
            "{} x {} x {} x {} = {}, rounded to {}{}",
            base_salary.normalize(),
            education_coefficient.normalize(),
            role_coefficient.normalize(),
            ratio.normalize(),
            unrounded.normalize(),
            salary,
            ratio_note
        ),
    };

    StartingSalary { salary, audit_step }
}
