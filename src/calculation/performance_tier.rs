//! Commercial performance scoring.
//!
//! This module maps realized revenue against target revenue onto a tier,
//! and a tier plus the commercial team's average performance onto a new
//! rating.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompanyConfig;
use crate::models::AuditStep;

/// How realized revenue compares to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueTier {
    /// ratio <= 1: target missed or exactly met.
    TargetNotExceeded,
    /// 1 < ratio < exceeded ratio.
    AboveTarget,
    /// ratio >= exceeded ratio.
    TargetExceeded,
}

/// Classifies processed revenue against its target.
///
/// Both amounts must be non-negative. A zero target counts as exceeded by
/// any positive revenue, and as exactly met by zero revenue.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::{RevenueTier, classify_revenue};
/// use rust_decimal::Decimal;
///
/// let exceeded_ratio = Decimal::new(12, 1);
/// assert_eq!(
///     classify_revenue(Decimal::from(2200), Decimal::from(2000), exceeded_ratio),
///     RevenueTier::AboveTarget
/// );
/// assert_eq!(
///     classify_revenue(Decimal::from(2400), Decimal::from(2000), exceeded_ratio),
///     RevenueTier::TargetExceeded
/// );
/// ```
pub fn classify_revenue(
    revenue_processed: Decimal,
    revenue_target: Decimal,
    exceeded_ratio: Decimal,
) -> RevenueTier {
    if revenue_target.is_zero() {
        return if revenue_processed > Decimal::ZERO {
            RevenueTier::TargetExceeded
        } else {
            RevenueTier::TargetNotExceeded
        };
    }

    if revenue_processed <= revenue_target {
        return RevenueTier::TargetNotExceeded;
    }

    // Compare products instead of dividing so the ratio boundary is exact.
    match revenue_target.checked_mul(exceeded_ratio) {
        Some(threshold) if revenue_processed >= threshold => RevenueTier::TargetExceeded,
        _ => RevenueTier::AboveTarget,
    }
}

/// The result of scoring a commercial employee.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceScore {
    /// The revenue tier reached.
    pub tier: RevenueTier,
    /// The new performance rating.
    pub performance: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes a commercial employee's new performance rating.
///
/// An absent `team_average` counts as zero.
pub fn score_performance(
    revenue_processed: Decimal,
    revenue_target: Decimal,
    team_average: Option<f64>,
    config: &CompanyConfig,
) -> PerformanceScore {
    let scoring = config.scoring();
    let tier = classify_revenue(revenue_processed, revenue_target, scoring.exceeded_ratio);

    let average = team_average.unwrap_or(0.0);
    let team_at_or_above = average >= scoring.team_average_threshold;

    let performance = match tier {
        RevenueTier::TargetNotExceeded => config.baseline_performance(),
        RevenueTier::AboveTarget => scoring.above_target.rating(team_at_or_above),
        RevenueTier::TargetExceeded => scoring.exceeded_target.rating(team_at_or_above),
    };

    let ratio = revenue_processed
        .checked_div(revenue_target)
        .map(|r| r.round_dp(4).normalize().to_string());

    let audit_step = AuditStep {
        rule_id: "commercial_performance".to_string(),
        rule_name: "Commercial Performance".to_string(),
        input: serde_json::json!({
            "revenue_processed": revenue_processed.normalize().to_string(),
            "revenue_target": revenue_target.normalize().to_string(),
            "team_average": team_average,
        }),
        output: serde_json::json!({
            "ratio": ratio,
            "tier": tier,
            "team_at_or_above_threshold": team_at_or_above,
            "performance": performance,
        }),
        reasoning: format!(
            "Revenue {} against target {} is {:?}; team average {} is {} threshold {}; performance {}",
            revenue_processed.normalize(),
            revenue_target.normalize(),
            tier,
            average,
            if team_at_or_above { "at or above" } else { "below" },
            scoring.team_average_threshold,
            performance
        ),
    };

    PerformanceScore {
        tier,
        performance,
        audit_step,
    }
}
