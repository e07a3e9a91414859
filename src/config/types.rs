//! Configuration types for hiring and scoring rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Coefficient tables use
//! one named field per variant so that a missing entry fails to parse
//! instead of silently defaulting.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{EducationLevel, Role};

/// Company-wide constants from `company.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// The company name.
    pub name: String,
    /// Base monthly salary before coefficients.
    pub base_salary: Decimal,
    /// Performance rating given at hiring and for targets not exceeded.
    pub baseline_performance: u32,
}

/// Salary coefficient per education level.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationCoefficients {
    /// Coefficient for [`EducationLevel::Apprenticeship`].
    pub apprenticeship: Decimal,
    /// Coefficient for [`EducationLevel::Baccalaureate`].
    pub baccalaureate: Decimal,
    /// Coefficient for [`EducationLevel::Vocational`].
    pub vocational: Decimal,
    /// Coefficient for [`EducationLevel::Bachelor`].
    pub bachelor: Decimal,
    /// Coefficient for [`EducationLevel::Master`].
    pub master: Decimal,
    /// Coefficient for [`EducationLevel::Engineer`].
    pub engineer: Decimal,
    /// Coefficient for [`EducationLevel::Doctorate`].
    pub doctorate: Decimal,
}

impl EducationCoefficients {
    /// Returns the coefficient for an education level.
    pub fn for_level(&self, level: EducationLevel) -> Decimal {
        match level {
            EducationLevel::Apprenticeship => self.apprenticeship,
            EducationLevel::Baccalaureate => self.baccalaureate,
            EducationLevel::Vocational => self.vocational,
            EducationLevel::Bachelor => self.bachelor,
            EducationLevel::Master => self.master,
            EducationLevel::Engineer => self.engineer,
            EducationLevel::Doctorate => self.doctorate,
        }
    }
}

/// Salary coefficient per role.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleCoefficients {
    /// Coefficient for [`Role::Technician`].
    pub technician: Decimal,
    /// Coefficient for [`Role::Manager`].
    pub manager: Decimal,
    /// Coefficient for [`Role::Commercial`].
    pub commercial: Decimal,
}

impl RoleCoefficients {
    /// Returns the coefficient for a role.
    pub fn for_role(&self, role: Role) -> Decimal {
        match role {
            Role::Technician => self.technician,
            Role::Manager => self.manager,
            Role::Commercial => self.commercial,
        }
    }
}

/// Salary configuration from `salary.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryConfig {
    /// Coefficients keyed by education level.
    pub education_coefficients: EducationCoefficients,
    /// Coefficients keyed by role.
    pub role_coefficients: RoleCoefficients,
}

/// Ratings awarded within one scoring tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TierRatings {
    /// Rating when the team average reaches the threshold.
    pub at_or_above_average: u32,
    /// Rating when the team average is below the threshold.
    pub below_average: u32,
}

impl TierRatings {
    /// Picks the rating for the given team standing.
    pub fn rating(&self, team_at_or_above_threshold: bool) -> u32 {
        if team_at_or_above_threshold {
            self.at_or_above_average
        } else {
            self.below_average
        }
    }
}

/// Scoring configuration from `scoring.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Revenue ratio from which the target counts as exceeded.
    pub exceeded_ratio: Decimal,
    /// Team average performance splitting each tier.
    pub team_average_threshold: f64,
    /// Ratings for 1 < ratio < `exceeded_ratio`.
    pub above_target: TierRatings,
    /// Ratings for ratio >= `exceeded_ratio`.
    pub exceeded_target: TierRatings,
}

/// The complete company configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CompanyConfig {
    metadata: CompanyMetadata,
    salary: SalaryConfig,
    scoring: ScoringConfig,
}

impl CompanyConfig {
    /// Creates a new CompanyConfig from its component parts.
    pub fn new(metadata: CompanyMetadata, salary: SalaryConfig, scoring: ScoringConfig) -> Self {
        Self {
            metadata,
            salary,
            scoring,
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.metadata
    }

    /// Returns the salary coefficient tables.
    pub fn salary(&self) -> &SalaryConfig {
        &self.salary
    }

    /// Returns the scoring tiers.
    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Returns the base salary.
    pub fn base_salary(&self) -> Decimal {
        self.metadata.base_salary
    }

    /// Returns the baseline performance rating.
    pub fn baseline_performance(&self) -> u32 {
        self.metadata.baseline_performance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ratings_pick_by_team_standing() {
        let ratings = TierRatings {
            at_or_above_average: 5,
            below_average: 6,
        };
        assert_eq!(ratings.rating(true), 5);
        assert_eq!(ratings.rating(false), 6);
    }

    #[test]
    fn test_salary_config_requires_every_education_level() {
        let yaml = r#"
education_coefficients:
  apprenticeship: "1.0"
  baccalaureate: "1.1"
role_coefficients:
  technician: "1.0"
  manager: "1.0"
  commercial: "1.0"
"#;
        let result: Result<SalaryConfig, _> = serde_yaml::from_str(yaml);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing field"), "got: {}", message);
    }

    #[test]
    fn test_coefficient_lookup_covers_all_variants() {
        let yaml = r#"
education_coefficients:
  apprenticeship: "1.0"
  baccalaureate: "1.1"
  vocational: "1.2"
  bachelor: "1.3"
  master: "1.4"
  engineer: "1.6"
  doctorate: "1.7"
role_coefficients:
  technician: "1.0"
  manager: "1.5"
  commercial: "0.9"
"#;
        let salary: SalaryConfig = serde_yaml::from_str(yaml).unwrap();

        let education: Vec<Decimal> = EducationLevel::ALL
            .iter()
            .map(|level| salary.education_coefficients.for_level(*level))
            .collect();
        assert_eq!(
            education,
            vec![
                Decimal::new(10, 1),
                Decimal::new(11, 1),
                Decimal::new(12, 1),
                Decimal::new(13, 1),
                Decimal::new(14, 1),
                Decimal::new(16, 1),
                Decimal::new(17, 1),
            ]
        );

        assert_eq!(
            salary.role_coefficients.for_role(Role::Manager),
            Decimal::new(15, 1)
        );
        assert_eq!(
            salary.role_coefficients.for_role(Role::Commercial),
            Decimal::new(9, 1)
        );
    }
}
