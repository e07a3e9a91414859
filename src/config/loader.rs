//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading company
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{EducationLevel, Role};

use super::types::{CompanyConfig, CompanyMetadata, SalaryConfig, ScoringConfig};

/// Loads and provides access to the company configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── company.yaml  # Base salary and baseline performance
/// ├── salary.yaml   # Education and role coefficients
/// └── scoring.yaml  # Commercial performance tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_engine::config::ConfigLoader;
/// use staffing_engine::models::EducationLevel;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let coefficient = loader
///     .config()
///     .salary()
///     .education_coefficients
///     .for_level(EducationLevel::Master);
/// println!("Master coefficient: {}", coefficient);
/// # Ok::<(), staffing_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CompanyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML,
    /// or holds values the rules cannot work with.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company_path = path.join("company.yaml");
        let metadata = Self::load_yaml::<CompanyMetadata>(&company_path)?;
        Self::ensure_positive(&company_path, "base_salary", metadata.base_salary)?;

        let salary_path = path.join("salary.yaml");
        let salary = Self::load_yaml::<SalaryConfig>(&salary_path)?;
        for level in EducationLevel::ALL {
            Self::ensure_positive(
                &salary_path,
                &format!("education coefficient for {:?}", level),
                salary.education_coefficients.for_level(level),
            )?;
        }
        for role in Role::ALL {
            Self::ensure_positive(
                &salary_path,
                &format!("role coefficient for {:?}", role),
                salary.role_coefficients.for_role(role),
            )?;
        }

        let scoring_path = path.join("scoring.yaml");
        let scoring = Self::load_yaml::<ScoringConfig>(&scoring_path)?;
        if scoring.exceeded_ratio <= Decimal::ONE {
            return Err(EngineError::ConfigParseError {
                path: scoring_path.display().to_string(),
                message: format!(
                    "exceeded_ratio must be greater than 1, got {}",
                    scoring.exceeded_ratio
                ),
            });
        }

        Ok(Self {
            config: CompanyConfig::new(metadata, salary, scoring),
        })
    }

    /// Rejects a zero or negative value read from `path`.
    fn ensure_positive(path: &Path, name: &str, value: Decimal) -> EngineResult<()> {
        if value <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("{} must be positive, got {}", name, value),
            });
        }
        Ok(())
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying company configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CompanyConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Writes a config directory whose files are copies of the default ones,
    /// with `file` replaced by `content`.
    fn write_config_with(dir_name: &str, file: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "staffing_engine_{}_{}",
            dir_name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        for name in ["company.yaml", "salary.yaml", "scoring.yaml"] {
            let source = Path::new(config_path()).join(name);
            fs::copy(source, dir.join(name)).unwrap();
        }
        fs::write(dir.join(file), content).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().base_salary(), dec("1521.22"));
        assert_eq!(loader.config().baseline_performance(), 1);
    }

    #[test]
    fn test_education_coefficients_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let coefficients = &loader.config().salary().education_coefficients;

        assert_eq!(coefficients.for_level(EducationLevel::Apprenticeship), dec("1.0"));
        assert_eq!(coefficients.for_level(EducationLevel::Vocational), dec("1.2"));
        assert_eq!(coefficients.for_level(EducationLevel::Master), dec("1.4"));
        assert_eq!(coefficients.for_level(EducationLevel::Doctorate), dec("1.7"));
    }

    #[test]
    fn test_role_coefficients_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let coefficients = &loader.config().salary().role_coefficients;

        for role in Role::ALL {
            assert_eq!(coefficients.for_role(role), dec("1.0"));
        }
    }

    #[test]
    fn test_scoring_tiers_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let scoring = loader.config().scoring();

        assert_eq!(scoring.exceeded_ratio, dec("1.2"));
        assert_eq!(scoring.team_average_threshold, 2.0);
        assert_eq!(scoring.above_target.rating(true), 2);
        assert_eq!(scoring.above_target.rating(false), 3);
        assert_eq!(scoring.exceeded_target.rating(true), 5);
        assert_eq!(scoring.exceeded_target.rating(false), 6);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_non_positive_base_salary() {
        let dir = write_config_with(
            "negative_salary",
            "company.yaml",
            "name: \"Broken\"\nbase_salary: \"-10\"\nbaseline_performance: 1\n",
        );

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("company.yaml"));
                assert!(message.contains("base_salary"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_rejects_non_positive_coefficients() {
        let salary_yaml = |engineer: &str, manager: &str| {
            format!(
                r#"education_coefficients:
  apprenticeship: "1.0"
  baccalaureate: "1.1"
  vocational: "1.2"
  bachelor: "1.4"
  master: "1.4"
  engineer: "{}"
  doctorate: "1.7"
role_coefficients:
  technician: "1.0"
  manager: "{}"
  commercial: "1.0"
"#,
                engineer, manager
            )
        };

        let cases = [
            ("zero_engineer", salary_yaml("0", "1.0"), "Engineer"),
            ("negative_manager", salary_yaml("1.6", "-1.0"), "Manager"),
        ];

        for (dir_name, content, culprit) in cases {
            let dir = write_config_with(dir_name, "salary.yaml", &content);

            match ConfigLoader::load(&dir) {
                Err(EngineError::ConfigParseError { path, message }) => {
                    assert!(path.contains("salary.yaml"));
                    assert!(message.contains(culprit), "got: {}", message);
                    assert!(message.contains("must be positive"), "got: {}", message);
                }
                other => panic!("Expected ConfigParseError, got {:?}", other),
            }
            fs::remove_dir_all(dir).unwrap();
        }
    }

    #[test]
    fn test_load_rejects_exceeded_ratio_not_above_one() {
        let dir = write_config_with(
            "flat_ratio",
            "scoring.yaml",
            r#"exceeded_ratio: "1.0"
team_average_threshold: 2.0
above_target:
  at_or_above_average: 2
  below_average: 3
exceeded_target:
  at_or_above_average: 5
  below_average: 6
"#,
        );

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("scoring.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_reports_malformed_yaml() {
        let dir = write_config_with("malformed", "salary.yaml", "education_coefficients: [");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("salary.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).unwrap();
    }
}
