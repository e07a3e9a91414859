//! Error types for the Staffing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while hiring employees or
//! scoring their performance. The `Display` text of the domain errors is
//! part of the observable contract and is returned verbatim to callers.

use thiserror::Error;

/// The reason a caller-supplied value was rejected.
///
/// Callers should match on this enum rather than on the message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputReason {
    /// The processed revenue was absent or negative.
    #[error("Le chiffre d'affaire traité ne peut être négatif ou null !")]
    RevenueProcessed,

    /// The revenue target was absent or negative.
    #[error("L'objectif de chiffre d'affaire ne peut être négatif ou null !")]
    RevenueTarget,

    /// The matricule was absent or does not carry the commercial prefix.
    #[error("Le matricule ne peut être null et doit commencer par un C !")]
    CommercialMatricule,

    /// The part-time ratio was outside of (0, 1].
    #[error("Le temps partiel doit être compris entre 0 exclu et 1 inclus !")]
    PartTimeRatio,

    /// A matricule string is not a role letter followed by five digits.
    #[error("Le matricule {value} est mal formé !")]
    MalformedMatricule {
        /// The rejected value.
        value: String,
    },
}

/// The main error type for the Staffing Engine.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
///
/// let error = EngineError::DuplicateIdentifier {
///     matricule: "M00001".to_string(),
/// };
/// assert_eq!(error.to_string(), "L'employé de matricule M00001 existe déjà en BDD");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller-supplied data violates a precondition.
    #[error("{reason}")]
    InvalidInput {
        /// Which precondition was violated.
        reason: InvalidInputReason,
    },

    /// The referenced employee does not exist.
    #[error("Le matricule {matricule} n'existe pas !")]
    NotFound {
        /// The matricule that was looked up.
        matricule: String,
    },

    /// Every five-digit matricule suffix is already in use.
    #[error("Limite des 100000 matricules atteinte !")]
    AllocationExhausted,

    /// The freshly allocated matricule is already held by an employee.
    #[error("L'employé de matricule {matricule} existe déjà en BDD")]
    DuplicateIdentifier {
        /// The conflicting matricule.
        matricule: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The ledger failed or returned inconsistent data.
    #[error("Ledger error: {message}")]
    Ledger {
        /// A description of the ledger failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`] with the given reason.
    pub fn invalid_input(reason: InvalidInputReason) -> Self {
        Self::InvalidInput { reason }
    }
}

impl From<InvalidInputReason> for EngineError {
    fn from(reason: InvalidInputReason) -> Self {
        Self::InvalidInput { reason }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_exhausted_message() {
        assert_eq!(
            EngineError::AllocationExhausted.to_string(),
            "Limite des 100000 matricules atteinte !"
        );
    }

    #[test]
    fn test_duplicate_identifier_displays_matricule() {
        let error = EngineError::DuplicateIdentifier {
            matricule: "M00001".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "L'employé de matricule M00001 existe déjà en BDD"
        );
    }

    #[test]
    fn test_not_found_displays_matricule() {
        let error = EngineError::NotFound {
            matricule: "C00001".to_string(),
        };
        assert_eq!(error.to_string(), "Le matricule C00001 n'existe pas !");
    }

    #[test]
    fn test_invalid_input_displays_reason_verbatim() {
        let cases = [
            (
                InvalidInputReason::RevenueProcessed,
                "Le chiffre d'affaire traité ne peut être négatif ou null !",
            ),
            (
                InvalidInputReason::RevenueTarget,
                "L'objectif de chiffre d'affaire ne peut être négatif ou null !",
            ),
            (
                InvalidInputReason::CommercialMatricule,
                "Le matricule ne peut être null et doit commencer par un C !",
            ),
        ];

        for (reason, expected) in cases {
            assert_eq!(EngineError::invalid_input(reason).to_string(), expected);
        }
    }

    #[test]
    fn test_malformed_matricule_displays_value() {
        let error: EngineError = InvalidInputReason::MalformedMatricule {
            value: "X12".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "Le matricule X12 est mal formé !");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/salary.yaml".to_string(),
            message: "missing field `master`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/salary.yaml': missing field `master`"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<InvalidInputReason>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn validate() -> Result<(), InvalidInputReason> {
            Err(InvalidInputReason::RevenueTarget)
        }

        fn rejects() -> EngineResult<()> {
            validate()?;
            Ok(())
        }

        match rejects() {
            Err(EngineError::InvalidInput { reason }) => {
                assert_eq!(reason, InvalidInputReason::RevenueTarget);
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
