//! Role and education level enumerations.
//!
//! Both are closed sets: each variant carries its own matricule prefix or
//! coefficient entry, and adding a variant is checked by every exhaustive
//! `match` in the crate.

use serde::{Deserialize, Serialize};

/// The position an employee is hired into.
///
/// The role determines the single-letter matricule prefix and the role
/// coefficient used in the starting salary formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Technical staff, prefix `T`.
    Technician,
    /// Management staff, prefix `M`.
    Manager,
    /// Sales staff, prefix `C`. Only commercial employees are scored.
    Commercial,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 3] = [Role::Technician, Role::Manager, Role::Commercial];

    /// Returns the matricule prefix for this role.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_engine::models::Role;
    ///
    /// assert_eq!(Role::Manager.prefix(), 'M');
    /// assert_eq!(Role::Commercial.prefix(), 'C');
    /// ```
    pub fn prefix(self) -> char {
        match self {
            Role::Technician => 'T',
            Role::Manager => 'M',
            Role::Commercial => 'C',
        }
    }

    /// Resolves a matricule prefix back to its role.
    pub fn from_prefix(prefix: char) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.prefix() == prefix)
    }
}

/// The highest diploma an employee holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    /// Vocational aptitude certificate (CAP).
    Apprenticeship,
    /// Secondary school diploma.
    Baccalaureate,
    /// Two-year vocational or technical diploma (BTS, DUT).
    Vocational,
    /// Three-year university degree (licence).
    Bachelor,
    /// Master's degree.
    Master,
    /// Engineering school diploma.
    Engineer,
    /// Doctorate.
    Doctorate,
}

impl EducationLevel {
    /// Every education level, from lowest to highest.
    pub const ALL: [EducationLevel; 7] = [
        EducationLevel::Apprenticeship,
        EducationLevel::Baccalaureate,
        EducationLevel::Vocational,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Engineer,
        EducationLevel::Doctorate,
    ];
}
