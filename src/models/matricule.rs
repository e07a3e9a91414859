//! Matricule identifier type.
//!
//! A matricule is a role prefix letter followed by a five-digit,
//! zero-padded counter, e.g. `M00346`. The counter is shared by every role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputReason;

use super::Role;

/// Number of digits in a matricule suffix.
pub const MATRICULE_SUFFIX_DIGITS: usize = 5;

/// Highest usable matricule suffix.
pub const MAX_MATRICULE_SUFFIX: u32 = 99_999;

/// A unique employee identifier.
///
/// # Examples
///
/// ```
/// use staffing_engine::models::{Matricule, Role};
///
/// let matricule = Matricule::new(Role::Manager, 346).unwrap();
/// assert_eq!(matricule.to_string(), "M00346");
///
/// let parsed: Matricule = "C00001".parse().unwrap();
/// assert_eq!(parsed.role(), Role::Commercial);
/// assert_eq!(parsed.suffix(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Matricule {
    role: Role,
    suffix: u32,
}

impl Matricule {
    /// Builds a matricule, returning `None` when the suffix is outside
    /// `1..=MAX_MATRICULE_SUFFIX`.
    pub fn new(role: Role, suffix: u32) -> Option<Self> {
        (1..=MAX_MATRICULE_SUFFIX)
            .contains(&suffix)
            .then_some(Self { role, suffix })
    }

    /// Returns the role encoded in the prefix.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the numeric counter part.
    pub fn suffix(&self) -> u32 {
        self.suffix
    }

    /// Returns the zero-padded counter part, e.g. `"00346"`.
    pub fn padded_suffix(&self) -> String {
        format_suffix(self.suffix)
    }
}

/// Formats a counter value as a zero-padded matricule suffix.
pub fn format_suffix(suffix: u32) -> String {
    format!("{:0width$}", suffix, width = MATRICULE_SUFFIX_DIGITS)
}

impl fmt::Display for Matricule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.role.prefix(), self.padded_suffix())
    }
}

impl FromStr for Matricule {
    type Err = InvalidInputReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidInputReason::MalformedMatricule {
            value: s.to_string(),
        };

        let mut chars = s.chars();
        let role = chars
            .next()
            .and_then(Role::from_prefix)
            .ok_or_else(malformed)?;
        let digits = chars.as_str();

        if digits.len() != MATRICULE_SUFFIX_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let suffix = digits.parse::<u32>().map_err(|_| malformed())?;
        Matricule::new(role, suffix).ok_or_else(malformed)
    }
}

impl TryFrom<String> for Matricule {
    type Error = InvalidInputReason;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Matricule> for String {
    fn from(matricule: Matricule) -> Self {
        matricule.to_string()
    }
}
