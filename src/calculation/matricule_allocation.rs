//! Matricule allocation.
//!
//! The numeric suffix is a single counter shared by every role. It is not
//! kept in process: each allocation re-derives it from the highest suffix
//! the ledger holds, then checks the result is not already taken.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::ledger::Ledger;
use crate::models::{MAX_MATRICULE_SUFFIX, Matricule, Role};

/// Allocates the next free matricule for `role`.
///
/// Reads the ledger twice and writes nothing.
///
/// # Errors
///
/// - [`EngineError::AllocationExhausted`] when the highest suffix is already
///   `99999`.
/// - [`EngineError::DuplicateIdentifier`] when the computed matricule is
///   already held, meaning the ledger and the counter disagree.
/// - [`EngineError::Ledger`] when the stored highest suffix is not numeric.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::allocate_matricule;
/// use staffing_engine::ledger::InMemoryLedger;
/// use staffing_engine::models::Role;
///
/// let ledger = InMemoryLedger::new();
/// let matricule = allocate_matricule(&ledger, Role::Technician).unwrap();
/// assert_eq!(matricule.to_string(), "T00001");
/// ```
pub fn allocate_matricule<L: Ledger + ?Sized>(ledger: &L, role: Role) -> EngineResult<Matricule> {
    let highest = match ledger.find_highest_matricule_suffix()? {
        Some(suffix) => parse_suffix(&suffix)?,
        None => 0,
    };

    if highest >= MAX_MATRICULE_SUFFIX {
        return Err(EngineError::AllocationExhausted);
    }

    let matricule = Matricule::new(role, highest + 1).ok_or(EngineError::AllocationExhausted)?;
    debug!(highest_suffix = highest, matricule = %matricule, "Allocated matricule");

    let matricule_str = matricule.to_string();
    if ledger.find_by_matricule(&matricule_str)?.is_some() {
        return Err(EngineError::DuplicateIdentifier {
            matricule: matricule_str,
        });
    }

    Ok(matricule)
}

fn parse_suffix(suffix: &str) -> EngineResult<u32> {
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::Ledger {
            message: format!("highest matricule suffix '{}' is not numeric", suffix),
        });
    }

    suffix.parse::<u32>().map_err(|e| EngineError::Ledger {
        message: format!("highest matricule suffix '{}' is out of range: {}", suffix, e),
    })
}
