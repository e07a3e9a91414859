//! Application state for the Staffing Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex};

use crate::config::{CompanyConfig, ConfigLoader};
use crate::error::{EngineError, EngineResult};
use crate::ledger::InMemoryLedger;

/// Shared application state.
///
/// Holds the loaded company configuration and the ledger. The ledger sits
/// behind a mutex held for the whole of a workflow, so two concurrent hires
/// can never read the same highest suffix.
#[derive(Clone)]
pub struct AppState {
    config: Arc<CompanyConfig>,
    ledger: Arc<Mutex<InMemoryLedger>>,
}

impl AppState {
    /// Creates a new application state with an empty ledger.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_ledger(config, InMemoryLedger::new())
    }

    /// Creates a new application state over an existing ledger.
    pub fn with_ledger(config: ConfigLoader, ledger: InMemoryLedger) -> Self {
        Self {
            config: Arc::new(config.into_config()),
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Returns a reference to the company configuration.
    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    /// Runs `f` with exclusive access to the ledger.
    pub fn with_ledger_lock<T>(
        &self,
        f: impl FnOnce(&mut InMemoryLedger, &CompanyConfig) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let mut ledger = self.ledger.lock().map_err(|_| EngineError::Ledger {
            message: "ledger lock poisoned by a panicked request".to_string(),
        })?;
        f(&mut *ledger, self.config.as_ref())
    }
}
