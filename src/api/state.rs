//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{EngineError, EngineResult};
use crate::ledger::PayrollLedger;
use crate::store::{MemoryAttendanceStore, MemoryEmployeeStore, MemoryPayrollStore};

/// The ledger type served by the HTTP surface.
pub type SharedLedger =
    PayrollLedger<MemoryEmployeeStore, MemoryAttendanceStore, MemoryPayrollStore>;

/// Shared application state.
///
/// The engine itself is single-actor; the mutex exists only because axum
/// requires shared state to be `Clone` + `Send`. Handlers take the lock
/// for the duration of one ledger operation.
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<Mutex<SharedLedger>>,
}

impl AppState {
    /// Creates a new application state owning the given ledger.
    pub fn new(ledger: SharedLedger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Locks the ledger for one operation. A poisoned lock surfaces as a
    /// storage failure rather than a panic.
    pub fn ledger(&self) -> EngineResult<MutexGuard<'_, SharedLedger>> {
        self.ledger.lock().map_err(|_| EngineError::Store {
            message: "ledger state lock poisoned".to_string(),
        })
    }
}
