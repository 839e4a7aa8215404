//! Store interfaces consumed by the payroll engine.
//!
//! The engine does not own persistence. Employees and attendance records
//! are read through collaborator stores, and payroll records are written
//! through [`PayrollStore`], which assigns integer ids on add. In-memory
//! implementations back the tests and the HTTP state.

mod memory;

pub use memory::{MemoryAttendanceStore, MemoryEmployeeStore, MemoryPayrollStore};

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee, PayrollRecord};

/// Read-only access to employee records.
pub trait EmployeeStore {
    /// Fetches an employee by id. Fails with `NotFound` when absent.
    fn get(&self, employee_id: u64) -> EngineResult<Employee>;
}

/// Read-only access to attendance records.
pub trait AttendanceStore {
    /// Returns the attendance records for one employee within one
    /// `(year, month)` period. An employee with no records yields an
    /// empty sequence, not an error.
    fn query(&self, employee_id: u64, year: i32, month: u32)
    -> EngineResult<Vec<AttendanceRecord>>;
}

/// Mutable access to persisted payroll records.
///
/// Implementations assign a positive integer id on [`PayrollStore::add`]
/// and surface any underlying persistence failure as
/// [`crate::error::EngineError::Store`].
pub trait PayrollStore {
    /// Persists a transient record, returning it with its assigned id.
    fn add(&mut self, record: PayrollRecord) -> EngineResult<PayrollRecord>;

    /// Overwrites the stored record with the same id. Fails with
    /// `NotFound` when no record has that id.
    fn update(&mut self, record: &PayrollRecord) -> EngineResult<()>;

    /// Removes the record with the given id. Fails with `NotFound` when
    /// no record has that id.
    fn remove(&mut self, payroll_id: u64) -> EngineResult<()>;

    /// Looks up a record by id.
    fn find(&self, payroll_id: u64) -> EngineResult<Option<PayrollRecord>>;

    /// Looks up the record for an exact `(employee, month, year)` tuple.
    fn find_by_period(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> EngineResult<Option<PayrollRecord>>;

    /// Returns every persisted record in insertion order.
    fn all(&self) -> EngineResult<Vec<PayrollRecord>>;
}
