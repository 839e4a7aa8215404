//! In-memory store implementations.
//!
//! These back the test suite and the HTTP state. Payroll records keep
//! insertion order so listings have a stable tie order within a period.

use chrono::Datelike;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, PayrollRecord};

use super::{AttendanceStore, EmployeeStore, PayrollStore};

/// In-memory employee store.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmployeeStore {
    employees: Vec<Employee>,
}

impl MemoryEmployeeStore {
    /// Creates a store holding the given employees.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Adds an employee to the store.
    pub fn insert(&mut self, employee: Employee) {
        self.employees.push(employee);
    }
}

impl EmployeeStore for MemoryEmployeeStore {
    fn get(&self, employee_id: u64) -> EngineResult<Employee> {
        self.employees
            .iter()
            .find(|e| e.id == employee_id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("employee", employee_id))
    }
}

/// In-memory attendance store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAttendanceStore {
    records: Vec<AttendanceRecord>,
}

impl MemoryAttendanceStore {
    /// Creates a store holding the given attendance records.
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    /// Adds an attendance record to the store.
    pub fn insert(&mut self, record: AttendanceRecord) {
        self.records.push(record);
    }
}

impl AttendanceStore for MemoryAttendanceStore {
    fn query(
        &self,
        employee_id: u64,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| {
                r.employee_id == employee_id && r.date.year() == year && r.date.month() == month
            })
            .cloned()
            .collect())
    }
}

/// In-memory payroll store with auto-assigned integer ids.
#[derive(Debug, Clone, Default)]
pub struct MemoryPayrollStore {
    records: Vec<PayrollRecord>,
    next_id: u64,
}

impl MemoryPayrollStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
        }
    }
}

impl PayrollStore for MemoryPayrollStore {
    fn add(&mut self, mut record: PayrollRecord) -> EngineResult<PayrollRecord> {
        self.next_id += 1;
        record.id = self.next_id;
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, record: &PayrollRecord) -> EngineResult<()> {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(stored) => {
                *stored = record.clone();
                Ok(())
            }
            None => Err(EngineError::not_found("payroll record", record.id)),
        }
    }

    fn remove(&mut self, payroll_id: u64) -> EngineResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != payroll_id);
        if self.records.len() == before {
            return Err(EngineError::not_found("payroll record", payroll_id));
        }
        Ok(())
    }

    fn find(&self, payroll_id: u64) -> EngineResult<Option<PayrollRecord>> {
        Ok(self.records.iter().find(|r| r.id == payroll_id).cloned())
    }

    fn find_by_period(
        &self,
        employee_id: u64,
        month: u32,
        year: i32,
    ) -> EngineResult<Option<PayrollRecord>> {
        Ok(self
            .records
            .iter()
            .find(|r| r.employee_id == employee_id && r.month == month && r.year == year)
            .cloned())
    }

    fn all(&self) -> EngineResult<Vec<PayrollRecord>> {
        Ok(self.records.clone())
    }
}
