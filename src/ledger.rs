//! The payroll ledger.
//!
//! This module owns persisted payroll records: it is the only component
//! that creates, recomputes, overwrites, or deletes them, and it enforces
//! the one-record-per-`(employee, period)` invariant on every path that
//! can introduce a record.

use tracing::info;

use crate::calculation::{compute_pay, count_qualifying_days};
use crate::config::RateConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollRecord, Period};
use crate::store::{AttendanceStore, EmployeeStore, PayrollStore};

/// The payroll ledger: calculate, recalculate, save, delete, and list
/// payroll records against the collaborating stores.
///
/// The ledger holds the rate configuration and threads it explicitly into
/// every computation; swapping the rates affects only future operations,
/// never records already persisted.
///
/// Every mutating operation is an authoritative
/// fetch-then-mutate-then-persist sequence scoped to a single call; the
/// ledger never trusts caller-supplied derived state, and in particular
/// recomputes `net_salary` before every save.
///
/// # Example
///
/// ```
/// use payroll_engine::config::RateConfig;
/// use payroll_engine::ledger::PayrollLedger;
/// use payroll_engine::models::Employee;
/// use payroll_engine::store::{
///     MemoryAttendanceStore, MemoryEmployeeStore, MemoryPayrollStore,
/// };
/// use rust_decimal::Decimal;
///
/// let employees = MemoryEmployeeStore::new(vec![Employee {
///     id: 1001,
///     full_name: "Ada Lovelace".to_string(),
///     base_salary: Decimal::new(75000, 0),
/// }]);
///
/// let mut ledger = PayrollLedger::new(
///     employees,
///     MemoryAttendanceStore::default(),
///     MemoryPayrollStore::new(),
///     RateConfig::default(),
/// );
///
/// let record = ledger.calculate(1001, 2024, 3).unwrap();
/// assert_eq!(record.net_salary, Decimal::new(63750, 0)); // no attendance, no bonus
/// ```
#[derive(Debug)]
pub struct PayrollLedger<E, A, P> {
    employees: E,
    attendance: A,
    payroll: P,
    rates: RateConfig,
}

impl<E, A, P> PayrollLedger<E, A, P>
where
    E: EmployeeStore,
    A: AttendanceStore,
    P: PayrollStore,
{
    /// Creates a ledger over the given stores and rate configuration.
    pub fn new(employees: E, attendance: A, payroll: P, rates: RateConfig) -> Self {
        Self {
            employees,
            attendance,
            payroll,
            rates,
        }
    }

    /// The rate configuration currently in effect.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    /// Replaces the rate configuration. Applies to future computations
    /// only; persisted records keep the values they were computed with.
    pub fn set_rates(&mut self, rates: RateConfig) {
        self.rates = rates;
    }

    /// Creates a payroll record from scratch for one employee and period.
    ///
    /// Fails with `DuplicatePeriod` if a record already exists for the
    /// exact `(employee, month, year)` tuple. Otherwise fetches the
    /// employee's current base salary, counts the period's qualifying
    /// attendance days, computes the breakdown, and persists a new record
    /// with a store-assigned id. This is the only path that derives
    /// bonuses from attendance.
    pub fn calculate(
        &mut self,
        employee_id: u64,
        year: i32,
        month: u32,
    ) -> EngineResult<PayrollRecord> {
        let period = Period::new(year, month);
        period.validate()?;

        if let Some(existing) = self.payroll.find_by_period(employee_id, month, year)? {
            return Err(EngineError::DuplicatePeriod {
                employee_id: existing.employee_id,
                month,
                year,
            });
        }

        let employee = self.employees.get(employee_id)?;
        let days = count_qualifying_days(&self.attendance, employee_id, year, month)?;
        let breakdown = compute_pay(employee.base_salary, days, &self.rates);

        let record = self.payroll.add(PayrollRecord {
            id: 0,
            employee_id,
            month,
            year,
            base_salary: employee.base_salary,
            deductions: breakdown.deductions,
            bonuses: breakdown.bonuses,
            net_salary: breakdown.net_salary,
        })?;

        info!(
            payroll_id = record.id,
            employee = %employee.full_name,
            period = %period,
            qualifying_days = days,
            net_salary = %record.net_salary,
            "Payroll calculated"
        );

        Ok(record)
    }

    /// Recomputes an existing record from the employee's current base
    /// salary and the period's attendance, overwriting its scalar fields
    /// in place.
    ///
    /// The id, employee, and period are immutable here; recalculation is
    /// not creation, so no duplicate-period check applies. Fails with
    /// `NotFound` if the record (or its employee) no longer exists.
    /// Calling this twice with unchanged salary and attendance yields an
    /// identical record.
    pub fn recalculate(&mut self, payroll_id: u64) -> EngineResult<PayrollRecord> {
        let existing = self
            .payroll
            .find(payroll_id)?
            .ok_or_else(|| EngineError::not_found("payroll record", payroll_id))?;

        let employee = self.employees.get(existing.employee_id)?;
        let days =
            count_qualifying_days(&self.attendance, existing.employee_id, existing.year, existing.month)?;
        let breakdown = compute_pay(employee.base_salary, days, &self.rates);

        let updated = PayrollRecord {
            base_salary: employee.base_salary,
            deductions: breakdown.deductions,
            bonuses: breakdown.bonuses,
            net_salary: breakdown.net_salary,
            ..existing
        };
        self.payroll.update(&updated)?;

        info!(
            payroll_id = updated.id,
            employee = %employee.full_name,
            period = %updated.period(),
            net_salary = %updated.net_salary,
            "Payroll recalculated"
        );

        Ok(updated)
    }

    /// Saves a caller-edited record, transient or persisted.
    ///
    /// Unlike [`PayrollLedger::calculate`], the caller supplies the
    /// monetary fields; the ledger still recomputes `net_salary` from
    /// them unconditionally, so the net-salary invariant holds at every
    /// successful save. Transient records get a store-assigned id and are
    /// subject to the duplicate-period check; persisted records are
    /// updated in place, and moving one onto a tuple another record holds
    /// is rejected as `DuplicatePeriod`.
    ///
    /// Fails with `Validation` when `employee_id` is unset or the period
    /// is out of range, and with `NotFound` when an assigned id no longer
    /// exists.
    pub fn save(&mut self, record: PayrollRecord) -> EngineResult<PayrollRecord> {
        if record.employee_id == 0 {
            return Err(EngineError::validation("employee_id", "must be set"));
        }
        record.period().validate()?;

        let mut record = record;
        record.net_salary = record.base_salary - record.deductions + record.bonuses;

        if record.is_transient() {
            if let Some(existing) =
                self.payroll
                    .find_by_period(record.employee_id, record.month, record.year)?
            {
                return Err(EngineError::DuplicatePeriod {
                    employee_id: existing.employee_id,
                    month: record.month,
                    year: record.year,
                });
            }

            let saved = self.payroll.add(record)?;
            info!(
                payroll_id = saved.id,
                period = %saved.period(),
                net_salary = %saved.net_salary,
                "Payroll saved"
            );
            return Ok(saved);
        }

        let stored = self
            .payroll
            .find(record.id)?
            .ok_or_else(|| EngineError::not_found("payroll record", record.id))?;

        let moved = (stored.employee_id, stored.month, stored.year)
            != (record.employee_id, record.month, record.year);
        if moved {
            if let Some(conflict) =
                self.payroll
                    .find_by_period(record.employee_id, record.month, record.year)?
            {
                if conflict.id != record.id {
                    return Err(EngineError::DuplicatePeriod {
                        employee_id: record.employee_id,
                        month: record.month,
                        year: record.year,
                    });
                }
            }
        }

        self.payroll.update(&record)?;
        info!(
            payroll_id = record.id,
            period = %record.period(),
            net_salary = %record.net_salary,
            "Payroll updated"
        );
        Ok(record)
    }

    /// Deletes a record. Fails with `NotFound` if it is already gone;
    /// deletion is terminal, so a later recalculate or save on the same
    /// id also fails with `NotFound`.
    pub fn delete(&mut self, payroll_id: u64) -> EngineResult<()> {
        self.payroll.remove(payroll_id)?;
        info!(payroll_id, "Payroll deleted");
        Ok(())
    }

    /// Returns the payroll records, optionally restricted to one period,
    /// ordered most recent period first (year descending, then month
    /// descending). Records sharing a period keep their stored order.
    pub fn list(&self, period: Option<Period>) -> EngineResult<Vec<PayrollRecord>> {
        let mut records = self.payroll.all()?;

        if let Some(period) = period {
            records.retain(|r| r.month == period.month && r.year == period.year);
        }

        // Stable sort: ties within a period keep insertion order.
        records.sort_by(|a, b| b.period().cmp(&a.period()));

        Ok(records)
    }
}
