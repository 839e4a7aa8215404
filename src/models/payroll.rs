//! Payroll record model.
//!
//! A [`PayrollRecord`] is one payroll line for one employee in one period.
//! The ledger owns these records; no other component mutates a persisted
//! record's scalar fields directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Period;

/// One payroll line for one employee in one `(month, year)` period.
///
/// Invariants enforced by the ledger at every successful save:
/// - `net_salary == base_salary - deductions + bonuses`
/// - at most one record exists per `(employee_id, month, year)` tuple
///
/// An `id` of 0 marks a transient record that has not been persisted yet;
/// the store assigns the id on first save.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord {
///     id: 0,
///     employee_id: 1001,
///     month: 3,
///     year: 2024,
///     base_salary: Decimal::new(75000, 0),
///     deductions: Decimal::new(11250, 0),
///     bonuses: Decimal::new(1000, 0),
///     net_salary: Decimal::new(64750, 0),
/// };
/// assert!(record.is_transient());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Store-assigned identifier; 0 while the record is transient.
    #[serde(default)]
    pub id: u64,
    /// The employee this payroll line belongs to.
    pub employee_id: u64,
    /// The payroll month (1-12).
    pub month: u32,
    /// The payroll year.
    pub year: i32,
    /// Base salary at the time of computation.
    pub base_salary: Decimal,
    /// Total deductions (tax plus insurance).
    pub deductions: Decimal,
    /// Total bonuses (attendance-derived or caller-supplied).
    pub bonuses: Decimal,
    /// Net salary: `base_salary - deductions + bonuses`.
    pub net_salary: Decimal,
}

impl PayrollRecord {
    /// Returns true if the record has not been persisted yet.
    pub fn is_transient(&self) -> bool {
        self.id == 0
    }

    /// The `(month, year)` period this record covers.
    pub fn period(&self) -> Period {
        Period::new(self.year, self.month)
    }
}
