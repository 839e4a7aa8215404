//! Employee model.
//!
//! The engine only reads employees; their lifecycle is owned by the
//! employee-management collaborator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A read-only view of an employee, as consumed by the payroll engine.
///
/// The engine needs the identity, a display name for log lines and
/// user-facing messages, and the base salary the calculation starts from.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     full_name: "Ada Lovelace".to_string(),
///     base_salary: Decimal::new(75000, 0),
/// };
/// assert_eq!(employee.base_salary, Decimal::new(75000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: u64,
    /// The employee's display name.
    pub full_name: String,
    /// The monthly base salary (non-negative, exact decimal).
    pub base_salary: Decimal,
}
