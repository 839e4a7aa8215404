//! Payroll breakdown computation.
//!
//! This module provides the pure function that combines a base salary,
//! an aggregated qualifying-day count, and the rate configuration into a
//! payroll breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateConfig;

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// The result of computing one payroll line.
///
/// The tax/insurance split is retained alongside the summed `deductions`
/// because that split is what a payslip displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Tax deduction: `base_salary * tax_rate_percent / 100`.
    pub tax_deduction: Decimal,
    /// Insurance deduction: `base_salary * insurance_rate_percent / 100`.
    pub insurance_deduction: Decimal,
    /// Total deductions: tax plus insurance.
    pub deductions: Decimal,
    /// Attendance bonus: `qualifying_days * bonus_per_day`.
    pub bonuses: Decimal,
    /// Net salary: `base_salary - deductions + bonuses`.
    pub net_salary: Decimal,
}

/// Computes the payroll breakdown for one employee and period.
///
/// Pure function with no I/O: identical inputs always yield an identical
/// breakdown, which is what makes recalculation idempotent. No rounding
/// is applied; `Decimal` arithmetic keeps the exact values.
///
/// A zero `base_salary` yields zero deductions and a net salary equal to
/// the bonuses. Negative salaries are rejected upstream by the employee
/// store's invariant and are not re-validated here.
///
/// # Arguments
///
/// * `base_salary` - The employee's base salary for the period
/// * `qualifying_days` - The aggregated count of 8h+ attendance days
/// * `rates` - The rate configuration in effect for this computation
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_pay;
/// use payroll_engine::config::RateConfig;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_pay(Decimal::new(75000, 0), 20, &RateConfig::default());
///
/// assert_eq!(breakdown.deductions, Decimal::new(11250, 0));
/// assert_eq!(breakdown.bonuses, Decimal::new(1000, 0));
/// assert_eq!(breakdown.net_salary, Decimal::new(64750, 0));
/// ```
pub fn compute_pay(base_salary: Decimal, qualifying_days: u32, rates: &RateConfig) -> PayBreakdown {
    let tax_deduction = base_salary * rates.tax_rate_percent / ONE_HUNDRED;
    let insurance_deduction = base_salary * rates.insurance_rate_percent / ONE_HUNDRED;
    let deductions = tax_deduction + insurance_deduction;

    let bonuses = Decimal::from(qualifying_days) * rates.bonus_per_day;

    let net_salary = base_salary - deductions + bonuses;

    PayBreakdown {
        tax_deduction,
        insurance_deduction,
        deductions,
        bonuses,
        net_salary,
    }
}
