//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the payroll
//! endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PayrollRecord;

/// Request body for `POST /payroll/calculate`.
///
/// Identifies the employee and period to calculate a fresh payroll line
/// for; the engine derives every monetary field itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The employee to calculate payroll for.
    pub employee_id: u64,
    /// The payroll year.
    pub year: i32,
    /// The payroll month (1-12).
    pub month: u32,
}

/// Request body for `POST /payroll` (manual save).
///
/// Carries caller-supplied monetary fields. Omitting `id` (or sending 0)
/// saves a new record; a positive `id` updates the existing one. The
/// `net_salary` field is intentionally absent: the engine always
/// recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Store-assigned id for updates; 0 or absent for a new record.
    #[serde(default)]
    pub id: u64,
    /// The employee this payroll line belongs to.
    pub employee_id: u64,
    /// The payroll month (1-12).
    pub month: u32,
    /// The payroll year.
    pub year: i32,
    /// Base salary for the period.
    pub base_salary: Decimal,
    /// Caller-supplied total deductions.
    pub deductions: Decimal,
    /// Caller-supplied total bonuses.
    pub bonuses: Decimal,
}

impl From<SaveRequest> for PayrollRecord {
    fn from(req: SaveRequest) -> Self {
        PayrollRecord {
            id: req.id,
            employee_id: req.employee_id,
            month: req.month,
            year: req.year,
            base_salary: req.base_salary,
            deductions: req.deductions,
            bonuses: req.bonuses,
            // Recomputed by the ledger before persisting.
            net_salary: Decimal::ZERO,
        }
    }
}
