//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: qualifying-day
//! aggregation over attendance records and the payroll breakdown
//! computation that combines base salary, day count, and rates.

mod attendance_days;
mod pay;

pub use attendance_days::{count_qualifying_days, qualifying_days};
pub use pay::{PayBreakdown, compute_pay};
