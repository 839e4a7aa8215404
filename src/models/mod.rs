//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod payroll;
mod period;

pub use attendance::{AttendanceRecord, QUALIFYING_HOURS};
pub use employee::Employee;
pub use payroll::PayrollRecord;
pub use period::Period;
