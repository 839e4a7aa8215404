//! Attendance record model.
//!
//! Attendance records are read-only to the engine; a record with
//! `hours_worked >= 8` counts as one qualifying day toward the
//! attendance bonus.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The number of worked hours at or above which a day qualifies for the
/// attendance bonus.
pub const QUALIFYING_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// A single day's attendance for one employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     id: 1,
///     employee_id: 1001,
///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     check_in: None,
///     check_out: None,
///     hours_worked: Decimal::new(8, 0),
/// };
/// assert!(record.is_qualifying_day());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: u64,
    /// The employee this record belongs to.
    pub employee_id: u64,
    /// The calendar date of the attendance.
    pub date: NaiveDate,
    /// Clock-in time, if captured.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Clock-out time, if captured.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Hours worked on the date (non-negative).
    pub hours_worked: Decimal,
}

impl AttendanceRecord {
    /// Returns true if this record counts as a qualifying day
    /// (`hours_worked >= 8`).
    pub fn is_qualifying_day(&self) -> bool {
        self.hours_worked >= QUALIFYING_HOURS
    }
}
