//! Qualifying-day aggregation.
//!
//! This module counts the attendance days that qualify for the
//! per-day bonus: records in the requested period with
//! `hours_worked >= 8`.

use chrono::Datelike;

use crate::error::EngineResult;
use crate::models::AttendanceRecord;
use crate::store::AttendanceStore;

/// Counts the qualifying days within a slice of attendance records.
///
/// A record qualifies when its date falls in the requested `(year, month)`
/// and its `hours_worked` is at least [`crate::models::QUALIFYING_HOURS`].
/// Records for other periods are ignored, so a caller may pass an
/// unfiltered record set. No matches yields 0, never an error.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::qualifying_days;
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![AttendanceRecord {
///     id: 1,
///     employee_id: 1001,
///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     check_in: None,
///     check_out: None,
///     hours_worked: Decimal::new(8, 0),
/// }];
///
/// assert_eq!(qualifying_days(&records, 2024, 3), 1);
/// assert_eq!(qualifying_days(&records, 2024, 4), 0);
/// ```
pub fn qualifying_days(records: &[AttendanceRecord], year: i32, month: u32) -> u32 {
    records
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month && r.is_qualifying_day())
        .count() as u32
}

/// Queries the attendance store for one employee's period and counts the
/// qualifying days. No side effects; an employee with zero records counts
/// as 0.
pub fn count_qualifying_days<A: AttendanceStore>(
    store: &A,
    employee_id: u64,
    year: i32,
    month: u32,
) -> EngineResult<u32> {
    let records = store.query(employee_id, year, month)?;
    Ok(qualifying_days(&records, year, month))
}
