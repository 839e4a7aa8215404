//! Period filtering of payroll listings.
//!
//! A [`PayrollFilter`] derives the visible subset of a record list, either
//! everything or one `(month, year)` period. It is a pure projection: the
//! caller re-applies it whenever the backing records or the selection
//! change.

use serde::{Deserialize, Serialize};

use crate::models::{PayrollRecord, Period};

/// The display selection over a payroll record list.
///
/// # Example
///
/// ```
/// use payroll_engine::filter::PayrollFilter;
/// use payroll_engine::models::Period;
///
/// let filter = PayrollFilter::ByPeriod(Period::new(2024, 3));
/// assert!(!filter.is_all());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PayrollFilter {
    /// Show every record unchanged.
    All,
    /// Show only the records for one `(month, year)` period.
    ByPeriod(Period),
}

impl PayrollFilter {
    /// Returns true for the unfiltered selection.
    pub fn is_all(&self) -> bool {
        matches!(self, PayrollFilter::All)
    }

    /// Applies the selection to an ordered record list, preserving the
    /// input's relative order.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::filter::PayrollFilter;
    /// use payroll_engine::models::{PayrollRecord, Period};
    /// use rust_decimal::Decimal;
    ///
    /// let records = vec![PayrollRecord {
    ///     id: 1,
    ///     employee_id: 1001,
    ///     month: 3,
    ///     year: 2024,
    ///     base_salary: Decimal::new(75000, 0),
    ///     deductions: Decimal::new(11250, 0),
    ///     bonuses: Decimal::new(1000, 0),
    ///     net_salary: Decimal::new(64750, 0),
    /// }];
    ///
    /// let visible = PayrollFilter::ByPeriod(Period::new(2024, 3)).apply(&records);
    /// assert_eq!(visible.len(), 1);
    /// assert!(PayrollFilter::ByPeriod(Period::new(2024, 4)).apply(&records).is_empty());
    /// ```
    pub fn apply(&self, records: &[PayrollRecord]) -> Vec<PayrollRecord> {
        match self {
            PayrollFilter::All => records.to_vec(),
            PayrollFilter::ByPeriod(period) => records
                .iter()
                .filter(|r| r.period() == *period)
                .cloned()
                .collect(),
        }
    }
}
