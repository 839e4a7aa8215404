//! Payroll period model.
//!
//! This module contains the [`Period`] type identifying one payroll cycle
//! as a `(month, year)` pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A `(month, year)` pair identifying one payroll cycle.
///
/// Periods order chronologically: first by year, then by month. Ledger
/// listings use the reverse of this ordering (most recent period first).
///
/// # Example
///
/// ```
/// use payroll_engine::models::Period;
///
/// let march = Period::new(2024, 3);
/// let april = Period::new(2024, 4);
///
/// assert!(march < april);
/// assert_eq!(march.to_string(), "3/2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    /// The calendar year (positive).
    pub year: i32,
    /// The month within the year (1-12).
    pub month: u32,
}

impl Period {
    /// Creates a new period. The values are not validated here; call
    /// [`Period::validate`] before trusting caller input.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Validates that the month is in 1-12 and the year is positive.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Period;
    ///
    /// assert!(Period::new(2024, 3).validate().is_ok());
    /// assert!(Period::new(2024, 13).validate().is_err());
    /// assert!(Period::new(0, 3).validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(EngineError::validation(
                "month",
                format!("must be between 1 and 12, got {}", self.month),
            ));
        }
        if self.year < 1 {
            return Err(EngineError::validation(
                "year",
                format!("must be positive, got {}", self.year),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
