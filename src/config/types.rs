//! Rate configuration types.
//!
//! This module contains the strongly-typed rate parameters that drive
//! every payroll computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three tunable parameters used by all payroll computations.
///
/// Rates are threaded explicitly into the calculator rather than read
/// from ambient state, so computations stay deterministic and testable
/// in isolation. Changing the rates affects only future computations,
/// never payroll lines that were already recorded.
///
/// The process-wide default is a 10% tax rate, a 5% insurance rate, and
/// a 50-per-day attendance bonus.
///
/// # Example
///
/// ```
/// use payroll_engine::config::RateConfig;
/// use rust_decimal::Decimal;
///
/// let rates = RateConfig::default();
/// assert_eq!(rates.tax_rate_percent, Decimal::new(10, 0));
/// assert_eq!(rates.insurance_rate_percent, Decimal::new(5, 0));
/// assert_eq!(rates.bonus_per_day, Decimal::new(50, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Tax deduction as a percentage of base salary (0-100).
    #[serde(default = "default_tax_rate")]
    pub tax_rate_percent: Decimal,
    /// Insurance deduction as a percentage of base salary (0-100).
    #[serde(default = "default_insurance_rate")]
    pub insurance_rate_percent: Decimal,
    /// Bonus paid per qualifying attendance day.
    #[serde(default = "default_bonus_per_day")]
    pub bonus_per_day: Decimal,
}

fn default_tax_rate() -> Decimal {
    Decimal::from_parts(10, 0, 0, false, 0)
}

fn default_insurance_rate() -> Decimal {
    Decimal::from_parts(5, 0, 0, false, 0)
}

fn default_bonus_per_day() -> Decimal {
    Decimal::from_parts(50, 0, 0, false, 0)
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            tax_rate_percent: default_tax_rate(),
            insurance_rate_percent: default_insurance_rate(),
            bonus_per_day: default_bonus_per_day(),
        }
    }
}
