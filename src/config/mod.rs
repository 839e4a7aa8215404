//! Rate configuration for the payroll engine.
//!
//! This module provides the tunable rate parameters (tax rate, insurance
//! rate, bonus per qualifying day) and a YAML loader for overriding the
//! process-wide defaults.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::RateConfig;
//!
//! let rates = RateConfig::load("./config/rates.yaml").unwrap();
//! println!("Tax rate: {}%", rates.tax_rate_percent);
//! ```

mod loader;
mod types;

pub use types::RateConfig;
