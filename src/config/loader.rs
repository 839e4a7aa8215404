//! Rate configuration loading.
//!
//! This module reads a [`RateConfig`] from a YAML file, falling back to
//! the built-in defaults for any omitted field.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateConfig;

impl RateConfig {
    /// Loads rate configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g. "./config/rates.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed `RateConfig` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParse`)
    /// - Any rate is negative (`ConfigParse`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::RateConfig;
    ///
    /// let rates = RateConfig::load("./config/rates.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates: RateConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        rates.validate().map_err(|message| EngineError::ConfigParse {
            path: path_str,
            message,
        })?;

        Ok(rates)
    }

    /// Checks that no rate is negative. Returns the offending field's
    /// message on failure.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.tax_rate_percent.is_sign_negative() {
            return Err(format!(
                "tax_rate_percent must not be negative, got {}",
                self.tax_rate_percent
            ));
        }
        if self.insurance_rate_percent.is_sign_negative() {
            return Err(format!(
                "insurance_rate_percent must not be negative, got {}",
                self.insurance_rate_percent
            ));
        }
        if self.bonus_per_day.is_sign_negative() {
            return Err(format!(
                "bonus_per_day must not be negative, got {}",
                self.bonus_per_day
            ));
        }
        Ok(())
    }
}
