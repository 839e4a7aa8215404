//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All ledger and store operations return this error type, making it easy
/// to handle errors consistently throughout the application. Every variant
/// is recoverable; callers decide whether to retry after correcting input.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::NotFound {
///     entity: "payroll record".to_string(),
///     id: 42,
/// };
/// assert_eq!(error.to_string(), "payroll record not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input failed validation before any computation was attempted.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A payroll record already exists for the `(employee, month, year)` tuple.
    #[error("Payroll for employee {employee_id} already exists for period {month}/{year}")]
    DuplicatePeriod {
        /// The employee the conflicting record belongs to.
        employee_id: u64,
        /// The conflicting month (1-12).
        month: u32,
        /// The conflicting year.
        year: i32,
    },

    /// The operation targeted a record or employee that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity that was missing (e.g. "employee").
        entity: String,
        /// The identifier that was looked up.
        id: u64,
    },

    /// The underlying persistent store failed.
    #[error("Storage failure: {message}")]
    Store {
        /// The underlying storage failure's message, forwarded unmodified.
        message: String,
    },

    /// Rate configuration file was not found at the specified path.
    #[error("Rate configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rate configuration file could not be parsed.
    #[error("Failed to parse rate configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for a [`EngineError::Validation`] error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`EngineError::NotFound`] error.
    pub fn not_found(entity: impl Into<String>, id: u64) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
