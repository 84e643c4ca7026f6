//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the registry, calculator, store and configuration
//! loader can report.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use hr_payroll::error::EngineError;
///
/// let error = EngineError::UnknownDepartment {
///     name: "Nonexistent".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown department: Nonexistent");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required field was empty, missing, negative or not a number.
    #[error("Invalid employee field '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The department name does not match any configured bucket.
    #[error("Unknown department: {name}")]
    UnknownDepartment {
        /// The department name that was not found.
        name: String,
    },

    /// A bonus value outside the fixed set reached the calculator.
    #[error("Invalid bonus code: {code}")]
    InvalidBonus {
        /// The offending bonus code.
        code: String,
    },

    /// No employee with the given id exists in the registry.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// Employees and department buckets disagree about membership.
    #[error("Registry inconsistent: {message}")]
    RegistryInconsistent {
        /// Which membership rule was broken.
        message: String,
    },

    /// Every employee id has been handed out.
    #[error("Employee ids exhausted: no id after {last}")]
    IdsExhausted {
        /// The highest id the generator reached.
        last: u64,
    },

    /// The employee store failed to load or save records.
    #[error("Persistence error at '{path}': {message}")]
    Persistence {
        /// The location the store was reading or writing.
        path: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true for errors the caller can recover from by re-prompting.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::UnknownDepartment { .. } | Self::EmployeeNotFound { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
