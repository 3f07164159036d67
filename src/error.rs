//! Error types for the Net Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading a schedule or
//! computing deductions.

use thiserror::Error;

/// The main error type for the Net Salary Engine.
///
/// # Example
///
/// ```
/// use net_salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidArgument {
///     field: "professional_group".to_string(),
///     message: "must be between 1 and 11, got 12".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid argument 'professional_group': must be between 1 and 11, got 12"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input reached the engine outside of its documented domain.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The input field that was rejected.
        field: String,
        /// A description of why the value was rejected.
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

    /// A schedule was parsed but its tables are inconsistent.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// A description of the inconsistency.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
