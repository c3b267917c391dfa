//! Error types for the attendance pay engine.
//!
//! Only the collaborator boundary (configuration loading and validation) can
//! fail. The calculation functions are total over their inputs and never
//! return these errors: missing schedules, missing attendance and malformed
//! manual edits are modelled as business states instead.

use thiserror::Error;

/// The main error type for the attendance pay engine.
///
/// # Example
///
/// ```
/// use attendance_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// An attendance policy value is outside its valid domain.
    #[error("Invalid attendance policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A schedule entry for an employment type could not be used.
    #[error("Invalid schedule for employment type '{employment_type}': {message}")]
    InvalidSchedule {
        /// The employment type owning the schedule.
        employment_type: String,
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// A holiday range was inconsistent.
    #[error("Invalid holiday '{name}': {message}")]
    InvalidHoliday {
        /// The name of the holiday.
        name: String,
        /// A description of what made the holiday invalid.
        message: String,
    },

    /// A clock value was not in `HH:MM` or `HH:MM:SS` form.
    #[error("Invalid clock time '{value}', expected HH:MM")]
    InvalidClockTime {
        /// The rejected value.
        value: String,
    },

    /// The employment type is not defined in the settings.
    #[error("Employment type not found: {name}")]
    EmploymentTypeNotFound {
        /// The employment type name that was not found.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
