//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording time events and
//! calculating wages.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::EventType;

/// The main error type for the Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::MalformedTimestamp {
///     input: "2024-07-14".to_string(),
///     reason: "expected a space between date and hour".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed timestamp '2024-07-14': expected a space between date and hour"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A timestamp did not have the `YYYY-MM-DD HHMM` shape.
    #[error("Malformed timestamp '{input}': {reason}")]
    MalformedTimestamp {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A lookup date was not a `YYYY-MM-DD` calendar day.
    #[error("Malformed date '{input}': expected YYYY-MM-DD")]
    MalformedDate {
        /// The rejected input.
        input: String,
    },

    /// Neither a time-in nor a time-out event exists for the date.
    #[error("No time events recorded on {date}")]
    DateNotFound {
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// Only one side of a time-in/time-out pair exists for the date.
    #[error("Unpaired time event on {date}: no {missing:?} event recorded")]
    UnpairedEvent {
        /// The date that was looked up.
        date: NaiveDate,
        /// The kind of event that is missing.
        missing: EventType,
    },

    /// A monetary amount exceeded the range of `Decimal`.
    #[error("Monetary amount overflowed while calculating {context}")]
    AmountOverflow {
        /// What was being calculated when the overflow happened.
        context: String,
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

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Returns true when a date lookup found no usable time-in/time-out pair.
    ///
    /// An unpaired event counts as a missing date for calculation purposes.
    pub fn is_date_not_found(&self) -> bool {
        matches!(
            self,
            EngineError::DateNotFound { .. } | EngineError::UnpairedEvent { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
