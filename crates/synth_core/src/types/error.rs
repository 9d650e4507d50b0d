//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `AxisError`: Errors from time-axis construction
//!
//! All errors are detected eagerly and are fatal to the call that raised
//! them; there is no partial-result recovery.

use thiserror::Error;

use super::time::Date;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `InvalidFormat`: Failed to parse a date string
///
/// # Examples
/// ```
/// use synth_core::types::time::Date;
///
/// let err = Date::from_ymd(2024, 2, 30).unwrap_err();
/// assert_eq!(err.to_string(), "invalid date: 2024-2-30");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component (1-12).
        month: u32,
        /// Day component (1-31).
        day: u32,
    },

    /// Failed to parse a date string as `YYYY-MM-DD`.
    #[error("invalid date format: {0}")]
    InvalidFormat(String),
}

/// Errors from time-axis construction.
///
/// # Variants
/// - `UnrecognizedOption`: An enumerated configuration value is outside its
///   closed set (frequency code, anchor mode)
/// - `EmptyRange`: A calendar range holds no ticks (start after end)
/// - `ZeroTicks`: An anchored axis was requested with a tick count of zero
/// - `DateOverflow`: Date arithmetic left the representable range
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AxisError {
    /// An enumerated option value is outside its closed set.
    #[error("unrecognized {field} option: {value:?}")]
    UnrecognizedOption {
        /// The name of the option being parsed.
        field: &'static str,
        /// The rejected input value.
        value: String,
    },

    /// A calendar range holds no ticks.
    #[error("time axis from {start} to {end} holds no ticks")]
    EmptyRange {
        /// The requested start date.
        start: Date,
        /// The requested end date.
        end: Date,
    },

    /// An anchored axis was requested with a tick count of zero.
    #[error("time axis needs at least one tick")]
    ZeroTicks,

    /// Date arithmetic overflow.
    #[error("date arithmetic overflow: {reason}")]
    DateOverflow {
        /// Reason for the overflow.
        reason: String,
    },
}
