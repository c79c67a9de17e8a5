//! Coordinate codec errors.

use crate::common::ErrorSeverity;

/// Errors raised while converting between decimal degrees and text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    /// Text does not match the exact pattern of its angular format
    #[error("'{text}' does not match the {format} coordinate format")]
    Format {
        /// Offending text
        text: String,
        /// Human-readable format name
        format: String,
    },

    /// Decimal value is not finite or outside the axis range
    #[error("Coordinate {value} is outside {min}..={max}")]
    OutOfRange {
        /// Offending value
        value: f64,
        /// Lower bound of the axis
        min: f64,
        /// Upper bound of the axis
        max: f64,
    },

    /// Decimal-minute precision outside 0..=3 digits
    #[error("Unsupported decimal minute precision: {0} digits (0..=3)")]
    UnsupportedPrecision(u8),

    /// Format name that names no known angular format
    #[error("Unknown coordinate format: {0}")]
    UnknownFormat(String),
}

impl CoordinateError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoordinateError::Format { .. } => ErrorSeverity::Warning,
            CoordinateError::OutOfRange { .. } => ErrorSeverity::Error,
            CoordinateError::UnsupportedPrecision(_) => ErrorSeverity::Error,
            CoordinateError::UnknownFormat(_) => ErrorSeverity::Warning,
        }
    }

    /// Create a format mismatch error.
    pub fn format(text: impl Into<String>, format: impl Into<String>) -> Self {
        CoordinateError::Format {
            text: text.into(),
            format: format.into(),
        }
    }

    /// Create an out of range error.
    pub fn out_of_range(value: f64, min: f64, max: f64) -> Self {
        CoordinateError::OutOfRange { value, min, max }
    }
}
