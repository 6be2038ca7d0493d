//! # Error Types
//!
//! Structured error types for sightline_core. Every failure is detected while
//! a [`SightlineModel`](crate::model::SightlineModel) is being built, so a
//! model that exists is always complete and valid.
//!
//! ## Example
//!
//! ```rust
//! use sightline_core::errors::{CalcError, CalcResult};
//!
//! fn validate_tread(tread_size: f64) -> CalcResult<()> {
//!     if tread_size <= 0.0 {
//!         return Err(CalcError::invalid_configuration(
//!             "tread_size",
//!             tread_size.to_string(),
//!             "Tread size must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_tread(-900.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sightline_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sightline calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A configuration parameter is out of range or not finite
    #[error("Invalid configuration for '{field}': {value} - {reason}")]
    InvalidConfiguration {
        field: String,
        value: String,
        reason: String,
    },

    /// The clearance formula produced NaN or Infinity (e.g. division by zero)
    #[error("Non-finite result at row {row}: {quantity} - {reason}")]
    NonFiniteResult {
        row: usize,
        quantity: String,
        reason: String,
    },

    /// The riser search cannot reach the minimum C-value
    #[error("Riser search did not converge at row {row} after {iterations} increments - {reason}")]
    ConvergenceFailed {
        row: usize,
        iterations: u64,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidConfiguration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite_result(row: usize, quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NonFiniteResult {
            row,
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConvergenceFailed error
    pub fn convergence_failed(row: usize, iterations: u64, reason: impl Into<String>) -> Self {
        CalcError::ConvergenceFailed {
            row,
            iterations,
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the error stems from the input parameters rather than the computation
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CalcError::InvalidConfiguration { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            CalcError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            CalcError::ConvergenceFailed { .. } => "CONVERGENCE_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
