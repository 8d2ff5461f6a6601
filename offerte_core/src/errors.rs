//! # Error Types
//!
//! Structured error types for the quote engine. The calculation path itself
//! never fails: missing catalog rows resolve to omitted lines and missing
//! correction factors resolve to the neutral 1.0. Errors exist at the
//! boundary only — parsing reference data, loading a price book, container
//! operations.
//!
//! ## Example
//!
//! ```rust
//! use offerte_core::errors::{QuoteError, QuoteResult};
//!
//! fn validate_rate(hourly_rate: f64) -> QuoteResult<()> {
//!     if hourly_rate <= 0.0 {
//!         return Err(QuoteError::invalid_input(
//!             "hourly_rate",
//!             hourly_rate.to_string(),
//!             "Hourly rate must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quote engine operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for boundary operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by the surrounding application.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A scope id has no registered calculator for the given quote type
    #[error("Unknown scope '{scope_id}' for quote type '{quote_type}'")]
    UnknownScope {
        quote_type: String,
        scope_id: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl QuoteError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownScope error
    pub fn unknown_scope(quote_type: impl Into<String>, scope_id: impl Into<String>) -> Self {
        QuoteError::UnknownScope {
            quote_type: quote_type.into(),
            scope_id: scope_id.into(),
        }
    }

    /// Create a SerializationError from any displayable cause
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        QuoteError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::InvalidInput { .. } => "INVALID_INPUT",
            QuoteError::UnknownScope { .. } => "UNKNOWN_SCOPE",
            QuoteError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
