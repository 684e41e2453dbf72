//! # Error Types
//!
//! Structured error types for conv_core. Front ends print the `Display` form
//! for humans and the JSON form for scripts.
//!
//! Note that an empty or non-numeric input is *not* an error: the converter
//! reports "nothing to compute" as `Ok(None)`.
//!
//! ## Example
//!
//! ```rust
//! use conv_core::errors::{ConvError, ConvResult};
//! use conv_core::units::Unit;
//!
//! fn lookup(name: &str) -> ConvResult<Unit> {
//!     Unit::from_str_flexible(name)
//! }
//!
//! assert_eq!(lookup("parsec").unwrap_err().error_code(), "UNKNOWN_UNIT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for conv_core operations
pub type ConvResult<T> = Result<T, ConvError>;

/// Structured error type for conversion operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConvError {
    /// Category name not recognised
    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    /// Unit name not recognised in any category
    #[error("Unknown unit: {name}")]
    UnknownUnit { name: String },

    /// Unit exists, but belongs to another category's table
    #[error("Unit '{unit}' is not part of the {category} table")]
    UnitNotInCategory { category: String, unit: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl ConvError {
    /// Create an UnknownCategory error
    pub fn unknown_category(name: impl Into<String>) -> Self {
        ConvError::UnknownCategory { name: name.into() }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(name: impl Into<String>) -> Self {
        ConvError::UnknownUnit { name: name.into() }
    }

    /// Create a UnitNotInCategory error
    pub fn unit_not_in_category(category: impl Into<String>, unit: impl Into<String>) -> Self {
        ConvError::UnitNotInCategory {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            ConvError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            ConvError::UnitNotInCategory { .. } => "UNIT_NOT_IN_CATEGORY",
            ConvError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for ConvError {
    fn from(err: serde_json::Error) -> Self {
        ConvError::SerializationError {
            reason: err.to_string(),
        }
    }
}
