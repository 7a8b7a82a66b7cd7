//! Shared Error Types
//!
//! This module defines error types that are shared between the server and
//! the client-side shells.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field is missing or malformed
//!
//! # Usage
//!
//! ```rust
//! use islands::shared::error::SharedError;
//!
//! let error = SharedError::validation("id", "Invalid ID");
//! assert_eq!(error.detail(), "Invalid ID");
//! ```
use thiserror::Error;

/// Shared error types that can occur on both sides
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message without the field prefix, suitable for API responses
    pub fn detail(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
