/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the HTTP API. Every handler
 * returns these errors; none escape the request boundary unconverted.
 *
 * # Error Categories
 *
 * ## Configuration
 *
 * The database binding is missing. Reported with a dedicated message and
 * HTTP 500, never retried.
 *
 * ## Validation
 *
 * A required field is missing or an identifier is not numeric. HTTP 400,
 * message surfaced verbatim.
 *
 * ## Not Found
 *
 * A lookup by id found no row. HTTP 404.
 *
 * ## Store
 *
 * The underlying statement failed. Logged at the boundary and surfaced as
 * HTTP 500 with the store's message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use islands::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::validation("Name and surname are required");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::not_found("User not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The database binding is absent
    #[error("Database not configured")]
    NotConfigured,

    /// Missing or malformed request data
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// No row for the requested id
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The store rejected a statement
    ///
    /// `context` names the failed operation ("Failed to fetch test data");
    /// the store's own error is kept as the source.
    #[error("{context}: {source}")]
    Store {
        context: String,
        source: sqlx::Error,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    Shared(#[from] SharedError),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Wrap a store error with the operation that failed
    pub fn store(context: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotConfigured` - 500 Internal Server Error
    /// - `Validation` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Store` - 500 Internal Server Error
    /// - `Shared` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Shared(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
        }
    }

    /// The message shown to the caller
    pub fn message(&self) -> String {
        match self {
            Self::Store { context, .. } => context.clone(),
            Self::Shared(err) => err.detail().to_string(),
            other => other.to_string(),
        }
    }

    /// The store's own message, when this is a store error
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Store { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}
