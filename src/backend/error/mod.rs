//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - JSON and HTML fragment responses
//! ```
//!
//! # Error Types
//!
//! - `NotConfigured` - The database binding is missing
//! - `Validation` - Missing field or non-numeric identifier
//! - `NotFound` - No row for the requested id
//! - `Store` - A statement failed in the store
//! - `Shared` - Validation errors raised by the shared record types
//!
//! A guard veto is not an error; see `backend::middleware::access`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
