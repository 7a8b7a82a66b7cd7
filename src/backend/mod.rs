//! Backend Module
//!
//! This module contains all server-side code: the Axum HTTP server, the
//! access-control layer in front of it and the record CRUD API.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`middleware`** - Access control (public paths and server guard chain)
//! - **`records`** - Record store adapter and its HTTP handlers
//! - **`hello`** - Liveness endpoint
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Request interception
//! ├── records/        - Record store and handlers
//! ├── hello.rs        - Liveness endpoint
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the configuration, the optional record store and the
//! access control tables. Nothing in it is mutated after startup; the
//! store's connection pool is the only shared resource.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` implements
//! `IntoResponse` so every failure maps to a status code and a JSON body.
//! Store failures are logged where they are converted.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Request interception
pub mod middleware;

/// Record store and CRUD handlers
pub mod records;

/// Liveness endpoint
pub mod hello;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::BackendError;
pub use records::RecordStore;
