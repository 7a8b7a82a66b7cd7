//! Middleware Module
//!
//! This module contains the HTTP middleware of the backend server.
//!
//! # Architecture
//!
//! - **`access`** - Path classification and the server guard chain; vetoed
//!   requests are redirected before they reach any handler

pub mod access;

pub use access::{access_middleware, AccessControl, AccessDecision, KnownPages};
