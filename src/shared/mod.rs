//! Shared Module
//!
//! This module contains types that are used by both the server and the
//! client-side shells: the record entity exchanged over the API, the
//! application configuration, shared errors and the navigation primitives
//! (path classifier and guard chain).
//!
//! # Overview
//!
//! Nothing in here depends on the `ssr` feature. The backend builds its
//! request interception on top of [`navigation`], and every SPA shell in
//! [`crate::spa`] owns its own [`navigation::GuardChain`].

/// Record entity and request payloads
pub mod record;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Path classification and navigation guards
pub mod navigation;

/// Re-export commonly used types for convenience
pub use record::{NewRecord, Record, RecordPatch, RecordPayload, parse_record_id};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use navigation::{
    AfterNavigate, BeforeNavigate, Classification, GuardChain, GuardDecision, NavigationError,
    NavigationState, PathRules, Verdict,
};
