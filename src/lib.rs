//! Islands - Demo Site Library
//!
//! Islands is the server and routing core of a multi-framework demo site:
//! several client-side SPA shells embedded in one site, a request
//! interception layer that decides which paths are public, and a thin CRUD
//! API over a single SQL table.
//!
//! # Overview
//!
//! - Path classification of inbound requests (public vs restricted)
//! - Navigation guard chains with veto-capable before-hooks and
//!   observational after-hooks, shared by the server and the SPA shells
//! - In-memory SPA view routers driven by guard-gated navigation and
//!   back/forward history events
//! - REST handlers translating HTTP verbs into parameterised SQL
//!
//! # Module Structure
//!
//! - **`shared`** - Types used on both sides
//!   - Records, configuration, error types
//!   - Path classifier and guard chain
//!
//! - **`spa`** - Client-side shells
//!   - Host history abstraction
//!   - Navigator (guard chain + navigation state)
//!   - View router and the Solid / Qwik shells
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and access-control middleware
//!   - Record store adapter and CRUD handlers
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the `backend` module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use islands::backend::server::init::create_app;
//! use islands::shared::AppConfig;
//!
//! # async fn example() {
//! let app = create_app(AppConfig::default()).await;
//! // Serve `app` with axum::serve
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `shared::error`, `shared::navigation` and
//!   `backend::error`
//! - A guard veto is a normal outcome, never an error

/// Shared types and navigation primitives
pub mod shared;

/// Client-side SPA shells
pub mod spa;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
