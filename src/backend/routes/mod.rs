//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, static files and middleware
//! - **`api_routes`** - API endpoints (records, hello)
//! - **`static_routes`** - Site pages, SPA shells and the static fallback
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - API endpoint routes
//! └── static_routes.rs - Static pages and shells
//! ```
//!
//! # Route Organization
//!
//! 1. **API Routes** - `/api/test`, `/api/test/{id}`, `/api/test-table`, `/api/hello`
//! 2. **Pages and Shells** - `{page}/index.html`, shell documents for every
//!    path under an SPA base
//! 3. **Static Files** - Everything else is served from the public directory
//!
//! Access control runs in front of both, so a restricted path is
//! redirected before routing.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// Static pages, shells and fallback
pub mod static_routes;

// Re-export commonly used functions
pub use router::create_router;
