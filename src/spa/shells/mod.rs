//! Shells Module
//!
//! One module per SPA embedded in the site. Each exposes its page enum, a
//! type alias for its router and a constructor that registers the shell's
//! guards and checks the initial route.
//!
//! - **`solid`** - `/solid-spa`, every page requires authentication
//! - **`qwik`** - `/qwik-spa`, no guards
//! - **`qwik_auth`** - `/qwik-spa-auth`, role-based access policy with
//!   in-app redirects

/// Solid main application
pub mod solid;

/// Qwik main application
pub mod qwik;

/// Qwik application with client-side access policy
pub mod qwik_auth;
