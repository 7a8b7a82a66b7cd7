//! SPA Shells
//!
//! Client-side routing for the single-page applications embedded in the
//! site. Each shell owns one [`Navigator`]: its guard chain, its current
//! route and its handle on the host history. Nothing is shared between
//! shells or tabs.
//!
//! # Module Structure
//!
//! ```text
//! spa/
//! ├── mod.rs        - Module exports and documentation
//! ├── history.rs    - HistoryHost trait and the in-memory host
//! ├── navigator.rs  - Guard-gated navigation over a history host
//! ├── router.rs     - Page trait, View and ViewRouter
//! └── shells/       - Solid, Qwik and Qwik auth shells
//! ```
//!
//! # Navigation Flow
//!
//! 1. The shell asks its router to show a page (or the host reports a
//!    back/forward move)
//! 2. The navigator runs the before-guards from the current route
//! 3. Accepted: route committed, history entry pushed, after-guards run
//! 4. Rejected: route untouched; a back/forward move is undone in the host
//!    history and any redirect named by the vetoing guard is applied

/// Host history abstraction
pub mod history;

/// Guard-gated navigation
pub mod navigator;

/// Page resolution and rendering
pub mod router;

/// Concrete shells
pub mod shells;

pub use history::{HistoryHost, MemoryHistory};
pub use navigator::Navigator;
pub use router::{Page, View, ViewRouter};
pub use shells::{
    qwik::{qwik_shell, QwikPage, QwikShell},
    qwik_auth::{qwik_auth_shell, AccessPolicy, QwikAuthPage, QwikAuthShell, Role, RouteAccess},
    solid::{solid_shell, SolidPage, SolidShell},
};
