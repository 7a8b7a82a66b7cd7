//! Navigation Module
//!
//! Path classification and navigation guards, shared by the server's
//! request interception and by every SPA shell.
//!
//! # Architecture
//!
//! - **`classifier`** - Static exact/prefix path tables
//! - **`guard`** - The guard chain: veto-capable before-hooks and
//!   observational after-hooks, evaluated in registration order
//! - **`guards`** - Stock guards (authentication, logging)
//!
//! # Module Structure
//!
//! ```text
//! navigation/
//! ├── mod.rs         - Module exports and documentation
//! ├── classifier.rs  - PathRules and Classification
//! ├── guard.rs       - GuardChain, BeforeNavigate, AfterNavigate
//! └── guards.rs      - RequireAuthentication, LogNavigation
//! ```
//!
//! # Evaluation
//!
//! A navigation attempt is either committed (every before-guard allowed) or
//! rejected (the first veto stops the chain). Only committed attempts reach
//! the after-hooks. Committing the route itself is the caller's job: the
//! server forwards the request, a shell updates its [`NavigationState`].

/// Public path tables
pub mod classifier;

/// Guard chain
pub mod guard;

/// Stock guards
pub mod guards;

pub use classifier::{Classification, PathRules, SPA_BASES};
pub use guard::{
    AfterNavigate, BeforeNavigate, GuardChain, GuardDecision, NavigationError, Verdict,
};
pub use guards::{LogNavigation, RequireAuthentication};

/// The route a shell currently displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_route: String,
}

impl NavigationState {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            current_route: route.into(),
        }
    }
}
