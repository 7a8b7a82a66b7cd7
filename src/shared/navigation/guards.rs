//! Stock guards used by both the server and the shells.

use super::guard::{AfterNavigate, BeforeNavigate, GuardDecision, NavigationError};

/// Vetoes every transition while the visitor is not signed in
///
/// The authentication state is a fixed flag for the lifetime of the guard;
/// there is no session lookup behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireAuthentication {
    authenticated: bool,
    redirect_to: String,
}

impl RequireAuthentication {
    pub fn new(authenticated: bool, redirect_to: impl Into<String>) -> Self {
        Self {
            authenticated,
            redirect_to: redirect_to.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

impl BeforeNavigate for RequireAuthentication {
    fn before(&self, _from: &str, to: &str) -> GuardDecision {
        if self.authenticated {
            return GuardDecision::Allow;
        }
        tracing::info!("User not authenticated, redirecting {} to {}", to, self.redirect_to);
        GuardDecision::redirect(self.redirect_to.clone())
    }

    fn name(&self) -> &str {
        "require-authentication"
    }
}

/// Logs transitions; never vetoes
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigation;

impl BeforeNavigate for LogNavigation {
    fn before(&self, from: &str, to: &str) -> GuardDecision {
        tracing::debug!("Navigating from {} to {}", from, to);
        GuardDecision::Allow
    }

    fn name(&self) -> &str {
        "log-navigation"
    }
}

impl AfterNavigate for LogNavigation {
    fn after(&self, to: &str) -> Result<(), NavigationError> {
        tracing::info!("Navigated to: {}", to);
        Ok(())
    }

    fn name(&self) -> &str {
        "log-navigation"
    }
}
