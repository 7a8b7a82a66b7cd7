/**
 * Access Control Middleware
 *
 * Intercepts every inbound request before routing. Public paths pass
 * straight through; every other path is run through the server guard
 * chain, and a veto becomes a `302 Found` redirect.
 *
 * # Server Guard Chain
 *
 * 1. `RequireAuthentication` - unauthenticated visitors are sent to `/`
 * 2. `KnownPages` - paths outside the known restricted pages are sent to `/`
 *
 * With the default configuration (not authenticated) every non-public path
 * ends up at `/`.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::LOCATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::shared::navigation::guards::RequireAuthentication;
use crate::shared::navigation::{BeforeNavigate, GuardChain, GuardDecision, PathRules, Verdict};
use crate::shared::AppConfig;

/// Restricted pages the site actually serves
pub const KNOWN_PAGES: &[&str] = &["/demo"];

/// Where vetoed requests are sent when the guard names no target
pub const HOME: &str = "/";

/// Before-guard admitting only known restricted pages
#[derive(Debug, Clone)]
pub struct KnownPages {
    pages: PathRules,
    redirect_to: String,
}

impl KnownPages {
    pub fn new(pages: PathRules, redirect_to: impl Into<String>) -> Self {
        Self {
            pages,
            redirect_to: redirect_to.into(),
        }
    }

    pub fn site() -> Self {
        Self::new(PathRules::new(KNOWN_PAGES.iter().copied(), std::iter::empty::<&str>()), HOME)
    }
}

impl BeforeNavigate for KnownPages {
    fn before(&self, _from: &str, to: &str) -> GuardDecision {
        if self.pages.matches(to) {
            GuardDecision::Allow
        } else {
            tracing::info!("Unknown path {}, redirecting to {}", to, self.redirect_to);
            GuardDecision::redirect(self.redirect_to.clone())
        }
    }

    fn name(&self) -> &str {
        "known-pages"
    }
}

/// What the middleware does with one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Public path, no guards run
    Public,
    /// Restricted path admitted by every guard
    Admitted,
    Redirect(String),
}

/// Public path table plus the guard chain for everything else
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug)]
pub struct AccessControl {
    public: PathRules,
    guards: GuardChain,
}

impl AccessControl {
    pub fn new(public: PathRules, guards: GuardChain) -> Self {
        Self { public, guards }
    }

    /// The site's public table and server guard chain
    pub fn for_site(config: &AppConfig) -> Self {
        let guards = GuardChain::new()
            .with_before(RequireAuthentication::new(config.authenticated, HOME))
            .with_before(KnownPages::site());
        Self::new(PathRules::public_site(), guards)
    }

    pub fn public_paths(&self) -> &PathRules {
        &self.public
    }

    pub fn decide(&self, path: &str) -> AccessDecision {
        if self.public.matches(path) {
            return AccessDecision::Public;
        }

        match self.guards.evaluate("", path) {
            Verdict::Accepted => {
                self.guards.notify(path);
                AccessDecision::Admitted
            }
            Verdict::Rejected { redirect, .. } => {
                AccessDecision::Redirect(redirect.unwrap_or_else(|| HOME.to_string()))
            }
        }
    }
}

/// Middleware applying [`AccessControl`] to every request
pub async fn access_middleware(
    State(access): State<Arc<AccessControl>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    match access.decide(&path) {
        AccessDecision::Public | AccessDecision::Admitted => next.run(request).await,
        AccessDecision::Redirect(location) => {
            tracing::debug!("Redirecting {} to {}", path, location);
            (StatusCode::FOUND, [(LOCATION, location)]).into_response()
        }
    }
}
