/**
 * Navigator
 *
 * Guard-gated navigation for one shell: a [`GuardChain`], the shell's
 * [`NavigationState`] and the host history.
 *
 * # Invariants
 *
 * - `current_route` changes only after every before-guard allowed the
 *   transition, or when a vetoing guard's redirect is applied in-app
 * - a rejected back/forward move leaves the host address equal to the
 *   route displayed before the move
 * - after-guards run once per committed transition, never on rejection
 *
 * # Redirects
 *
 * A redirect inside the shell's scope (its base path) is committed in-app.
 * Anything else leaves the shell through a document load.
 */

use crate::shared::navigation::{
    AfterNavigate, BeforeNavigate, GuardChain, NavigationState, Verdict,
};
use crate::spa::history::HistoryHost;

/// Guard-gated navigation over a history host
#[derive(Debug)]
pub struct Navigator<H> {
    chain: GuardChain,
    state: NavigationState,
    history: H,
    scope: String,
}

impl<H: HistoryHost> Navigator<H> {
    /// Create a navigator scoped to `scope`
    ///
    /// The initial route is the host's current address, or `fallback` when
    /// the host has none.
    pub fn new(history: H, chain: GuardChain, scope: impl Into<String>, fallback: &str) -> Self {
        let location = history.location();
        let route = if location.is_empty() {
            fallback.to_string()
        } else {
            location
        };
        Self {
            chain,
            state: NavigationState::new(route),
            history,
            scope: scope.into(),
        }
    }

    pub fn current_route(&self) -> &str {
        &self.state.current_route
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn chain(&self) -> &GuardChain {
        &self.chain
    }

    /// Register a veto-capable guard
    pub fn before_navigate<G>(&mut self, guard: G) -> &mut Self
    where
        G: BeforeNavigate + 'static,
    {
        self.chain.before_navigate(guard);
        self
    }

    /// Register an observer
    pub fn after_navigate<O>(&mut self, observer: O) -> &mut Self
    where
        O: AfterNavigate + 'static,
    {
        self.chain.after_navigate(observer);
        self
    }

    /// Whether `path` belongs to this shell
    pub fn in_scope(&self, path: &str) -> bool {
        path == self.scope
            || path
                .strip_prefix(self.scope.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Check the route the shell was opened at
    ///
    /// Runs the before-guards once from an empty origin. A vetoed initial
    /// route is replaced in-app with the redirect target, or left through a
    /// document load. Returns whether the initial route was accepted.
    pub fn mount(&mut self) -> bool {
        let route = self.state.current_route.clone();
        match self.chain.evaluate("", &route) {
            Verdict::Accepted => true,
            Verdict::Rejected { redirect, .. } => {
                if let Some(target) = redirect {
                    if self.in_scope(&target) {
                        self.history.replace_state(&target);
                        self.state.current_route = target;
                    } else {
                        self.history.assign(&target);
                    }
                }
                false
            }
        }
    }

    /// Navigate to `to` from the current route
    ///
    /// Returns whether the transition was committed.
    pub fn request_navigate(&mut self, to: &str) -> bool {
        let from = self.state.current_route.clone();
        match self.chain.evaluate(&from, to) {
            Verdict::Accepted => {
                self.history.push_state(to);
                self.state.current_route = to.to_string();
                self.chain.notify(to);
                true
            }
            Verdict::Rejected { redirect, .. } => {
                if let Some(target) = redirect {
                    self.apply_redirect(&target);
                }
                false
            }
        }
    }

    /// Re-validate a back/forward move the host already performed
    ///
    /// Returns whether the move was accepted.
    pub fn handle_pop_state(&mut self) -> bool {
        let to = self.history.location();
        let from = self.state.current_route.clone();
        match self.chain.evaluate(&from, &to) {
            Verdict::Accepted => {
                self.state.current_route = to.clone();
                self.chain.notify(&to);
                true
            }
            Verdict::Rejected { redirect, .. } => {
                self.history.push_state(&from);
                if let Some(target) = redirect {
                    self.apply_redirect(&target);
                }
                false
            }
        }
    }

    fn apply_redirect(&mut self, target: &str) {
        if self.in_scope(target) {
            tracing::debug!("Redirecting in-app to {}", target);
            self.history.push_state(target);
            self.state.current_route = target.to_string();
        } else {
            tracing::debug!("Leaving shell for {}", target);
            self.history.assign(target);
        }
    }
}
