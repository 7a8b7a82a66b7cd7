/**
 * Guard Chain
 *
 * An ordered, append-only collection of navigation guards owned by one
 * router (a shell, or the server's access control).
 *
 * # Capabilities
 *
 * - [`BeforeNavigate`] - consulted before a transition; may veto it and name
 *   a redirect target
 * - [`AfterNavigate`] - told about a committed transition; cannot veto, and
 *   its failures are logged rather than propagated
 *
 * # Evaluation
 *
 * Guards are synchronous. `evaluate` runs before-guards in registration
 * order and stops at the first veto; `notify` runs every after-guard in
 * registration order.
 */

use std::fmt;

use thiserror::Error;

/// What a before-guard decided about a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the chain continue
    Allow,
    /// Stop the chain; optionally send the user elsewhere
    Veto { redirect: Option<String> },
}

impl GuardDecision {
    /// Veto without a redirect
    pub fn veto() -> Self {
        Self::Veto { redirect: None }
    }

    /// Veto and redirect to `target`
    pub fn redirect(target: impl Into<String>) -> Self {
        Self::Veto {
            redirect: Some(target.into()),
        }
    }

    pub fn is_veto(&self) -> bool {
        matches!(self, Self::Veto { .. })
    }
}

impl From<bool> for GuardDecision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Allow
        } else {
            Self::veto()
        }
    }
}

/// Outcome of running the before-guards for one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected {
        /// Registration index of the vetoing guard
        guard: usize,
        redirect: Option<String>,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Errors reported by after-guards
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("observer {observer} failed after navigating to {route}: {message}")]
    ObserverFailed {
        observer: String,
        route: String,
        message: String,
    },
}

/// Veto-capable hook run before a transition is committed
pub trait BeforeNavigate: Send + Sync {
    fn before(&self, from: &str, to: &str) -> GuardDecision;

    /// Name used in logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> BeforeNavigate for F
where
    F: Fn(&str, &str) -> GuardDecision + Send + Sync,
{
    fn before(&self, from: &str, to: &str) -> GuardDecision {
        self(from, to)
    }
}

/// Observer run after a transition is committed
pub trait AfterNavigate: Send + Sync {
    fn after(&self, to: &str) -> Result<(), NavigationError>;

    /// Name used in logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> AfterNavigate for F
where
    F: Fn(&str) + Send + Sync,
{
    fn after(&self, to: &str) -> Result<(), NavigationError> {
        self(to);
        Ok(())
    }
}

/// Ordered before/after guard lists
#[derive(Default)]
pub struct GuardChain {
    before: Vec<Box<dyn BeforeNavigate>>,
    after: Vec<Box<dyn AfterNavigate>>,
}

impl GuardChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a before-guard
    pub fn before_navigate<G>(&mut self, guard: G) -> &mut Self
    where
        G: BeforeNavigate + 'static,
    {
        self.before.push(Box::new(guard));
        self
    }

    /// Append an after-guard
    pub fn after_navigate<O>(&mut self, observer: O) -> &mut Self
    where
        O: AfterNavigate + 'static,
    {
        self.after.push(Box::new(observer));
        self
    }

    /// Builder form of [`GuardChain::before_navigate`]
    pub fn with_before<G>(mut self, guard: G) -> Self
    where
        G: BeforeNavigate + 'static,
    {
        self.before_navigate(guard);
        self
    }

    /// Builder form of [`GuardChain::after_navigate`]
    pub fn with_after<O>(mut self, observer: O) -> Self
    where
        O: AfterNavigate + 'static,
    {
        self.after_navigate(observer);
        self
    }

    pub fn before_count(&self) -> usize {
        self.before.len()
    }

    pub fn after_count(&self) -> usize {
        self.after.len()
    }

    /// Run the before-guards for `from -> to`, stopping at the first veto
    pub fn evaluate(&self, from: &str, to: &str) -> Verdict {
        for (index, guard) in self.before.iter().enumerate() {
            if let GuardDecision::Veto { redirect } = guard.before(from, to) {
                tracing::debug!(
                    guard = guard.name(),
                    from,
                    to,
                    ?redirect,
                    "Navigation vetoed"
                );
                return Verdict::Rejected {
                    guard: index,
                    redirect,
                };
            }
        }
        Verdict::Accepted
    }

    /// Run every after-guard for a committed transition to `to`
    ///
    /// Failures are logged and do not stop the remaining observers.
    pub fn notify(&self, to: &str) {
        for observer in &self.after {
            if let Err(e) = observer.after(to) {
                tracing::warn!(observer = observer.name(), "After-navigation hook failed: {}", e);
            }
        }
    }
}

impl fmt::Debug for GuardChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardChain")
            .field("before", &self.before.iter().map(|g| g.name()).collect::<Vec<_>>())
            .field("after", &self.after.iter().map(|o| o.name()).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> Arc<Mutex<Vec<String>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn recording_guard(
        log: &Arc<Mutex<Vec<String>>>,
        label: &'static str,
        decision: GuardDecision,
    ) -> impl Fn(&str, &str) -> GuardDecision + Send + Sync + 'static {
        let log = Arc::clone(log);
        move |_from: &str, _to: &str| {
            log.lock().unwrap().push(label.to_string());
            decision.clone()
        }
    }

    struct FailingObserver;

    impl AfterNavigate for FailingObserver {
        fn after(&self, to: &str) -> Result<(), NavigationError> {
            Err(NavigationError::ObserverFailed {
                observer: "failing".into(),
                route: to.into(),
                message: "analytics endpoint unreachable".into(),
            })
        }
    }

    #[test]
    fn test_empty_chain_accepts() {
        let chain = GuardChain::new();
        assert_eq!(chain.evaluate("/a", "/b"), Verdict::Accepted);
    }

    #[test]
    fn test_veto_short_circuits() {
        let log = recorder();
        let chain = GuardChain::new()
            .with_before(recording_guard(&log, "g1", GuardDecision::Allow))
            .with_before(recording_guard(&log, "g2", GuardDecision::veto()))
            .with_before(recording_guard(&log, "g3", GuardDecision::Allow));

        let verdict = chain.evaluate("/a", "/b");
        assert_eq!(verdict, Verdict::Rejected { guard: 1, redirect: None });
        assert_eq!(*log.lock().unwrap(), vec!["g1", "g2"]);
    }

    #[test]
    fn test_veto_carries_redirect() {
        let chain = GuardChain::new().with_before(|_from: &str, _to: &str| GuardDecision::redirect("/"));
        assert_eq!(
            chain.evaluate("", "/demo"),
            Verdict::Rejected { guard: 0, redirect: Some("/".to_string()) }
        );
    }

    #[test]
    fn test_guards_see_from_and_to() {
        let seen = recorder();
        let sink = Arc::clone(&seen);
        let chain = GuardChain::new().with_before(move |from: &str, to: &str| {
            sink.lock().unwrap().push(format!("{from}->{to}"));
            GuardDecision::Allow
        });
        chain.evaluate("/solid-spa/dashboard", "/solid-spa/counter");
        assert_eq!(*seen.lock().unwrap(), vec!["/solid-spa/dashboard->/solid-spa/counter"]);
    }

    #[test]
    fn test_notify_runs_in_order_and_survives_failures() {
        let log = recorder();
        let first = Arc::clone(&log);
        let last = Arc::clone(&log);
        let mut chain = GuardChain::new();
        chain
            .after_navigate(move |to: &str| first.lock().unwrap().push(format!("first {to}")))
            .after_navigate(FailingObserver)
            .after_navigate(move |to: &str| last.lock().unwrap().push(format!("last {to}")));

        chain.notify("/x");
        assert_eq!(*log.lock().unwrap(), vec!["first /x", "last /x"]);
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(GuardDecision::from(true), GuardDecision::Allow);
        assert!(GuardDecision::from(false).is_veto());
    }

    #[test]
    fn test_debug_lists_guard_names() {
        let chain = GuardChain::new().with_after(FailingObserver);
        let debug = format!("{:?}", chain);
        assert!(debug.contains("FailingObserver"));
        assert_eq!(chain.before_count(), 0);
        assert_eq!(chain.after_count(), 1);
    }
}
