/**
 * Qwik Auth Shell
 *
 * The Qwik application under `/qwik-spa-auth`. Access is decided by a
 * client-side [`AccessPolicy`]; a denied page redirects to another page of
 * the same shell instead of leaving it.
 *
 * # Rules
 *
 * - Home and Counter are open to everyone
 * - Dashboard requires a signed-in role (user or admin); guests are sent
 *   to Home
 */

use crate::shared::navigation::{BeforeNavigate, GuardChain, GuardDecision};
use crate::spa::history::HistoryHost;
use crate::spa::router::{Page, ViewRouter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QwikAuthPage {
    #[default]
    Home,
    Dashboard,
    Counter,
}

impl Page for QwikAuthPage {
    const BASE: &'static str = "/qwik-spa-auth";
    const ALL: &'static [Self] = &[Self::Home, Self::Dashboard, Self::Counter];

    fn slug(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Dashboard => "dashboard",
            Self::Counter => "counter",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
            Self::Counter => "Counter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    #[default]
    User,
    Guest,
}

/// Outcome of checking one page against the policy
///
/// A denial always names the page to show instead, so the shell never
/// renders a page it refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied {
        redirect_to: QwikAuthPage,
        message: &'static str,
    },
}

/// Client-side access rules of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessPolicy {
    pub role: Role,
}

impl AccessPolicy {
    pub fn for_role(role: Role) -> Self {
        Self { role }
    }

    pub fn check(&self, page: QwikAuthPage) -> Access {
        match (page, self.role) {
            (QwikAuthPage::Dashboard, Role::Guest) => Access::Denied {
                redirect_to: QwikAuthPage::Home,
                message: "Dashboard requires a signed-in user",
            },
            _ => Access::Allowed,
        }
    }
}

/// Before-guard applying an [`AccessPolicy`] to every transition
#[derive(Debug, Clone, Copy)]
pub struct RouteAccess {
    policy: AccessPolicy,
}

impl RouteAccess {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }
}

impl BeforeNavigate for RouteAccess {
    fn before(&self, _from: &str, to: &str) -> GuardDecision {
        match self.policy.check(QwikAuthPage::from_route(to)) {
            Access::Allowed => GuardDecision::Allow,
            Access::Denied { redirect_to, message } => {
                tracing::info!("Access denied to {}: {}", to, message);
                GuardDecision::redirect(redirect_to.route())
            }
        }
    }

    fn name(&self) -> &str {
        "route-access"
    }
}

pub type QwikAuthShell<H> = ViewRouter<QwikAuthPage, H>;

/// Mount the Qwik auth shell on `history` under `policy`
///
/// A denied initial address is replaced with the policy's redirect target.
pub fn qwik_auth_shell<H: HistoryHost>(history: H, policy: AccessPolicy) -> QwikAuthShell<H> {
    let chain = GuardChain::new().with_before(RouteAccess::new(policy));
    let mut shell = ViewRouter::new(history, chain);
    shell.mount();
    shell
}
