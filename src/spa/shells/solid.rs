/**
 * Solid Shell
 *
 * The dashboard-style application under `/solid-spa`. Every page requires
 * authentication: an anonymous visitor is sent back to the site root, both
 * when the shell mounts and on every later navigation.
 *
 * # Guards (registration order)
 *
 * 1. `RequireAuthentication` - veto + redirect to `/`
 * 2. `LogNavigation` - logs `from -> to`, always allows
 *
 * After-guards: `LogNavigation` ("Navigated to: ...").
 */

use crate::shared::navigation::{GuardChain, LogNavigation, RequireAuthentication};
use crate::spa::history::HistoryHost;
use crate::spa::router::{Page, ViewRouter};

/// Pages of the Solid shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolidPage {
    #[default]
    Dashboard,
    Counter,
    Analytics,
    Profile,
    Settings,
    Documentation,
}

impl Page for SolidPage {
    const BASE: &'static str = "/solid-spa";
    const ALL: &'static [Self] = &[
        Self::Dashboard,
        Self::Counter,
        Self::Analytics,
        Self::Profile,
        Self::Settings,
        Self::Documentation,
    ];

    fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Counter => "counter",
            Self::Analytics => "analytics",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Documentation => "documentation",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Counter => "Counter",
            Self::Analytics => "Analytics",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Documentation => "Documentation",
        }
    }
}

pub type SolidShell<H> = ViewRouter<SolidPage, H>;

/// Mount the Solid shell on `history`
pub fn solid_shell<H: HistoryHost>(history: H, authenticated: bool) -> SolidShell<H> {
    let chain = GuardChain::new()
        .with_before(RequireAuthentication::new(authenticated, "/"))
        .with_before(LogNavigation)
        .with_after(LogNavigation);

    let mut shell = ViewRouter::new(history, chain);
    shell.mount();
    shell
}
