/**
 * View Router
 *
 * Maps a shell's current route to one of its pages and renders it. The
 * page shown is always derived from the navigator's committed route, so a
 * vetoed navigation can never leave the view out of sync with the route.
 *
 * # Unknown Routes
 *
 * Routes and page names that do not resolve fall back to the shell's
 * default page instead of failing.
 */

use std::fmt;
use std::marker::PhantomData;

use crate::shared::navigation::GuardChain;
use crate::spa::history::HistoryHost;
use crate::spa::navigator::Navigator;

/// A page of a shell
pub trait Page: Copy + Eq + Default + fmt::Debug + 'static {
    /// Base path of the shell, without trailing slash
    const BASE: &'static str;

    /// Every page of the shell
    const ALL: &'static [Self];

    /// Path segment under [`Page::BASE`]; empty for the shell's index
    fn slug(self) -> &'static str;

    /// Heading shown for the page
    fn title(self) -> &'static str;

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|page| page.slug() == slug)
    }

    fn route(self) -> String {
        format!("{}/{}", Self::BASE, self.slug())
    }

    /// Resolve a route to a page, falling back to the default page
    fn from_route(route: &str) -> Self {
        route
            .strip_prefix(Self::BASE)
            .and_then(|rest| {
                if rest.is_empty() {
                    Some(rest)
                } else {
                    rest.strip_prefix('/')
                }
            })
            .map(|rest| rest.split('/').next().unwrap_or_default())
            .and_then(Self::from_slug)
            .unwrap_or_default()
    }
}

/// What the shell renders for its current route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<P> {
    pub page: P,
    pub title: &'static str,
    pub route: String,
}

/// Per-shell router over a [`Navigator`]
#[derive(Debug)]
pub struct ViewRouter<P, H> {
    navigator: Navigator<H>,
    _page: PhantomData<P>,
}

impl<P: Page, H: HistoryHost> ViewRouter<P, H> {
    pub fn new(history: H, chain: GuardChain) -> Self {
        let fallback = P::default().route();
        Self {
            navigator: Navigator::new(history, chain, P::BASE, &fallback),
            _page: PhantomData,
        }
    }

    /// Run the guards against the route the shell was opened at
    pub fn mount(&mut self) -> bool {
        self.navigator.mount()
    }

    /// Show `page`; returns whether the navigation was committed
    pub fn navigate(&mut self, page: P) -> bool {
        self.navigator.request_navigate(&page.route())
    }

    /// Show the page called `name`, or the default page when unknown
    pub fn navigate_named(&mut self, name: &str) -> bool {
        let page = P::from_slug(name).unwrap_or_else(|| {
            tracing::debug!("Unknown page {:?}, falling back to {:?}", name, P::default());
            P::default()
        });
        self.navigate(page)
    }

    /// Handle a back/forward notification from the host
    pub fn on_pop_state(&mut self) -> bool {
        self.navigator.handle_pop_state()
    }

    pub fn current_page(&self) -> P {
        P::from_route(self.navigator.current_route())
    }

    pub fn current_route(&self) -> &str {
        self.navigator.current_route()
    }

    pub fn render(&self) -> View<P> {
        let page = self.current_page();
        View {
            page,
            title: page.title(),
            route: page.route(),
        }
    }

    pub fn navigator(&self) -> &Navigator<H> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator<H> {
        &mut self.navigator
    }

    pub fn history(&self) -> &H {
        self.navigator.history()
    }

    pub fn history_mut(&mut self) -> &mut H {
        self.navigator.history_mut()
    }
}
