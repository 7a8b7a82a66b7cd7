//! Qwik shell: four pages under `/qwik-spa`, no guards.

use crate::shared::navigation::GuardChain;
use crate::spa::history::HistoryHost;
use crate::spa::router::{Page, ViewRouter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QwikPage {
    #[default]
    Home,
    Counter,
    About,
    Contact,
}

impl Page for QwikPage {
    const BASE: &'static str = "/qwik-spa";
    const ALL: &'static [Self] = &[Self::Home, Self::Counter, Self::About, Self::Contact];

    fn slug(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Counter => "counter",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Counter => "Counter",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}

pub type QwikShell<H> = ViewRouter<QwikPage, H>;

pub fn qwik_shell<H: HistoryHost>(history: H) -> QwikShell<H> {
    ViewRouter::new(history, GuardChain::new())
}
