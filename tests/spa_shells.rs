//! SPA shell integration tests
//!
//! Drives the shells through an in-memory history the way a browser would:
//! link clicks, back/forward and the initial page load.

use islands::spa::{
    qwik_auth_shell, qwik_shell, solid_shell, AccessPolicy, HistoryHost, MemoryHistory, Page,
    QwikAuthPage, QwikPage, Role, SolidPage,
};
use pretty_assertions::assert_eq;

#[test]
fn test_solid_shell_sends_anonymous_visitors_home() {
    let shell = solid_shell(MemoryHistory::new("/solid-spa/analytics"), false);

    // The redirect target is outside the shell, so it is a document load
    assert_eq!(shell.history().document_loads(), ["/"]);
    assert_eq!(shell.history().location(), "/");
}

#[test]
fn test_solid_shell_navigation_when_signed_in() {
    let mut shell = solid_shell(MemoryHistory::new("/solid-spa/dashboard"), true);
    assert_eq!(shell.current_page(), SolidPage::Dashboard);

    assert!(shell.navigate(SolidPage::Settings));
    assert!(shell.navigate_named("profile"));
    assert_eq!(shell.render().title, "Profile");

    assert!(shell.navigate_named("no-such-page"));
    assert_eq!(shell.current_page(), SolidPage::Dashboard);

    shell.history_mut().back();
    assert!(shell.on_pop_state());
    assert_eq!(shell.current_page(), SolidPage::Profile);
    assert!(shell.history().document_loads().is_empty());
}

#[test]
fn test_qwik_shell_back_and_forward() {
    let mut shell = qwik_shell(MemoryHistory::new(QwikPage::Home.route()));
    assert!(shell.navigate(QwikPage::Counter));
    assert!(shell.navigate(QwikPage::Contact));

    shell.history_mut().back();
    shell.history_mut().back();
    assert!(shell.on_pop_state());
    assert_eq!(shell.current_page(), QwikPage::Home);

    shell.history_mut().forward();
    assert!(shell.on_pop_state());
    assert_eq!(shell.current_page(), QwikPage::Counter);
}

#[test]
fn test_guest_cannot_reach_dashboard_through_history() {
    let mut history = MemoryHistory::new("/qwik-spa-auth/");
    history.push_state("/qwik-spa-auth/dashboard");
    history.push_state("/qwik-spa-auth/counter");

    let mut shell = qwik_auth_shell(history, AccessPolicy::for_role(Role::Guest));
    assert_eq!(shell.current_page(), QwikAuthPage::Counter);

    shell.history_mut().back();
    assert!(!shell.on_pop_state());
    assert_eq!(shell.current_page(), QwikAuthPage::Home);
    assert_eq!(shell.history().location(), "/qwik-spa-auth/");
}
