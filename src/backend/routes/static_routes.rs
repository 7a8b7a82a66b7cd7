/**
 * Static Site Routes
 *
 * Pages of the built site live in the public directory in directory
 * format (`about/index.html`). A plain `ServeDir` would answer `/about`
 * with a redirect to `/about/`, which is not a public path, so named pages
 * are bound to their document directly.
 *
 * # Routes
 *
 * - Exact public pages and known restricted pages - `{page}/index.html`
 * - Single-page shells - files under `{base}/`, anything else under the
 *   base answers with `{base}/index.html` so deep links survive a reload
 * - Everything else - `ServeDir` fallback over the public directory
 */

use std::path::{Path, PathBuf};

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::backend::middleware::access::KNOWN_PAGES;
use crate::backend::server::state::AppState;
use crate::shared::navigation::classifier::PUBLIC_EXACT;
use crate::shared::navigation::SPA_BASES;

/// Path of a site-relative route inside `public_dir`
fn local_path(public_dir: &Path, route: &str) -> PathBuf {
    public_dir.join(route.trim_start_matches('/'))
}

/// Configure static page, shell and fallback routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `public_dir` - Root of the built site
pub fn configure_static_routes(router: Router<AppState>, public_dir: &Path) -> Router<AppState> {
    let pages = PUBLIC_EXACT
        .iter()
        .chain(KNOWN_PAGES)
        .copied()
        .filter(|page| *page != "/");

    let router = pages.fold(router, |router, page| {
        let document = local_path(public_dir, page).join("index.html");
        router.route_service(page, ServeFile::new(document))
    });

    let router = SPA_BASES.iter().copied().fold(router, |router, base| {
        let root = local_path(public_dir, base);
        let shell = ServeDir::new(&root)
            .append_index_html_on_directories(true)
            .fallback(ServeFile::new(root.join("index.html")));
        router.nest_service(base, shell)
    });

    router.fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
}
