/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * Requests pass through, outermost first:
 * 1. `TraceLayer` - request/response tracing
 * 2. Access control - public paths pass, others run the server guard chain
 * 3. API routes, static pages and shells, then the static file fallback
 */

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::middleware::access_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::static_routes::configure_static_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the record store and access control
///
/// # Static Files
///
/// Paths that match no API route are served from the configured public
/// directory. See [`configure_static_routes`] for pages and shells.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());
    let router = configure_static_routes(router, &app_state.config.public_dir);

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(
                    app_state.access.clone(),
                    access_middleware,
                )),
        )
        .with_state(app_state)
}
