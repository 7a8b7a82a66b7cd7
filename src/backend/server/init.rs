/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the record store (if configured)
 * 2. Build the application state, including access control
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::records::RecordStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is designed to be resilient:
/// - Missing database: Server continues without database features
/// - Migration failures: Logged but don't prevent startup
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing islands backend server");

    let records = load_database(&config).await;
    build_app(config, records)
}

/// Assemble the application around an already opened store
pub fn build_app(config: AppConfig, records: Option<RecordStore>) -> Router<()> {
    tracing::info!(
        authenticated = config.authenticated,
        database = records.is_some(),
        public_dir = %config.public_dir.display(),
        "Building router"
    );

    let app_state = AppState::new(config, records);
    create_router(app_state)
}
