/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * Everything in the state is immutable after startup or internally
 * synchronised: the configuration and access control sit behind `Arc`,
 * and the record store wraps a thread-safe connection pool.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract only the part
 * they need:
 *
 * ```rust,ignore
 * async fn handler(State(store): State<Option<RecordStore>>) { /* ... */ }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::middleware::AccessControl;
use crate::backend::records::RecordStore;
use crate::shared::AppConfig;

/// Central state container of the Axum application
///
/// # Fields
///
/// * `config` - The configuration the server was started with
/// * `records` - Record store, `None` when no database is configured
/// * `access` - Public path table and server guard chain
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub records: Option<RecordStore>,
    pub access: Arc<AccessControl>,
}

impl AppState {
    pub fn new(config: AppConfig, records: Option<RecordStore>) -> Self {
        let access = Arc::new(AccessControl::for_site(&config));
        Self {
            config: Arc::new(config),
            records,
            access,
        }
    }
}

impl FromRef<AppState> for Option<RecordStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.records.clone()
    }
}

impl FromRef<AppState> for Arc<AccessControl> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.access.clone()
    }
}
