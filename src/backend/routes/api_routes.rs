/**
 * API Routes
 *
 * # Routes
 *
 * ## Records
 * - `GET /api/test` - List records
 * - `POST /api/test` - Create a record
 * - `PUT /api/test` - Update a record
 * - `DELETE /api/test` - Delete a record
 * - `GET /api/test/{id}` - Fetch one record
 * - `GET /api/test-table` - Record table as an HTML fragment
 *
 * ## Diagnostics
 * - `GET /api/hello` - Greeting with timestamp and request URL
 */

use axum::{routing::get, Router};

use crate::backend::hello::hello;
use crate::backend::records::{
    create_record, delete_record, get_record, list_records, records_table, update_record,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/test",
            get(list_records)
                .post(create_record)
                .put(update_record)
                .delete(delete_record),
        )
        .route("/api/test/{id}", get(get_record))
        .route("/api/test-table", get(records_table))
        .route("/api/hello", get(hello))
}
