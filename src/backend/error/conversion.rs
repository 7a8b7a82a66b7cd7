/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses, either as JSON
 * (the default) or as an HTML fragment for HTML-over-the-wire clients.
 *
 * # Response Format
 *
 * ```json
 * { "error": "User not found" }
 * ```
 *
 * Store errors also report the failure and the store's message:
 *
 * ```json
 * { "success": false, "error": "Failed to fetch test data", "message": "..." }
 * ```
 */

use axum::{
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::backend::records::fragments;

impl BackendError {
    /// JSON body describing this error
    pub fn body(&self) -> serde_json::Value {
        match self.detail() {
            Some(detail) => serde_json::json!({
                "success": false,
                "error": self.message(),
                "message": detail,
            }),
            None => serde_json::json!({ "error": self.message() }),
        }
    }

    /// Render this error as an HTML fragment with the same status code
    pub fn into_fragment_response(self) -> Response {
        let status = self.status_code();
        let fragment = match &self {
            BackendError::NotConfigured => fragments::not_configured(),
            other => fragments::error_notice(&other.message(), other.detail().as_deref()),
        };
        (status, Html(fragment)).into_response()
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        if let BackendError::Store { context, source } = &self {
            tracing::error!("{}: {:?}", context, source);
        }
        (self.status_code(), Json(self.body())).into_response()
    }
}
