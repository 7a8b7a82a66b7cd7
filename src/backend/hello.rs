//! `GET /api/hello`: a liveness probe echoing the request URL.

use axum::{
    extract::OriginalUri,
    http::{header::HOST, HeaderMap},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

pub const HELLO_MESSAGE: &str = "Hello from the islands server!";

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    /// RFC 3339, millisecond precision, UTC
    pub timestamp: String,
    pub url: String,
}

pub async fn hello(headers: HeaderMap, OriginalUri(uri): OriginalUri) -> Json<HelloResponse> {
    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");

    Json(HelloResponse {
        message: HELLO_MESSAGE,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        url: format!("http://{host}{uri}"),
    })
}
