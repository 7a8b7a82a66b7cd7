//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - In-memory record store fixtures
//! - Test server construction
//! - Custom assertion macros

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod database;

pub use database::*;

use axum_test::TestServer;
use islands::backend::server::build_app;
use islands::backend::RecordStore;
use islands::shared::AppConfig;

/// Build a test server around `config` and an optional store
pub fn test_server(config: AppConfig, records: Option<RecordStore>) -> TestServer {
    TestServer::new(build_app(config, records)).expect("Failed to create test server")
}

/// A test server backed by a fresh in-memory database
pub async fn test_server_with_db() -> (TestServer, RecordStore) {
    let store = memory_store().await;
    let server = test_server(AppConfig::default(), Some(store.clone()));
    (server, store)
}
