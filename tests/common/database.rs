//! Database test fixtures
//!
//! Every fixture gets its own in-memory SQLite database, so tests never
//! share rows and need no cleanup.

use islands::backend::RecordStore;
use islands::shared::{NewRecord, Record};

/// A migrated, empty in-memory store
pub async fn memory_store() -> RecordStore {
    let store = RecordStore::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    store.migrate().await.expect("Failed to run migrations");
    store
}

/// Insert a record directly through the store
pub async fn seed(store: &RecordStore, name: &str, surname: &str) -> Record {
    store
        .create(&NewRecord {
            name: name.to_string(),
            surname: surname.to_string(),
        })
        .await
        .expect("Failed to seed record")
}
