/**
 * Server Configuration
 *
 * This module turns the configured database URL into a ready record store.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * When the database cannot be opened the store is `None` and the server
 * continues without it; the record endpoints then report the database as
 * not configured.
 */

use crate::backend::records::RecordStore;
use crate::shared::AppConfig;

/// Open and migrate the record store
///
/// # Returns
///
/// - `Some(RecordStore)` if the database is successfully configured
/// - `None` if no database URL is set or the connection fails
///
/// # Example
///
/// ```rust,no_run
/// use islands::backend::server::config::load_database;
/// use islands::shared::AppConfig;
///
/// # async fn example() {
/// let config = AppConfig::builder().database_url("sqlite::memory:").build().unwrap();
/// let store = load_database(&config).await;
/// assert!(store.is_some());
/// # }
/// ```
pub async fn load_database(config: &AppConfig) -> Option<RecordStore> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Record endpoints will report the database as not configured.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let store = match RecordStore::connect(database_url).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match store.migrate().await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_url_means_no_store() {
        assert!(load_database(&AppConfig::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_file_database_is_created_and_migrated() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("records.db").display());
        let config = AppConfig::builder().database_url(url).build().unwrap();

        let store = load_database(&config).await.expect("store");
        assert!(store.get_all().await.unwrap().is_empty());
        assert!(dir.path().join("records.db").exists());
    }
}
