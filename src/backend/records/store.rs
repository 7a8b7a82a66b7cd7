/**
 * Record Store
 *
 * Thin adapter over the `test` table. Every operation is one parameterised
 * statement; values are always bound, never interpolated.
 *
 * # Error Handling
 *
 * Store errors are returned unchanged as `sqlx::Error`. Handlers attach the
 * failed operation as context when converting to `BackendError`.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use crate::shared::{NewRecord, Record, RecordPatch};

/// Result of a partial update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(Record),
    /// The patch carried no fields; no statement was issued
    NothingToUpdate,
    NotFound,
}

/// Handle to the records table
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, creating the database file if needed
    ///
    /// In-memory databases are per connection, so they are pinned to a single
    /// connection that is never recycled.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options.connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// Apply the embedded migrations
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// All records, in id order
    pub async fn get_all(&self) -> Result<Vec<Record>, sqlx::Error> {
        sqlx::query_as::<_, Record>("SELECT id, name, surname FROM test ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Record>, sqlx::Error> {
        sqlx::query_as::<_, Record>("SELECT id, name, surname FROM test WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a record and return it with its assigned id
    pub async fn create(&self, record: &NewRecord) -> Result<Record, sqlx::Error> {
        sqlx::query_as::<_, Record>(
            "INSERT INTO test (name, surname) VALUES (?, ?) RETURNING id, name, surname",
        )
        .bind(&record.name)
        .bind(&record.surname)
        .fetch_one(&self.pool)
        .await
    }

    /// Apply the fields present in `patch` to record `id`
    pub async fn update(&self, id: i64, patch: &RecordPatch) -> Result<UpdateOutcome, sqlx::Error> {
        if patch.is_empty() {
            return Ok(UpdateOutcome::NothingToUpdate);
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE test SET ");
        let mut fields = builder.separated(", ");
        if let Some(name) = &patch.name {
            fields.push("name = ");
            fields.push_bind_unseparated(name.clone());
        }
        if let Some(surname) = &patch.surname {
            fields.push("surname = ");
            fields.push_bind_unseparated(surname.clone());
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" RETURNING id, name, surname");

        let updated = builder
            .build_query_as::<Record>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(match updated {
            Some(record) => UpdateOutcome::Updated(record),
            None => UpdateOutcome::NotFound,
        })
    }

    /// Delete record `id`; returns whether a row was removed
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM test WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    async fn store() -> RecordStore {
        let store = RecordStore::connect("sqlite::memory:").await.unwrap();
        store.migrate().await.unwrap();
        store
    }

    fn new_record(name: &str, surname: &str) -> NewRecord {
        NewRecord {
            name: name.to_string(),
            surname: surname.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = store().await;
        let first = store.create(&new_record("Ada", "Lovelace")).await.unwrap();
        let second = store.create(&new_record("Alan", "Turing")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(store.get_all().await.unwrap(), vec![first.clone(), second]);
        assert_eq!(store.get_by_id(first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let store = store().await;
        assert_eq!(store.get_by_id(404).await.unwrap(), None);
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_field() {
        let store = store().await;
        let record = store.create(&new_record("Ada", "Lovelace")).await.unwrap();

        let patch = RecordPatch {
            name: Some("Augusta".to_string()),
            surname: None,
        };
        let outcome = store.update(record.id, &patch).await.unwrap();
        assert_matches!(outcome, UpdateOutcome::Updated(ref r) if r.name == "Augusta" && r.surname == "Lovelace");
    }

    #[tokio::test]
    async fn test_update_missing_and_empty() {
        let store = store().await;
        let patch = RecordPatch {
            name: None,
            surname: Some("X".to_string()),
        };
        assert_eq!(store.update(99, &patch).await.unwrap(), UpdateOutcome::NotFound);
        assert_eq!(
            store.update(99, &RecordPatch::default()).await.unwrap(),
            UpdateOutcome::NothingToUpdate
        );
    }

    #[tokio::test]
    async fn test_empty_patch_issues_no_statement() {
        let store = store().await;
        store.pool().close().await;

        // A closed pool fails every statement, so success means none ran
        assert_eq!(
            store.update(1, &RecordPatch::default()).await.unwrap(),
            UpdateOutcome::NothingToUpdate
        );
        assert!(store.get_all().await.is_err());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = store().await;
        let record = store.create(&new_record("Ada", "Lovelace")).await.unwrap();

        assert!(store.delete(record.id).await.unwrap());
        assert!(!store.delete(record.id).await.unwrap());
        assert_eq!(store.get_by_id(record.id).await.unwrap(), None);
    }
}
