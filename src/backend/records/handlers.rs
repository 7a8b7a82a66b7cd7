/**
 * Record Handlers
 *
 * HTTP handlers for the `/api/test` endpoints. Each handler checks that the
 * store is configured, validates its input, runs one store operation and
 * shapes the response.
 *
 * # Endpoints
 *
 * - `GET /api/test` - List all records
 * - `POST /api/test` - Create a record from JSON `{name, surname}`
 * - `GET /api/test/{id}` - Fetch one record with its description
 * - `PUT /api/test` - Patch a record (payload from body, query or headers)
 * - `DELETE /api/test` - Delete a record (payload from body, query or headers)
 * - `GET /api/test-table` - The record table as an HTML fragment
 *
 * # Response Format
 *
 * PUT and DELETE answer with the refreshed record table when the request
 * carries `HX-Request`; every other response is JSON.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::backend::error::BackendError;
use crate::backend::records::fragments;
use crate::backend::records::payload::{RecordForm, ResponseFormat};
use crate::backend::records::store::{RecordStore, UpdateOutcome};
use crate::shared::record::{parse_record_id, CreateRecordRequest, RecordPayload};

/// Description attached to single-record responses
pub const RECORD_DESCRIPTION: &str = "This is a hard-coded description";

const RECORD_NOT_FOUND: &str = "User not found";

fn require_store(store: Option<RecordStore>) -> Result<RecordStore, BackendError> {
    store.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::NotConfigured
    })
}

/// List every record
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "data": [{ "id": 1, "name": "Ada", "surname": "Lovelace" }],
///   "meta": { "count": 1, "success": true }
/// }
/// ```
pub async fn list_records(
    State(store): State<Option<RecordStore>>,
) -> Result<Json<Value>, BackendError> {
    let store = require_store(store)?;
    let records = store
        .get_all()
        .await
        .map_err(|e| BackendError::store("Failed to fetch test data", e))?;

    Ok(Json(json!({
        "success": true,
        "meta": { "count": records.len(), "success": true },
        "data": records,
    })))
}

/// Create a record
///
/// Answers 201 with the stored record. A body that is not valid JSON is a
/// validation error, as is a missing or empty `name` or `surname`.
pub async fn create_record(
    State(store): State<Option<RecordStore>>,
    request: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), BackendError> {
    let store = require_store(store)?;

    let Json(request) = request.map_err(|rejection| {
        tracing::warn!("Rejected create payload: {}", rejection.body_text());
        BackendError::validation(rejection.body_text())
    })?;
    let new_record = request.into_new_record()?;

    let record = store
        .create(&new_record)
        .await
        .map_err(|e| BackendError::store("Failed to create test record", e))?;
    tracing::info!("Created test record {}", record.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": record })),
    ))
}

/// Fetch one record by its path id
pub async fn get_record(
    State(store): State<Option<RecordStore>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    let store = require_store(store)?;
    let id = parse_record_id(&raw_id)?;

    let record = store
        .get_by_id(id)
        .await
        .map_err(|e| BackendError::store("Failed to fetch test record", e))?
        .ok_or_else(|| BackendError::not_found(RECORD_NOT_FOUND))?;

    Ok(Json(json!({
        "id": record.id,
        "name": record.name,
        "surname": record.surname,
        "description": RECORD_DESCRIPTION,
    })))
}

/// Patch a record
pub async fn update_record(
    State(store): State<Option<RecordStore>>,
    format: ResponseFormat,
    RecordForm(payload): RecordForm,
) -> Response {
    let outcome = apply_update(store.clone(), payload).await;
    respond(format, store, outcome).await
}

/// Delete a record
pub async fn delete_record(
    State(store): State<Option<RecordStore>>,
    format: ResponseFormat,
    RecordForm(payload): RecordForm,
) -> Response {
    let outcome = apply_delete(store.clone(), payload).await;
    respond(format, store, outcome).await
}

/// The record table as an HTML fragment
///
/// Always answers 200; problems are reported inside the fragment.
pub async fn records_table(State(store): State<Option<RecordStore>>) -> Html<String> {
    let Some(store) = store else {
        tracing::warn!("Record table requested without a database");
        return Html(fragments::not_configured());
    };

    match store.get_all().await {
        Ok(records) => Html(fragments::records_table(&records)),
        Err(e) => {
            tracing::error!("Error fetching test data: {:?}", e);
            Html(fragments::table_error(
                "Failed to fetch test data",
                Some(&e.to_string()),
            ))
        }
    }
}

async fn apply_update(
    store: Option<RecordStore>,
    payload: RecordPayload,
) -> Result<Value, BackendError> {
    let store = require_store(store)?;
    let id = payload.record_id()?;
    let patch = payload.patch();

    let outcome = store
        .update(id, &patch)
        .await
        .map_err(|e| BackendError::store("Failed to update test record", e))?;

    match outcome {
        UpdateOutcome::Updated(record) => {
            tracing::info!("Updated test record {}", record.id);
            Ok(json!({ "success": true, "data": record }))
        }
        UpdateOutcome::NothingToUpdate => Err(BackendError::validation("No fields to update")),
        UpdateOutcome::NotFound => Err(BackendError::not_found(RECORD_NOT_FOUND)),
    }
}

async fn apply_delete(
    store: Option<RecordStore>,
    payload: RecordPayload,
) -> Result<Value, BackendError> {
    let store = require_store(store)?;
    let id = payload.record_id()?;

    let deleted = store
        .delete(id)
        .await
        .map_err(|e| BackendError::store("Failed to delete test record", e))?;

    if !deleted {
        return Err(BackendError::not_found(RECORD_NOT_FOUND));
    }
    tracing::info!("Deleted test record {}", id);
    Ok(json!({ "success": true, "id": id }))
}

/// Shape a mutation outcome for the requested format
async fn respond(
    format: ResponseFormat,
    store: Option<RecordStore>,
    outcome: Result<Value, BackendError>,
) -> Response {
    match (format, outcome) {
        (ResponseFormat::Json, Ok(body)) => Json(body).into_response(),
        (ResponseFormat::Json, Err(e)) => e.into_response(),
        (ResponseFormat::Html, Ok(_)) => records_table(State(store)).await.into_response(),
        (ResponseFormat::Html, Err(e)) => {
            if let BackendError::Store { context, source } = &e {
                tracing::error!("{}: {:?}", context, source);
            }
            e.into_fragment_response()
        }
    }
}
