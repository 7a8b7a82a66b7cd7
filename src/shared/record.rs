/**
 * Record Entity
 *
 * The single CRUD entity exposed by the demo API, plus the request shapes
 * used to create, patch and address it.
 *
 * # Ownership
 *
 * Records are owned by the external store. Nothing here caches them; the
 * types only describe rows and requests.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A row of the `test` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Record {
    /// Auto-assigned, immutable primary key
    pub id: i64,
    pub name: String,
    pub surname: String,
}

/// Fields required to insert a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub surname: String,
}

/// Create request as received from clients
///
/// Both fields are optional at the wire level so that a missing field
/// surfaces as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateRecordRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

impl CreateRecordRequest {
    /// Validate the request into a [`NewRecord`]
    ///
    /// Empty strings count as missing.
    pub fn into_new_record(self) -> Result<NewRecord, SharedError> {
        match (non_empty(self.name), non_empty(self.surname)) {
            (Some(name), Some(surname)) => Ok(NewRecord { name, surname }),
            (None, _) => Err(SharedError::validation("name", "Name and surname are required")),
            (_, None) => Err(SharedError::validation("surname", "Name and surname are required")),
        }
    }
}

/// Partial update of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none()
    }
}

/// Identifier as it arrives on the wire: a JSON number or a string from a
/// form, query string or header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

/// Update/delete payload
///
/// Collected from whichever request part the client used; see
/// `backend::records::payload` for the merge order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

impl RecordPayload {
    /// Fill every unset field from `other`
    pub fn or(self, other: RecordPayload) -> RecordPayload {
        RecordPayload {
            id: self.id.or(other.id),
            name: self.name.or(other.name),
            surname: self.surname.or(other.surname),
        }
    }

    /// The addressed record id
    pub fn record_id(&self) -> Result<i64, SharedError> {
        match &self.id {
            Some(RecordId::Number(id)) => Ok(*id),
            Some(RecordId::Text(raw)) => parse_record_id(raw),
            None => Err(SharedError::validation("id", "Invalid ID")),
        }
    }

    /// The fields to change; empty strings are ignored
    pub fn patch(&self) -> RecordPatch {
        RecordPatch {
            name: non_empty(self.name.clone()),
            surname: non_empty(self.surname.clone()),
        }
    }
}

/// Parse a record id from its textual form
///
/// Surrounding whitespace is tolerated, anything else that is not a base-10
/// integer is rejected.
pub fn parse_record_id(raw: &str) -> Result<i64, SharedError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SharedError::validation("id", "Invalid ID"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
