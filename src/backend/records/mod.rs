//! Records Module
//!
//! The CRUD API over the `test` table.
//!
//! # Architecture
//!
//! - **`store`** - `RecordStore`, one parameterised statement per operation
//! - **`payload`** - Extractors for update/delete payloads and response format
//! - **`fragments`** - HTML fragments for HTML-over-the-wire clients
//! - **`handlers`** - Axum handlers for `/api/test` and `/api/test-table`
//!
//! # Module Structure
//!
//! ```text
//! records/
//! ├── mod.rs        - Module exports and documentation
//! ├── store.rs      - Store adapter
//! ├── payload.rs    - Request extractors
//! ├── fragments.rs  - HTML rendering
//! └── handlers.rs   - HTTP handlers
//! ```
//!
//! The store is optional: when no database is configured the state holds
//! `None` and every JSON handler answers 500 `Database not configured`.

pub mod store;

pub mod payload;

pub mod fragments;

pub mod handlers;

pub use handlers::{
    create_record, delete_record, get_record, list_records, records_table, update_record,
};
pub use payload::{RecordForm, ResponseFormat};
pub use store::{RecordStore, UpdateOutcome};
