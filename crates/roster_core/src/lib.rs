//! Core domain logic for the student roster.
//! This crate is the single source of truth for record invariants.

pub mod auth;
pub mod codec;
pub mod config;
pub mod editor;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use auth::{AuthError, LoginGate};
pub use codec::line_codec::{parse, serialize, ParsedRecords};
pub use codec::{PersistenceError, PersistenceResult, RecordFile};
pub use config::{RosterConfig, DEFAULT_DATA_FILE};
pub use editor::controller::{
    EditorController, EditorError, EditorResult, ALL_FIELDS_REQUIRED, NO_RECORD_SELECTED,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{Record, RecordColumn, RecordFields, RecordId, UnknownColumn};
pub use store::record_store::{
    RecordStore, StoreChange, StoreError, StoreResult, SubscriptionId,
};
pub use view::filter_sort::{RecordView, SortDirection, SortOrder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
