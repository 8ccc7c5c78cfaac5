//! Editor controller.
//!
//! # Responsibility
//! - Apply add/update/delete/save requests against one session store.
//! - Mirror the selected record into the input form.
//!
//! # Invariants
//! - A rejected request leaves the store untouched.
//! - Add requires all four inputs non-empty after trimming; update does not
//!   re-check emptiness, it only requires a selection.
//! - Save never mutates the store, whether it succeeds or fails.

use crate::codec::{PersistenceError, RecordFile};
use crate::model::record::{Record, RecordColumn, RecordFields, RecordId};
use crate::store::record_store::{RecordStore, StoreChange, StoreError, SubscriptionId};
use crate::view::filter_sort::RecordView;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message carried by [`EditorError::Validation`] for add.
pub const ALL_FIELDS_REQUIRED: &str = "all fields required";
/// Message carried by [`EditorError::Selection`] for update/delete.
pub const NO_RECORD_SELECTED: &str = "no record selected";

pub type EditorResult<T> = Result<T, EditorError>;

/// Editor-level error. Every variant is recoverable by the caller.
#[derive(Debug)]
pub enum EditorError {
    /// Required input is empty.
    Validation(&'static str),
    /// Update or delete requested without a selected record.
    Selection(&'static str),
    /// Data file could not be read or written.
    Persistence(PersistenceError),
    /// Selection refers to a record no longer held by the store.
    Store(StoreError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) | Self::Selection(message) => f.write_str(message),
            Self::Persistence(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(_) | Self::Selection(_) => None,
            Self::Persistence(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<PersistenceError> for EditorError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Session editor over a store, its view and its data file.
#[derive(Debug)]
pub struct EditorController {
    store: RecordStore,
    view: RecordView,
    inputs: RecordFields,
    selection: Option<RecordId>,
    file: RecordFile,
    load_error: Option<PersistenceError>,
}

impl EditorController {
    /// Loads `file` into a fresh store.
    ///
    /// A read failure is logged and kept in [`Self::load_error`]; the session
    /// then starts with an empty store instead of failing.
    pub fn open(file: RecordFile) -> Self {
        let (store, load_error) = match file.load() {
            Ok(fields) => (RecordStore::from_fields(fields), None),
            Err(err) => {
                error!(
                    "event=editor_open module=editor status=degraded error_code=load_failed error={}",
                    err
                );
                (RecordStore::new(), Some(err))
            }
        };
        info!(
            "event=editor_open module=editor status=ok count={}",
            store.len()
        );
        Self::from_parts(store, file, load_error)
    }

    /// Wraps an existing store without reading `file`.
    pub fn with_store(store: RecordStore, file: RecordFile) -> Self {
        Self::from_parts(store, file, None)
    }

    fn from_parts(store: RecordStore, file: RecordFile, load_error: Option<PersistenceError>) -> Self {
        Self {
            store,
            view: RecordView::new(),
            inputs: RecordFields::default(),
            selection: None,
            file,
            load_error,
        }
    }

    /// Startup load failure, if the session began degraded.
    pub fn load_error(&self) -> Option<&PersistenceError> {
        self.load_error.as_ref()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn record_file(&self) -> &RecordFile {
        &self.file
    }

    /// Registers a store listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreChange) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn inputs(&self) -> &RecordFields {
        &self.inputs
    }

    pub fn set_input(&mut self, column: RecordColumn, value: impl Into<String>) {
        self.inputs.set(column, value);
    }

    /// Replaces all four inputs at once.
    pub fn set_inputs(&mut self, fields: RecordFields) {
        self.inputs = fields;
    }

    pub fn clear_inputs(&mut self) {
        self.inputs.clear();
    }

    pub fn selection(&self) -> Option<RecordId> {
        self.selection
    }

    /// Changes the selection and mirrors the selected record into the inputs.
    ///
    /// `None` clears the selection but leaves the inputs as they are.
    ///
    /// # Errors
    /// - `EditorError::Store` when `id` is not held by the store; the previous
    ///   selection is kept.
    pub fn select(&mut self, id: Option<RecordId>) -> EditorResult<()> {
        let Some(id) = id else {
            self.selection = None;
            return Ok(());
        };
        let record = self.store.get(id).ok_or(StoreError::NotFound(id))?;
        self.inputs = record.fields.clone();
        self.selection = Some(id);
        Ok(())
    }

    /// Adds a record from the trimmed inputs and clears them.
    ///
    /// # Errors
    /// - `EditorError::Validation` when any input is empty after trimming.
    pub fn add(&mut self) -> EditorResult<RecordId> {
        if let Some(column) = self.inputs.first_empty() {
            debug!(
                "event=record_add module=editor status=rejected reason=validation column={}",
                column
            );
            return Err(EditorError::Validation(ALL_FIELDS_REQUIRED));
        }
        let id = self.store.add(self.inputs.trimmed());
        self.clear_inputs();
        info!(
            "event=record_add module=editor status=ok count={}",
            self.store.len()
        );
        Ok(id)
    }

    /// Overwrites the selected record with the trimmed inputs and clears them.
    ///
    /// Empty inputs are written as-is; only the selection is checked.
    ///
    /// # Errors
    /// - `EditorError::Selection` when nothing is selected.
    /// - `EditorError::Store` when the selected record is gone.
    pub fn update(&mut self) -> EditorResult<RecordId> {
        let id = self.require_selection("record_update")?;
        self.store.update(id, self.inputs.trimmed())?;
        self.clear_inputs();
        info!("event=record_update module=editor status=ok");
        Ok(id)
    }

    /// Removes the selected record, clearing inputs and selection.
    ///
    /// # Errors
    /// - `EditorError::Selection` when nothing is selected.
    /// - `EditorError::Store` when the selected record is gone.
    pub fn delete(&mut self) -> EditorResult<Record> {
        let id = self.require_selection("record_delete")?;
        let record = self.store.remove(id)?;
        self.selection = None;
        self.clear_inputs();
        info!(
            "event=record_delete module=editor status=ok count={}",
            self.store.len()
        );
        Ok(record)
    }

    /// Writes the whole store to the data file and returns the record count.
    ///
    /// # Errors
    /// - `EditorError::Persistence` when the write fails; the store is kept.
    pub fn save(&self) -> EditorResult<usize> {
        match self.file.save(self.store.all()) {
            Ok(count) => Ok(count),
            Err(err) => {
                warn!("event=editor_save module=editor status=error store_kept=true");
                Err(err.into())
            }
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.view.set_search_text(text);
    }

    /// Manual search trigger; re-applies the current search text.
    pub fn search(&mut self) {
        let text = self.view.search_text().to_string();
        self.view.set_search_text(text);
    }

    pub fn set_sort(&mut self, column: RecordColumn, ascending: bool) {
        self.view.set_sort(column, ascending);
    }

    pub fn clear_sort(&mut self) {
        self.view.clear_sort();
    }

    pub fn record_view(&self) -> &RecordView {
        &self.view
    }

    /// Current filtered and sorted rows.
    pub fn view(&self) -> Vec<&Record> {
        self.view.view(&self.store)
    }

    fn require_selection(&self, event: &str) -> EditorResult<RecordId> {
        self.selection.ok_or_else(|| {
            debug!("event={event} module=editor status=rejected reason=no_selection");
            EditorError::Selection(NO_RECORD_SELECTED)
        })
    }
}
