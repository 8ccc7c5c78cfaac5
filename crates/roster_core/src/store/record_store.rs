//! Observable record store.
//!
//! # Responsibility
//! - Provide add/update/remove/enumerate over session records.
//! - Publish a `StoreChange` to every subscriber after each mutation.
//!
//! # Invariants
//! - `all()` always reflects every mutation applied so far.
//! - Listeners run after the mutation is visible, in subscription order.
//! - `revision()` strictly increases with every mutation.

use crate::model::record::{Record, RecordFields, RecordId};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for id-addressed operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Mutation notification delivered to store subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Added { id: RecordId, index: usize },
    Updated { id: RecordId, index: usize },
    Removed { id: RecordId, index: usize },
    /// Contents were swapped wholesale (load).
    Replaced { len: usize },
}

/// Handle returned by [`RecordStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreChange)>;

/// Ordered, observable collection of records.
#[derive(Default)]
pub struct RecordStore {
    records: Vec<Record>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    revision: u64,
}

impl Debug for RecordStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from field values in order, assigning fresh ids.
    pub fn from_fields(fields: impl IntoIterator<Item = RecordFields>) -> Self {
        Self {
            records: fields.into_iter().map(Record::new).collect(),
            ..Self::default()
        }
    }

    /// Appends a record and returns its new id. No duplicate check.
    pub fn add(&mut self, fields: RecordFields) -> RecordId {
        let record = Record::new(fields);
        let id = record.id;
        self.records.push(record);
        let index = self.records.len() - 1;
        self.publish(StoreChange::Added { id, index });
        id
    }

    /// Overwrites all four fields of an existing record in place.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `id` is not held by this store.
    pub fn update(&mut self, id: RecordId, fields: RecordFields) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.records[index].fields = fields;
        self.publish(StoreChange::Updated { id, index });
        Ok(())
    }

    /// Removes a record and returns it.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `id` is not held by this store.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<Record> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let record = self.records.remove(index);
        self.publish(StoreChange::Removed { id, index });
        Ok(record)
    }

    /// Replaces the whole collection, assigning fresh ids.
    pub fn replace_all(&mut self, fields: impl IntoIterator<Item = RecordFields>) {
        self.records = fields.into_iter().map(Record::new).collect();
        let len = self.records.len();
        self.publish(StoreChange::Replaced { len });
    }

    /// Current records in store order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Owned copy of the current records.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Zero-based store position of a record.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mutation counter; starts at 0.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener called after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drops a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn publish(&mut self, change: StoreChange) {
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }
}
