//! Ordered in-memory record storage.
//!
//! A [`RecordStore`] holds every record of one kind in insertion order and
//! answers lookups with a linear scan. IDs are assigned sequentially: a new
//! record gets one more than the largest ID currently held, or
//! [`RecordId::first`] when the store is empty. Removing the record with the
//! largest ID therefore frees that ID for reuse.
//!
//! The store performs no locking. Share it behind a lock when handlers run
//! concurrently.

use thiserror::Error;

use crate::types::{Record, RecordId};

/// Errors returned by [`RecordStore`] mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The largest ID in the store has no successor.
    #[error("no {0} ID left to assign")]
    IdSpaceExhausted(crate::EntityKind),
}

/// An ordered collection of records of a single kind.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order.
    ///
    /// Callers are responsible for ID uniqueness; seed data is trusted.
    #[must_use]
    pub const fn with_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list_all(&self) -> &[R] {
        &self.records
    }

    /// The first record with the given ID.
    #[must_use]
    pub fn find(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Append a new record built from `draft` and return a copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the largest held ID has no
    /// successor.
    pub fn insert(&mut self, draft: R::Draft) -> Result<R, StoreError> {
        let id = self.next_id()?;
        let record = R::assemble(id, draft);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Overwrite every non-ID field of the record with the given ID, keeping
    /// its position. Returns the updated record, or `None` if absent.
    pub fn replace(&mut self, id: R::Id, draft: R::Draft) -> Option<R> {
        let record = self.records.iter_mut().find(|record| record.id() == id)?;
        record.overwrite(draft);
        Some(record.clone())
    }

    /// Remove the record with the given ID. Returns `false` if absent.
    pub fn remove(&mut self, id: R::Id) -> bool {
        match self.records.iter().position(|record| record.id() == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&self) -> Result<R::Id, StoreError> {
        match self.records.iter().map(R::id).max() {
            Some(max) => max
                .checked_next()
                .ok_or(StoreError::IdSpaceExhausted(R::KIND)),
            None => Ok(R::Id::first()),
        }
    }
}
