//! # Record Store
//!
//! Owns the authoritative, ordered list of accepted records. Every mutation
//! goes through [`RecordStore`] and rewrites the whole list to session storage
//! before it returns.
//!
//! ## Persistence Protocol
//!
//! 1. Build the next list from the current one.
//! 2. Serialize it and overwrite the storage key in one `set_item` call.
//! 3. Only then replace the in-memory list.
//!
//! If step 2 fails, the in-memory list still equals what storage holds.
//!
//! ## Loading
//!
//! Loading never fails. A missing key, an unreadable blob, or a storage read
//! error all yield an empty list.

use crate::error::{RegbookError, Result};
use crate::model::Record;
use crate::store::SessionStorage;

/// Key the record list is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "submittedData";

pub struct RecordStore<S: SessionStorage> {
    storage: S,
    key: String,
    records: Vec<Record>,
}

impl<S: SessionStorage> RecordStore<S> {
    /// Build a store whose initial list is whatever `storage` holds under `key`.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = read_records(&storage, &key);
        Self {
            storage,
            key,
            records,
        }
    }

    /// Read the persisted list, as a fresh page load would.
    pub fn load(&self) -> Vec<Record> {
        read_records(&self.storage, &self.key)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Result<&Record> {
        let len = self.records.len();
        self.records
            .get(index)
            .ok_or(RegbookError::IndexOutOfRange { index, len })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Insert at the end. Returns the new record's position.
    pub fn append(&mut self, record: Record) -> Result<usize> {
        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)?;
        Ok(self.records.len() - 1)
    }

    pub fn replace_at(&mut self, index: usize, record: Record) -> Result<()> {
        self.check_index(index)?;
        let mut next = self.records.clone();
        next[index] = record;
        self.commit(next)
    }

    /// Remove the record at `index`, shifting later records down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Record> {
        self.check_index(index)?;
        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(RegbookError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, next: Vec<Record>) -> Result<()> {
        let blob = serde_json::to_string(&next)?;
        self.storage.set_item(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = next.len(), "persisted record list");
        self.records = next;
        Ok(())
    }
}

fn read_records<S: SessionStorage>(storage: &S, key: &str) -> Vec<Record> {
    let blob = match storage.get_item(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(key, error = %err, "could not read stored records, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Record>>(&blob) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(key, error = %err, "stored records are unreadable, starting empty");
            Vec::new()
        }
    }
}
