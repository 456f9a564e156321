//! In-memory record collection mirrored to one storage key.
//!
//! A collection is hydrated once per page and written back on every
//! mutation. Writes are versioned: a revision counter under
//! `{key}{revision_suffix}` detects that another tab wrote in between. The
//! write still goes through (last write wins), the caller just learns about
//! it.

use super::record::{CollectionError, Record};
use crate::shared::config::AppConfig;
use crate::shared::search::Searchable;
use crate::shared::storage::{self, KeyValueStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { revision: u64 },
    /// Stored revision differed from the loaded one; overwritten anyway.
    Conflict { expected: u64, found: u64 },
    /// Backend refused the write; memory and storage now diverge.
    Failed,
}

#[derive(Debug, Clone)]
pub struct RecordCollection<T: Record> {
    key: String,
    revision_key: String,
    records: Vec<T>,
    revision: u64,
}

impl<T: Record> RecordCollection<T> {
    /// Hydrate from storage, falling back to `fallback` when the key is
    /// absent or unreadable.
    pub fn load(
        storage: &dyn KeyValueStorage,
        key: &str,
        revision_key: &str,
        fallback: Vec<T>,
    ) -> Self {
        let mut records = storage::load(storage, key, fallback);
        records.iter_mut().for_each(T::normalize);
        let revision = storage::read_revision(storage, revision_key);
        log::debug!("Loaded {} {} record(s) from {}", records.len(), T::KIND, key);
        Self {
            key: key.to_string(),
            revision_key: revision_key.to_string(),
            records,
            revision,
        }
    }

    /// [`Self::load`] with the revision key derived from the configuration.
    pub fn load_configured(
        storage: &dyn KeyValueStorage,
        config: &AppConfig,
        key: &str,
        fallback: Vec<T>,
    ) -> Self {
        Self::load(storage, key, &config.revision_key(key), fallback)
    }

    /// Detached collection, never loaded from storage.
    pub fn in_memory(key: &str, records: Vec<T>) -> Self {
        Self {
            key: key.to_string(),
            revision_key: format!("{}.rev", key),
            records,
            revision: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.has_id(id))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.has_id(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    /// Apply `update` to the record with `id`.
    pub fn merge<F>(&mut self, id: &str, update: F) -> Result<(), CollectionError>
    where
        F: FnOnce(&mut T),
    {
        let record = self.get_mut(id).ok_or_else(|| CollectionError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })?;
        update(record);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<T, CollectionError> {
        let index = self
            .records
            .iter()
            .position(|r| r.has_id(id))
            .ok_or_else(|| CollectionError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })?;
        Ok(self.records.remove(index))
    }

    /// Write the whole collection back. Never fails towards the caller.
    pub fn persist(&mut self, storage: &dyn KeyValueStorage) -> SaveOutcome {
        let found = storage::read_revision(storage, &self.revision_key);
        let conflict = found != self.revision;
        if conflict {
            log::warn!(
                "{} was modified elsewhere (revision {} != {}); overwriting",
                self.key,
                found,
                self.revision
            );
        }

        if let Err(e) = storage::try_save(storage, &self.key, &self.records) {
            log::error!("Error saving data for key {}: {}", self.key, e);
            return SaveOutcome::Failed;
        }

        let expected = self.revision;
        let next = found.max(expected) + 1;
        if let Err(e) = storage::write_revision(storage, &self.revision_key, next) {
            log::warn!("Revision for {} not updated: {}", self.key, e);
        }
        self.revision = next;

        if conflict {
            SaveOutcome::Conflict { expected, found }
        } else {
            SaveOutcome::Saved { revision: next }
        }
    }
}

impl<T: Record + Searchable> RecordCollection<T> {
    /// Records matching `term` and `extra`, in storage order.
    pub fn filtered<P>(&self, term: &str, extra: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        crate::shared::search::filter_records(&self.records, term, extra)
    }
}
