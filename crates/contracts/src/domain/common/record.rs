use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Trait for a record kind stored as one element of a collection array
pub trait Record: Clone + Serialize + DeserializeOwned {
    // ============================================================================
    // Static record-kind data
    // ============================================================================

    /// Kind name for logs and errors (e.g. "order")
    const KIND: &'static str;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Identifier that is unique within the collection
    fn record_id(&self) -> &str;

    /// Whether `id` refers to this record. Exact match unless the kind
    /// uses a natural key with looser matching.
    fn has_id(&self, id: &str) -> bool {
        self.record_id() == id
    }

    /// Repair values after deserialization (clamping etc.)
    fn normalize(&mut self) {}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
    #[error("record '{id}' is protected and cannot be removed")]
    ProtectedRecord { id: String },
}
