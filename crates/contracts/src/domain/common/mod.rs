//! Common types and traits for all record kinds

pub mod collection;
pub mod record;

// Re-exports
pub use collection::{RecordCollection, SaveOutcome};
pub use record::{CollectionError, Record};
